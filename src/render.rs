//! Draw commands handed to the host renderer.

use crate::cloth::Cloth;
use crate::float::Float;
use crate::vec::Vec2;

/// One primitive for the host to draw. The crate owns no rendering backend.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawCommand<F: Float> {
    /// Filled circle for a particle.
    Disc { center: Vec2<F>, radius: F },
    /// Stroked line for an active constraint.
    Segment { from: Vec2<F>, to: Vec2<F> },
}

impl<F: Float> Cloth<F> {
    /// Endpoints of every active constraint, in constraint order.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        self.constraints()
            .iter()
            .filter(|c| c.is_active())
            .map(move |c| c.endpoints(self.particles()))
    }

    /// One disc per particle, then one segment per active constraint.
    /// Torn links are never emitted.
    pub fn draw_commands(&self) -> impl Iterator<Item = DrawCommand<F>> + '_ {
        let discs = self.particles().iter().map(|p| DrawCommand::Disc {
            center: p.pos,
            radius: p.radius(),
        });
        let segments = self.segments().map(|(from, to)| DrawCommand::Segment { from, to });
        discs.chain(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::MeshBuilder;

    #[test]
    fn torn_links_are_not_drawn() {
        let mut cloth = MeshBuilder::new(2, 2, 10.0f32).build().unwrap();
        assert_eq!(cloth.draw_commands().count(), 4 + 4);

        cloth.deactivate(0);
        let commands: alloc::vec::Vec<_> = cloth.draw_commands().collect();
        let discs = commands.iter().filter(|c| matches!(c, DrawCommand::Disc { .. })).count();
        assert_eq!(discs, 4);
        assert_eq!(commands.len(), 7);
        assert!(!commands.contains(&DrawCommand::Segment {
            from: Vec2::new(0.0, 0.0),
            to: Vec2::new(10.0, 0.0),
        }));
    }

    #[test]
    fn discs_carry_radius() {
        let cloth = MeshBuilder::new(1, 2, 10.0f32).with_particle_radius(2.5).build().unwrap();
        let first = cloth.draw_commands().next();
        assert_eq!(first, Some(DrawCommand::Disc { center: Vec2::new(0.0, 0.0), radius: 2.5 }));
    }
}
