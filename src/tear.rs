//! Nearest-constraint query used to rip the cloth under the pointer.

use crate::constraint::Constraint;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;

/// Distance from `p` to the closed segment `a`..`b`.
///
/// Projects `p` onto the line through `a` and `b` with
/// `t = dot(AP, AB) / dot(AB, AB)` and clamps to whichever endpoint is
/// closer when `t` falls outside `[0, 1]`. A zero-length segment is
/// treated as the point `a`.
pub fn point_to_segment_distance<F: Float>(p: Vec2<F>, a: Vec2<F>, b: Vec2<F>) -> F {
    let ab = b - a;
    let ap = p - a;
    let ab_ab = ab.dot(ab);
    if ab_ab <= F::zero() {
        return ap.length();
    }

    let t = ap.dot(ab) / ab_ab;
    if t < F::zero() {
        ap.length()
    } else if t > F::one() {
        (p - b).length()
    } else {
        p.distance(a + ab.scale(t))
    }
}

/// Index of the active constraint closest to `point`, if any lies
/// strictly within `max_distance`.
///
/// Linear scan in constraint order; on an exact tie the earlier
/// constraint wins. Inactive constraints are skipped, so dragging across
/// an existing rip keeps tearing the next live link.
pub fn find_nearest<F: Float>(
    point: Vec2<F>,
    constraints: &[Constraint<F>],
    particles: &[Particle<F>],
    max_distance: F,
) -> Option<usize> {
    let mut nearest = None;
    let mut min_distance = max_distance;

    for (i, c) in constraints.iter().enumerate() {
        if !c.is_active() {
            continue;
        }
        let (a, b) = c.endpoints(particles);
        let distance = point_to_segment_distance(point, a, b);
        if distance < min_distance {
            min_distance = distance;
            nearest = Some(i);
        }
    }

    nearest
}
