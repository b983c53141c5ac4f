//! Thruster placement on hull edges.
//!
//! A thruster sits somewhere along a hull edge and pushes inward: its thrust
//! direction is the negated outward radial, swung toward one end of the edge
//! by a bounded angle. The swing fraction is the thruster's weight, so
//! weight 0 pushes straight through the centre and weight 1 pushes along the
//! edge line.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::edges::Edge;
use crate::error::GenError;
use crate::random::RandomSource;
use crate::settings::ShipSettings;
use crate::vector::Vector2;

/// A directional thrust point anchored on a hull edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thruster {
    /// Anchor position on the source hull edge.
    pub position: Vector2,
    /// Unit thrust direction.
    pub direction: Vector2,
    /// Swing fraction in [0, 1] of the chosen angular half-range.
    pub weight: f64,
    /// Index of the source edge in the blueprint's hull edge list.
    pub hull_edge: usize,
}

/// Place a single thruster on a uniformly random hull edge.
///
/// With `target_weight` the swing angle is `target_weight × range`
/// (deterministic placement given the drawn edge, fraction, and side);
/// without it the angle is drawn uniformly in [0, range] and the weight is
/// derived as `angle / range`.
pub fn place_thruster(
    vertices: &[Vector2],
    hull_edges: &[Edge],
    centre: Vector2,
    target_weight: Option<f64>,
    random: &mut RandomSource,
) -> Result<Thruster, GenError> {
    let hull_edge = random.next_index(hull_edges.len())?;
    let edge = hull_edges[hull_edge];
    let start = vertices[edge.start_index];
    let end = vertices[edge.end_index];

    let fraction = random.next_float_range(0.0, 1.0)?;
    let position = start.lerp(end, fraction);

    let radial = position.sub(centre).normalize();
    let edge_direction = end.sub(start).normalize();

    // The edge line splits the turn at the anchor into two half-ranges
    // summing to pi: toward the edge direction, and toward its reverse.
    let swing_to_edge = radial.angle_to(edge_direction);
    let ranges = [swing_to_edge.abs(), PI - swing_to_edge.abs()];
    let side = random.next_int_range(0, 1)?;
    let range = ranges[side as usize];

    let (angle, weight) = match target_weight {
        Some(w) => (w * range, w),
        None => {
            let angle = random.next_float_range(0.0, range)?;
            let weight = if range > 0.0 { angle / range } else { 0.0 };
            (angle, weight)
        }
    };
    let signed = if side == 0 {
        angle.copysign(swing_to_edge)
    } else {
        -angle.copysign(swing_to_edge)
    };
    let direction = radial.rotate(signed).scale(-1.0);

    Ok(Thruster {
        position,
        direction,
        weight,
        hull_edge,
    })
}

/// Place the full thruster set: a complementary primary pair, then the
/// configured number of unconstrained extras.
pub fn place_thrusters(
    vertices: &[Vector2],
    hull_edges: &[Edge],
    centre: Vector2,
    settings: &ShipSettings,
    random: &mut RandomSource,
) -> Result<Vec<Thruster>, GenError> {
    let first = place_thruster(vertices, hull_edges, centre, None, random)?;
    let second = place_thruster(
        vertices,
        hull_edges,
        centre,
        Some(1.0 - first.weight),
        random,
    )?;
    let mut thrusters = vec![first, second];

    let extras =
        random.next_int_range(settings.min_extra_thrusters, settings.max_extra_thrusters)?;
    for _ in 0..extras {
        thrusters.push(place_thruster(vertices, hull_edges, centre, None, random)?);
    }
    Ok(thrusters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::hull_cycle;

    fn hull_fixture() -> (Vec<Vector2>, Vec<Edge>, Vector2) {
        let vertices = vec![
            Vector2::new(2.0, 0.0),
            Vector2::new(0.0, 2.0),
            Vector2::new(-2.0, 0.0),
            Vector2::new(0.0, -2.0),
        ];
        let hull = crate::hull::convex_hull(&vertices).unwrap();
        let centre = crate::hull::hull_centroid(&vertices, &hull);
        let edges = hull_cycle(&hull);
        (vertices, edges, centre)
    }

    #[test]
    fn test_anchor_lies_on_its_edge() {
        let (vertices, edges, centre) = hull_fixture();
        for seed in 0..30 {
            let mut random = RandomSource::from_seed(seed);
            let t = place_thruster(&vertices, &edges, centre, None, &mut random).unwrap();
            let edge = edges[t.hull_edge];
            let start = vertices[edge.start_index];
            let end = vertices[edge.end_index];
            let along = end.sub(start);
            let offset = t.position.sub(start);
            // Collinear with the edge and within the segment.
            assert!(along.cross(offset).abs() < 1e-9);
            let param = offset.dot(along) / along.magnitude_squared();
            assert!((-1e-9..=1.0 + 1e-9).contains(&param));
        }
    }

    #[test]
    fn test_direction_is_unit_and_weight_in_range() {
        let (vertices, edges, centre) = hull_fixture();
        for seed in 0..30 {
            let mut random = RandomSource::from_seed(seed);
            let t = place_thruster(&vertices, &edges, centre, None, &mut random).unwrap();
            assert!((t.direction.magnitude() - 1.0).abs() < 1e-9);
            assert!((0.0..=1.0).contains(&t.weight));
        }
    }

    #[test]
    fn test_targeted_weight_is_honoured() {
        let (vertices, edges, centre) = hull_fixture();
        let mut random = RandomSource::from_seed(4);
        let t = place_thruster(&vertices, &edges, centre, Some(0.25), &mut random).unwrap();
        assert_eq!(t.weight, 0.25);
    }

    #[test]
    fn test_zero_weight_pushes_through_centre() {
        let (vertices, edges, centre) = hull_fixture();
        for seed in 0..10 {
            let mut random = RandomSource::from_seed(seed);
            let t = place_thruster(&vertices, &edges, centre, Some(0.0), &mut random).unwrap();
            // Unswung thrust is the negated outward radial.
            let inward = centre.sub(t.position).normalize();
            assert!(t.direction.sub(inward).magnitude() < 1e-9);
        }
    }

    #[test]
    fn test_batch_counts_and_complementary_pair() {
        let (vertices, edges, centre) = hull_fixture();
        let settings = ShipSettings::default();
        for seed in 0..30 {
            let mut random = RandomSource::from_seed(seed);
            let thrusters =
                place_thrusters(&vertices, &edges, centre, &settings, &mut random).unwrap();
            let extras = thrusters.len() - 2;
            assert!(extras >= settings.min_extra_thrusters as usize);
            assert!(extras <= settings.max_extra_thrusters as usize);
            assert!((thrusters[0].weight + thrusters[1].weight - 1.0).abs() < 1e-12);
            for t in &thrusters {
                assert!((0.0..=1.0).contains(&t.weight));
            }
        }
    }
}
