//! Concentric ring drawing — distances and node budgets.

use serde::{Deserialize, Serialize};

use crate::error::GenError;
use crate::random::RandomSource;
use crate::settings::ShipSettings;

/// One sampling ring: a radius and the number of vertices drawn on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub centre_distance: f64,
    pub num_nodes: u32,
}

/// Draw the ring set for one generation pass.
///
/// Rings sharing an identical distance collapse onto the first one drawn at
/// that radius, so distances are pairwise distinct afterwards. The ring with
/// the maximum distance is forced to 3 nodes (the minimum hull triangle);
/// the extra-node budget then lands on uniformly random rings.
pub fn generate_rings(
    settings: &ShipSettings,
    random: &mut RandomSource,
) -> Result<Vec<Ring>, GenError> {
    let count = random.next_int_range(settings.min_circles, settings.max_circles)?;
    let mut rings: Vec<Ring> = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let distance =
            random.next_float_range(settings.min_circle_distance, settings.max_circle_distance)?;
        if !rings.iter().any(|r| r.centre_distance == distance) {
            rings.push(Ring {
                centre_distance: distance,
                num_nodes: 0,
            });
        }
    }

    // Distances are distinct after the collapse, so the max is unambiguous.
    if let Some(outer) = rings
        .iter_mut()
        .max_by(|a, b| a.centre_distance.total_cmp(&b.centre_distance))
    {
        outer.num_nodes = 3;
    }

    let extra_nodes = random.next_int_range(settings.min_extra_nodes, settings.max_extra_nodes)?;
    for _ in 0..extra_nodes {
        let index = random.next_index(rings.len())?;
        rings[index].num_nodes += 1;
    }

    Ok(rings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_count_within_bounds() {
        let settings = ShipSettings::default();
        for seed in 0..30 {
            let mut random = RandomSource::from_seed(seed);
            let rings = generate_rings(&settings, &mut random).unwrap();
            assert!(!rings.is_empty());
            assert!(rings.len() <= settings.max_circles as usize);
        }
    }

    #[test]
    fn test_distances_pairwise_distinct() {
        let settings = ShipSettings::default();
        for seed in 0..30 {
            let mut random = RandomSource::from_seed(seed);
            let rings = generate_rings(&settings, &mut random).unwrap();
            for i in 0..rings.len() {
                for j in (i + 1)..rings.len() {
                    assert_ne!(rings[i].centre_distance, rings[j].centre_distance);
                }
            }
        }
    }

    #[test]
    fn test_outer_ring_keeps_at_least_three_nodes() {
        let settings = ShipSettings::default();
        for seed in 0..30 {
            let mut random = RandomSource::from_seed(seed);
            let rings = generate_rings(&settings, &mut random).unwrap();
            let outer = rings
                .iter()
                .max_by(|a, b| a.centre_distance.total_cmp(&b.centre_distance))
                .unwrap();
            assert!(outer.num_nodes >= 3);
        }
    }

    #[test]
    fn test_pinned_distance_collapses_to_one_ring() {
        let mut settings = ShipSettings::default();
        settings.min_circles = 2;
        settings.max_circles = 2;
        settings.min_circle_distance = 1.0;
        settings.max_circle_distance = 1.0;
        let mut random = RandomSource::from_seed(0);
        let rings = generate_rings(&settings, &mut random).unwrap();
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].centre_distance, 1.0);
        assert!(rings[0].num_nodes >= 3);
    }

    #[test]
    fn test_node_budget_accounting() {
        // Total nodes = 3 forced on the outer ring + every extra increment.
        let mut settings = ShipSettings::default();
        settings.min_extra_nodes = 4;
        settings.max_extra_nodes = 4;
        for seed in 0..10 {
            let mut random = RandomSource::from_seed(seed);
            let rings = generate_rings(&settings, &mut random).unwrap();
            let total: u32 = rings.iter().map(|r| r.num_nodes).sum();
            assert_eq!(total, 3 + 4);
        }
    }
}
