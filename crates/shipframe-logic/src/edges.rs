//! Edge construction — hull boundary cycle plus interior connectivity.

use serde::{Deserialize, Serialize};

use crate::error::GenError;
use crate::hull::hull_mask;
use crate::random::RandomSource;
use crate::vector::Vector2;
use crate::vertices::{level_ranks, vertex_ring_distances, RingLevel};

/// An undirected connection between two vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub start_index: usize,
    pub end_index: usize,
}

/// The hull boundary as edges: consecutive hull indices plus the closing
/// wrap edge — exactly one simple cycle covering every hull index once.
pub fn hull_cycle(hull: &[usize]) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(hull.len());
    for pair in hull.windows(2) {
        edges.push(Edge {
            start_index: pair[0],
            end_index: pair[1],
        });
    }
    if hull.len() > 1 {
        edges.push(Edge {
            start_index: hull[hull.len() - 1],
            end_index: hull[0],
        });
    }
    edges
}

/// Admissible interior connections, for every pair (i, j), i < j:
/// not both on the hull, level ranks adjacent or equal, and the pair's
/// Euclidean distance within the ring distance of at least one endpoint.
pub fn internal_candidates(
    vertices: &[Vector2],
    hull: &[usize],
    levels: &[RingLevel],
) -> Vec<Edge> {
    let on_hull = hull_mask(vertices.len(), hull);
    let ranks = level_ranks(levels, vertices.len());
    let ring_distance = vertex_ring_distances(levels, vertices.len());

    let mut candidates = Vec::new();
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            if on_hull[i] && on_hull[j] {
                continue;
            }
            if ranks[i].abs_diff(ranks[j]) > 1 {
                continue;
            }
            let distance = vertices[i].distance(vertices[j]);
            if distance <= ring_distance[i] || distance <= ring_distance[j] {
                candidates.push(Edge {
                    start_index: i,
                    end_index: j,
                });
            }
        }
    }
    candidates
}

/// Commit internal edges from the candidate pool in two passes.
///
/// Connectivity pass: every interior vertex except the last (index order)
/// with at least one touching candidate gets one committed, drawn uniformly.
/// Extra-join pass: a join count drawn in [0, remaining] pops uniformly
/// random candidates until met or the pool empties.
pub fn select_internal_edges(
    interior: &[usize],
    mut candidates: Vec<Edge>,
    random: &mut RandomSource,
) -> Result<Vec<Edge>, GenError> {
    let mut committed = Vec::new();

    if let Some((_, rest)) = interior.split_last() {
        for &vertex in rest {
            let touching: Vec<usize> = candidates
                .iter()
                .enumerate()
                .filter(|(_, e)| e.start_index == vertex || e.end_index == vertex)
                .map(|(k, _)| k)
                .collect();
            if touching.is_empty() {
                continue;
            }
            let pick = touching[random.next_index(touching.len())?];
            committed.push(candidates.swap_remove(pick));
        }
    }

    let joins = random.next_int_range(0, candidates.len() as u32)?;
    for _ in 0..joins {
        if candidates.is_empty() {
            break;
        }
        let pick = random.next_index(candidates.len())?;
        committed.push(candidates.swap_remove(pick));
    }

    Ok(committed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hull_cycle_covers_every_index_once() {
        let hull = vec![3, 1, 4, 2];
        let edges = hull_cycle(&hull);
        assert_eq!(edges.len(), 4);
        for &index in &hull {
            let starts = edges.iter().filter(|e| e.start_index == index).count();
            let ends = edges.iter().filter(|e| e.end_index == index).count();
            assert_eq!(starts, 1);
            assert_eq!(ends, 1);
        }
        assert_eq!(edges[3], Edge { start_index: 2, end_index: 3 });
    }

    fn diamond_with_interior() -> (Vec<Vector2>, Vec<usize>, Vec<RingLevel>) {
        // Origin + two interior ring-1 points + four hull points on ring 2.
        let vertices = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(0.5, 0.0),
            Vector2::new(-0.5, 0.0),
            Vector2::new(2.0, 0.0),
            Vector2::new(-2.0, 0.0),
            Vector2::new(0.0, 2.0),
            Vector2::new(0.0, -2.0),
        ];
        let hull = vec![3, 5, 4, 6];
        let levels = vec![
            RingLevel {
                distance: 0.0,
                vertex_indices: vec![0],
            },
            RingLevel {
                distance: 0.5,
                vertex_indices: vec![1, 2],
            },
            RingLevel {
                distance: 2.0,
                vertex_indices: vec![3, 4, 5, 6],
            },
        ];
        (vertices, hull, levels)
    }

    #[test]
    fn test_candidates_never_join_two_hull_vertices() {
        let (vertices, hull, levels) = diamond_with_interior();
        let mask = hull_mask(vertices.len(), &hull);
        for edge in internal_candidates(&vertices, &hull, &levels) {
            assert!(!(mask[edge.start_index] && mask[edge.end_index]));
        }
    }

    #[test]
    fn test_candidates_respect_rank_adjacency() {
        let (vertices, hull, levels) = diamond_with_interior();
        let ranks = level_ranks(&levels, vertices.len());
        for edge in internal_candidates(&vertices, &hull, &levels) {
            assert!(ranks[edge.start_index].abs_diff(ranks[edge.end_index]) <= 1);
        }
        // Origin (rank 0) to a ring-2 vertex (rank 2) must never appear.
        assert!(!internal_candidates(&vertices, &hull, &levels)
            .iter()
            .any(|e| e.start_index == 0 && e.end_index >= 3));
    }

    #[test]
    fn test_candidates_respect_distance_rule() {
        let (vertices, hull, levels) = diamond_with_interior();
        let ring_distance = vertex_ring_distances(&levels, vertices.len());
        for edge in internal_candidates(&vertices, &hull, &levels) {
            let d = vertices[edge.start_index].distance(vertices[edge.end_index]);
            assert!(d <= ring_distance[edge.start_index] || d <= ring_distance[edge.end_index]);
        }
    }

    #[test]
    fn test_connectivity_pass_covers_interior() {
        let (vertices, hull, levels) = diamond_with_interior();
        let interior = crate::hull::interior_indices(vertices.len(), &hull);
        let candidates = internal_candidates(&vertices, &hull, &levels);

        for seed in 0..20 {
            let mut random = RandomSource::from_seed(seed);
            let committed =
                select_internal_edges(&interior, candidates.clone(), &mut random).unwrap();
            // Every interior vertex except the last with a touching candidate
            // ends up in at least one committed edge.
            for &vertex in &interior[..interior.len() - 1] {
                let had_candidate = candidates
                    .iter()
                    .any(|e| e.start_index == vertex || e.end_index == vertex);
                if had_candidate {
                    assert!(committed
                        .iter()
                        .any(|e| e.start_index == vertex || e.end_index == vertex));
                }
            }
        }
    }

    #[test]
    fn test_committed_edges_are_unique() {
        let (vertices, hull, levels) = diamond_with_interior();
        let interior = crate::hull::interior_indices(vertices.len(), &hull);
        let candidates = internal_candidates(&vertices, &hull, &levels);
        for seed in 0..20 {
            let mut random = RandomSource::from_seed(seed);
            let committed =
                select_internal_edges(&interior, candidates.clone(), &mut random).unwrap();
            for i in 0..committed.len() {
                for j in (i + 1)..committed.len() {
                    assert_ne!(committed[i], committed[j]);
                }
            }
        }
    }

    #[test]
    fn test_no_interior_vertices_is_fine() {
        let mut random = RandomSource::from_seed(0);
        let committed = select_internal_edges(&[], Vec::new(), &mut random).unwrap();
        assert!(committed.is_empty());
    }
}
