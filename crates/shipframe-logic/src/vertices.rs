//! Vertex sampling over the rings, grouped into ring levels.

use serde::{Deserialize, Serialize};

use crate::error::GenError;
use crate::random::RandomSource;
use crate::rings::Ring;
use crate::vector::Vector2;

/// All vertices sharing one ring's distance, sorted ascending by distance
/// across levels. Level 0 holds the origin vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingLevel {
    pub distance: f64,
    pub vertex_indices: Vec<usize>,
}

/// Sample vertex positions for every ring.
///
/// Vertex 0 is the origin, pre-assigned to level 0. Each ring draws
/// `num_nodes` angles in [0, 2π); an angle exactly equal to one already
/// drawn on the same ring is rejected, silently shrinking that ring (a
/// continuous draw practically never repeats, so this is a near-no-op).
/// Each ring's `num_nodes` is rewritten to the count actually kept.
pub fn generate_vertices(
    rings: &mut [Ring],
    random: &mut RandomSource,
) -> Result<(Vec<Vector2>, Vec<RingLevel>), GenError> {
    let mut vertices = vec![Vector2::ZERO];
    let mut levels = vec![RingLevel {
        distance: 0.0,
        vertex_indices: vec![0],
    }];

    for ring in rings.iter_mut() {
        let mut thetas: Vec<f64> = Vec::with_capacity(ring.num_nodes as usize);
        for _ in 0..ring.num_nodes {
            let theta = random.next_float_range(0.0, std::f64::consts::TAU)?;
            if thetas.contains(&theta) {
                continue;
            }
            thetas.push(theta);

            let index = vertices.len();
            vertices.push(Vector2::new(
                ring.centre_distance * theta.sin(),
                ring.centre_distance * theta.cos(),
            ));
            if let Some(level) = levels
                .iter_mut()
                .find(|l| l.distance == ring.centre_distance)
            {
                level.vertex_indices.push(index);
            } else {
                levels.push(RingLevel {
                    distance: ring.centre_distance,
                    vertex_indices: vec![index],
                });
            }
        }
        ring.num_nodes = thetas.len() as u32;
    }

    levels.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    Ok((vertices, levels))
}

/// Level rank (position in the ascending level list) per vertex index.
pub fn level_ranks(levels: &[RingLevel], vertex_count: usize) -> Vec<usize> {
    let mut ranks = vec![0; vertex_count];
    for (rank, level) in levels.iter().enumerate() {
        for &index in &level.vertex_indices {
            ranks[index] = rank;
        }
    }
    ranks
}

/// Ring distance per vertex index (0 for the origin).
pub fn vertex_ring_distances(levels: &[RingLevel], vertex_count: usize) -> Vec<f64> {
    let mut distances = vec![0.0; vertex_count];
    for level in levels {
        for &index in &level.vertex_indices {
            distances[index] = level.distance;
        }
    }
    distances
}
