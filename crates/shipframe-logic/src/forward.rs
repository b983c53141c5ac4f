//! Canonical orientation — a symmetry-scored search over the hull.
//!
//! Candidates are the hull vertices and the hull-edge midpoints, scored in
//! separate groups: for a candidate p, the score is how unevenly the other
//! candidates of its group fall on the two sides of the line through the
//! centre and p (cross-product sign). The lower the score, the closer p is
//! to an axis of symmetry. Ties across the global minimum break uniformly
//! at random.

use crate::edges::Edge;
use crate::error::GenError;
use crate::random::RandomSource;
use crate::vector::Vector2;

fn group_candidates(group: &[Vector2], best_score: &mut Option<u32>, best: &mut Vec<Vector2>) {
    for (i, &p) in group.iter().enumerate() {
        if p == Vector2::ZERO {
            continue;
        }
        let mut sides = [0u32; 2];
        for (j, &q) in group.iter().enumerate() {
            if j == i {
                continue;
            }
            if p.cross(q) >= 0.0 {
                sides[0] += 1;
            } else {
                sides[1] += 1;
            }
        }
        let score = sides[0].abs_diff(sides[1]);
        match *best_score {
            Some(s) if score > s => {}
            Some(s) if score == s => best.push(p),
            _ => {
                *best_score = Some(score);
                best.clear();
                best.push(p);
            }
        }
    }
}

/// Pick the forward unit vector for a generated skeleton.
pub fn select_forward(
    vertices: &[Vector2],
    hull: &[usize],
    hull_edges: &[Edge],
    centre: Vector2,
    random: &mut RandomSource,
) -> Result<Vector2, GenError> {
    // Work in centre-local space so "sides" are measured about the centroid.
    let hull_points: Vec<Vector2> = hull.iter().map(|&i| vertices[i].sub(centre)).collect();
    let midpoints: Vec<Vector2> = hull_edges
        .iter()
        .map(|e| {
            vertices[e.start_index]
                .lerp(vertices[e.end_index], 0.5)
                .sub(centre)
        })
        .collect();

    let mut best_score = None;
    let mut best = Vec::new();
    group_candidates(&hull_points, &mut best_score, &mut best);
    group_candidates(&midpoints, &mut best_score, &mut best);

    let pick = best[random.next_index(best.len())?];
    Ok(pick.normalize())
}
