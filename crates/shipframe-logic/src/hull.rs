//! Convex hull over the vertex set, interior split, and hull centroid.

use crate::error::GenError;
use crate::vector::Vector2;

fn turn(o: Vector2, a: Vector2, b: Vector2) -> f64 {
    a.sub(o).cross(b.sub(o))
}

/// Convex hull of the full vertex set as an ordered cyclic boundary
/// (counter-clockwise), reported as source vertex indices in traversal
/// order. Coordinate duplicates resolve to the lowest source index.
///
/// Fewer than 3 distinct points, or an all-collinear set, is a
/// [`GenError::DegenerateHull`]: the caller aborts rather than fabricating a
/// boundary (the forced 3-node outer ring makes this unreachable for sane
/// settings).
pub fn convex_hull(vertices: &[Vector2]) -> Result<Vec<usize>, GenError> {
    let mut points: Vec<(usize, Vector2)> = vertices.iter().copied().enumerate().collect();
    points.sort_by(|a, b| {
        a.1.x
            .total_cmp(&b.1.x)
            .then(a.1.y.total_cmp(&b.1.y))
            .then(a.0.cmp(&b.0))
    });
    points.dedup_by(|later, first| later.1 == first.1);

    if points.len() < 3 {
        return Err(GenError::DegenerateHull {
            distinct_points: points.len(),
        });
    }

    // Andrew monotone chain; collinear boundary points are dropped, so the
    // hull is the corner set.
    let mut lower: Vec<(usize, Vector2)> = Vec::new();
    for &p in &points {
        while lower.len() >= 2
            && turn(lower[lower.len() - 2].1, lower[lower.len() - 1].1, p.1) <= 0.0
        {
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<(usize, Vector2)> = Vec::new();
    for &p in points.iter().rev() {
        while upper.len() >= 2
            && turn(upper[upper.len() - 2].1, upper[upper.len() - 1].1, p.1) <= 0.0
        {
            upper.pop();
        }
        upper.push(p);
    }

    lower.pop();
    upper.pop();
    let hull: Vec<usize> = lower.into_iter().chain(upper).map(|(i, _)| i).collect();

    if hull.len() < 3 {
        return Err(GenError::DegenerateHull {
            distinct_points: points.len(),
        });
    }
    Ok(hull)
}

/// Per-index membership mask for a hull.
pub fn hull_mask(vertex_count: usize, hull: &[usize]) -> Vec<bool> {
    let mut mask = vec![false; vertex_count];
    for &index in hull {
        mask[index] = true;
    }
    mask
}

/// Indices not on the hull, ascending.
pub fn interior_indices(vertex_count: usize, hull: &[usize]) -> Vec<usize> {
    let mask = hull_mask(vertex_count, hull);
    (0..vertex_count).filter(|&i| !mask[i]).collect()
}

/// Area-weighted centroid of the hull polygon.
pub fn hull_centroid(vertices: &[Vector2], hull: &[usize]) -> Vector2 {
    let mut area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for k in 0..hull.len() {
        let p = vertices[hull[k]];
        let q = vertices[hull[(k + 1) % hull.len()]];
        let w = p.cross(q);
        area += w;
        cx += (p.x + q.x) * w;
        cy += (p.y + q.y) * w;
    }
    area *= 0.5;
    Vector2::new(cx / (6.0 * area), cy / (6.0 * area))
}
