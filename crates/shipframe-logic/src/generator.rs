//! Generation pipeline — settings and a random source in, blueprint out.

use crate::blueprint::ShipBlueprint;
use crate::edges;
use crate::error::GenError;
use crate::forward;
use crate::hull;
use crate::keys;
use crate::random::RandomSource;
use crate::rings;
use crate::settings::ShipSettings;
use crate::thrusters;
use crate::vertices;

/// Run one full generation pass.
///
/// Settings are validated up front and every stage draws exclusively from
/// `random`, so the result is a pure function of (settings, seed). Any
/// failure aborts with no partial blueprint.
pub fn generate(
    settings: &ShipSettings,
    random: &mut RandomSource,
) -> Result<ShipBlueprint, GenError> {
    if let Some(error) = settings.validate().into_iter().next() {
        return Err(error.into());
    }

    let mut rings = rings::generate_rings(settings, random)?;
    let (vertices, ring_levels) = vertices::generate_vertices(&mut rings, random)?;
    log::debug!(
        "sampled {} vertices over {} rings",
        vertices.len(),
        rings.len()
    );

    let hull_indices = hull::convex_hull(&vertices)?;
    let centre = hull::hull_centroid(&vertices, &hull_indices);
    let hull_edges = edges::hull_cycle(&hull_indices);

    let interior = hull::interior_indices(vertices.len(), &hull_indices);
    let candidates = edges::internal_candidates(&vertices, &hull_indices, &ring_levels);
    let internal_edges = edges::select_internal_edges(&interior, candidates, random)?;
    log::debug!(
        "hull of {} vertices, {} internal edges over {} interior vertices",
        hull_indices.len(),
        internal_edges.len(),
        interior.len()
    );

    let forward = forward::select_forward(&vertices, &hull_indices, &hull_edges, centre, random)?;
    let thrusters = thrusters::place_thrusters(&vertices, &hull_edges, centre, settings, random)?;
    let keys = keys::map_keys(&thrusters, settings, random)?;
    log::debug!("{} thrusters under {} keys", thrusters.len(), keys.len());

    Ok(ShipBlueprint {
        rings,
        vertices,
        ring_levels,
        hull_indices,
        hull_edges,
        internal_edges,
        centre,
        forward,
        thrusters,
        keys,
    })
}
