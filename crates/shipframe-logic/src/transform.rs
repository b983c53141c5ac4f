//! Pure blueprint transforms — centre translation and forward alignment.

use crate::blueprint::ShipBlueprint;
use crate::vector::Vector2;

/// Shift the whole blueprint so the centre lands on the origin.
pub fn translate_centre(blueprint: &ShipBlueprint) -> ShipBlueprint {
    let offset = blueprint.centre;
    let mut out = blueprint.clone();
    out.vertices = blueprint.vertices.iter().map(|v| v.sub(offset)).collect();
    out.thrusters = blueprint
        .thrusters
        .iter()
        .cloned()
        .map(|mut t| {
            t.position = t.position.sub(offset);
            t
        })
        .collect();
    out.centre = Vector2::ZERO;
    out
}

/// Rotate the whole blueprint so forward aligns with the fixed up axis.
///
/// The rotation angle is the signed angle taking forward onto up, so an
/// already-aligned blueprint rotates by ≈0 and comes back unchanged.
pub fn rotate_forward(blueprint: &ShipBlueprint) -> ShipBlueprint {
    let angle = blueprint.forward.angle_to(Vector2::UP);
    let mut out = blueprint.clone();
    out.vertices = blueprint.vertices.iter().map(|v| v.rotate(angle)).collect();
    out.thrusters = blueprint
        .thrusters
        .iter()
        .cloned()
        .map(|mut t| {
            t.position = t.position.rotate(angle);
            t.direction = t.direction.rotate(angle);
            t
        })
        .collect();
    out.centre = blueprint.centre.rotate(angle);
    out.forward = blueprint.forward.rotate(angle);
    out
}
