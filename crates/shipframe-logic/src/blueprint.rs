//! The immutable aggregate output of one generation pass.

use serde::{Deserialize, Serialize};

use crate::edges::Edge;
use crate::keys::ThrusterKey;
use crate::rings::Ring;
use crate::thrusters::Thruster;
use crate::vector::Vector2;
use crate::vertices::RingLevel;

/// Everything one generation pass produces, handed to external consumers
/// (rendering, physics-body construction, input UI) as read-only data.
///
/// Transforms return a new blueprint rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipBlueprint {
    /// Sampling rings as generated, node counts rewritten to what was kept.
    pub rings: Vec<Ring>,
    /// All vertex positions; index 0 is the origin.
    pub vertices: Vec<Vector2>,
    /// Vertex groups per ring distance, ascending.
    pub ring_levels: Vec<RingLevel>,
    /// Convex boundary as an ordered cyclic index sequence.
    pub hull_indices: Vec<usize>,
    /// Boundary cycle edges.
    pub hull_edges: Vec<Edge>,
    /// Interior connectivity edges.
    pub internal_edges: Vec<Edge>,
    /// Centroid of the hull polygon.
    pub centre: Vector2,
    /// Canonical orientation, unit length.
    pub forward: Vector2,
    /// Directional thrust points on the hull.
    pub thrusters: Vec<Thruster>,
    /// Symbolic input keys over thruster groups.
    pub keys: Vec<ThrusterKey>,
}
