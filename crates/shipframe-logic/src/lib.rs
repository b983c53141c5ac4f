//! Pure ship-skeleton generation logic for Shipframe.
//!
//! This crate turns a random seed and a handful of numeric bounds into a 2D
//! ship skeleton: a vertex/edge graph with a convex-hull boundary, a
//! canonical orientation, hull-mounted thrusters, and a key→thruster control
//! mapping. Everything is plain data — no rendering, no physics engine, no
//! I/O — so consumers can take the blueprint anywhere.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`blueprint`] | The immutable [`ShipBlueprint`] aggregate |
//! | [`edges`] | Hull boundary cycle and interior connectivity edges |
//! | [`error`] | Configuration / range / degeneracy error taxonomy |
//! | [`forward`] | Symmetry-scored canonical orientation |
//! | [`generator`] | The full generation pipeline |
//! | [`hull`] | Convex hull, interior split, hull centroid |
//! | [`keys`] | Key→thruster bindings with coverage and redundancy |
//! | [`random`] | Seeded inclusive-range random source |
//! | [`rings`] | Concentric sampling rings |
//! | [`settings`] | Named, validated generation bounds |
//! | [`thrusters`] | Hull-edge thruster placement |
//! | [`transform`] | Pure centre-translation and forward-alignment |
//! | [`vector`] | 2D vector value type |
//! | [`vertices`] | Vertex sampling and ring levels |
//!
//! # Usage
//!
//! ```
//! use shipframe_logic::{generate, RandomSource, ShipSettings};
//!
//! let settings = ShipSettings::default();
//! let mut random = RandomSource::from_seed(42);
//! let blueprint = generate(&settings, &mut random).unwrap();
//! assert!(blueprint.hull_indices.len() >= 3);
//! ```

pub mod blueprint;
pub mod edges;
pub mod error;
pub mod forward;
pub mod generator;
pub mod hull;
pub mod keys;
pub mod random;
pub mod rings;
pub mod settings;
pub mod thrusters;
pub mod transform;
pub mod vector;
pub mod vertices;

pub use blueprint::ShipBlueprint;
pub use edges::Edge;
pub use error::{ConfigError, GenError, RangeError};
pub use generator::generate;
pub use keys::ThrusterKey;
pub use random::RandomSource;
pub use rings::Ring;
pub use settings::{SettingValue, ShipSettings, DEFAULT_KEY_POOL};
pub use thrusters::Thruster;
pub use transform::{rotate_forward, translate_centre};
pub use vector::Vector2;
pub use vertices::RingLevel;
