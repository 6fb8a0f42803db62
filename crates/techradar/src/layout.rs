//! Radial placement engine.
//!
//! This module turns validated radar items into dot coordinates. Items are
//! grouped into buckets (one per quadrant and ring, plus one per core ring),
//! and each bucket is packed into concentric rows inside its ring.
//!
//! # Pipeline Position
//!
//! ```text
//! Radar (validated items)
//!     ↓ layout (this module)
//! RadarLayout (placed items)
//!     ↓ export
//! SVG
//! ```
//!
//! # Stages
//!
//! - [`capacity_at`] - how many dots fit along one arc
//! - [`RowPlanner`] - how many rows a bucket needs, and where
//! - [`distribute`] - how many dots go on each row
//! - quadrant and core placement - angular bounds and per-row angles
//! - [`Engine`] - composes everything into a [`RadarLayout`]

mod bucket;
mod capacity;
mod core_ring;
mod distribute;
mod engine;
mod quadrant;
mod rows;

pub use capacity::capacity_at;
pub use distribute::distribute;
pub use engine::{Engine, EngineBuilder, RadarGeometry, RadarLayout};
pub use rows::{Row, RowPlan, RowPlanner, SinglePlacement};
