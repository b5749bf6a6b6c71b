//! Chart assembly and relationship detection.
//!
//! This crate orchestrates the per-graha math into a full sidereal chart
//! for an instant:
//! - `compute_chart` builds the 9-graha position table, then detects
//!   same-sign conjunctions and sign-distance aspects over it
//! - `summarize` reduces a chart to ordered human-readable highlights
//!
//! Everything is a pure function of the instant plus static tables; the
//! same instant always yields a bit-identical chart.

pub mod chart;
pub mod chart_types;
pub mod relations;
pub mod summary;

pub use chart::compute_chart;
pub use chart_types::{Aspect, AspectKind, Chart, Conjunction, Position};
pub use relations::{find_aspects, find_conjunctions};
pub use summary::summarize;
