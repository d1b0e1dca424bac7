//! Line topology and path-fare engine for a subway network
//!
//! A network is a set of lines, each an ordered chain of stations joined by
//! distance-weighted sections. The engine maintains the chain invariants on
//! insert/remove (with automatic split and merge) and answers cross-line
//! shortest-path queries priced by distance, line surcharge and rider age.
//!
//! Persistence and station lookup are reached through the traits in
//! [`service::store`]; an in-memory implementation is provided for embedding
//! and tests.

pub mod error;
pub mod fare;
pub mod model;
pub mod prelude;
pub mod routing;
pub mod service;
pub mod topology;

pub use error::Error;

/// Persisted station key
pub type StationId = u64;
/// Persisted line key
pub type LineId = u64;
/// Persisted section key
pub type SectionId = u64;
