//! Data model for the subway network
//!
//! Id-keyed records shared by the topology and routing layers.

pub mod line;
pub mod section;
pub mod station;

// Re-export of basic types for convenience
pub use line::{ExtraFare, Line};
pub use section::{Distance, Section};
pub use station::Station;
