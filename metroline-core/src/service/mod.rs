//! Service operations over the collaborator seams
//!
//! Mirrors the split between path queries (read-only, graph rebuilt per
//! request) and section changes (single-line chain mutation committed as
//! physical writes).

pub mod paths;
pub mod sections;
pub mod store;

pub use paths::{PathService, PathSummary};
pub use sections::SectionService;
