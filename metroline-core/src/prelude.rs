// Re-export key components
pub use crate::error::Error;
pub use crate::fare::{AgeGroup, Fare};
pub use crate::model::{Distance, ExtraFare, Line, Section, Station};
pub use crate::routing::{NetworkGraph, RoutePath};
pub use crate::service::{PathService, PathSummary, SectionService};
pub use crate::service::store::{
    LineSections, LineStore, MemoryStore, SectionStore, StationStore,
};
pub use crate::topology::{SectionChain, SectionChange};

// Persisted key types
pub use crate::{LineId, SectionId, StationId};
