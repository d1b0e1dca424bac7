use thiserror::Error;

use crate::{LineId, StationId};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Neither endpoint of the new section touches the line")]
    DisconnectedInsertion,
    #[error("Both endpoints are already registered on the line")]
    DuplicateSection,
    #[error("Inserted distance {inserted} does not fit inside the {span} span it divides")]
    DistanceExceedsSpan { inserted: u32, span: u32 },
    #[error("Station {0} is not on the line")]
    StationNotOnLine(StationId),
    #[error("A line must keep at least one section")]
    MinimumSectionViolation,
    #[error("Persisted sections of line {0} do not form a single connected chain")]
    BrokenChain(LineId),
    #[error("Unknown station {0}")]
    UnknownStation(StationId),
    #[error("Unknown line {0}")]
    UnknownLine(LineId),
    #[error("Source and target stations are identical")]
    IdenticalEndpoints,
    #[error("No path exists between the requested stations")]
    NoPathExists,
    #[error("Age {0} cannot be classified")]
    InvalidAge(u32),
    #[error("Section distance must be at least 1, got {0}")]
    InvalidDistance(u32),
    #[error("Store error: {0}")]
    Store(String),
}
