use serde::Serialize;

use crate::LineId;

/// Per-line surcharge added on top of the distance fare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct ExtraFare(u32);

impl ExtraFare {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

/// A subway line. Its sections live in the line's
/// [`SectionChain`](crate::topology::SectionChain); the line record itself
/// only carries display and fare metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub id: LineId,
    pub name: String,
    pub color: String,
    pub extra_fare: ExtraFare,
}

impl Line {
    pub fn new(
        id: LineId,
        name: impl Into<String>,
        color: impl Into<String>,
        extra_fare: ExtraFare,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            extra_fare,
        }
    }
}
