use serde::Serialize;

use crate::{Error, LineId, SectionId, StationId};

/// Length of a section. A zero-length section is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Distance(u32);

impl Distance {
    /// # Errors
    ///
    /// Returns [`Error::InvalidDistance`] for a zero length.
    pub fn new(value: u32) -> Result<Self, Error> {
        if value == 0 {
            return Err(Error::InvalidDistance(value));
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Combined span of two adjacent sections being merged.
    pub fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }

    /// Remaining span after carving `other` out of this section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DistanceExceedsSpan`] unless `other` is strictly
    /// shorter than this span.
    pub fn subtract(self, other: Self) -> Result<Self, Error> {
        if other.0 >= self.0 {
            return Err(Error::DistanceExceedsSpan {
                inserted: other.0,
                span: self.0,
            });
        }
        Ok(Self(self.0 - other.0))
    }
}

/// One weighted edge between two stations, owned by exactly one line.
///
/// The up/down orientation fixes the section's place in its line's chain;
/// it is not a travel restriction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Persisted key; `None` until the store assigns one.
    pub id: Option<SectionId>,
    pub line_id: LineId,
    pub up_station: StationId,
    pub down_station: StationId,
    pub distance: Distance,
}

impl Section {
    /// # Errors
    ///
    /// Returns [`Error::IdenticalEndpoints`] if both ends name the same
    /// station.
    pub fn new(
        line_id: LineId,
        up_station: StationId,
        down_station: StationId,
        distance: Distance,
    ) -> Result<Self, Error> {
        if up_station == down_station {
            return Err(Error::IdenticalEndpoints);
        }
        Ok(Self {
            id: None,
            line_id,
            up_station,
            down_station,
            distance,
        })
    }

    /// Section loaded back from the store, key already assigned.
    ///
    /// # Errors
    ///
    /// Same validation as [`Section::new`].
    pub fn persisted(
        id: SectionId,
        line_id: LineId,
        up_station: StationId,
        down_station: StationId,
        distance: Distance,
    ) -> Result<Self, Error> {
        let mut section = Self::new(line_id, up_station, down_station, distance)?;
        section.id = Some(id);
        Ok(section)
    }

    /// Whether the section ends at the given station on either side.
    pub fn touches(&self, station: StationId) -> bool {
        self.up_station == station || self.down_station == station
    }
}
