//! Collaborator seams for persistence and station lookup
//!
//! The engine never talks to storage directly; it consumes these traits.
//! [`MemoryStore`] implements all of them for embedding and tests.

use std::cell::RefCell;

use hashbrown::HashMap;

use crate::model::{Line, Section, Station};
use crate::{Error, LineId, SectionId, StationId};

/// A line together with its persisted sections, order not guaranteed.
#[derive(Debug, Clone)]
pub struct LineSections {
    pub line: Line,
    pub sections: Vec<Section>,
}

pub trait LineStore {
    /// Every line with its sections, as stored.
    fn load_all(&self) -> Result<Vec<LineSections>, Error>;

    fn load_line(&self, id: LineId) -> Result<Option<LineSections>, Error>;
}

pub trait StationStore {
    fn load(&self, id: StationId) -> Result<Option<Station>, Error>;
}

pub trait SectionStore {
    /// Persists one section and returns its new key.
    ///
    /// # Errors
    ///
    /// A section that already exists on its line surfaces as
    /// [`Error::DuplicateSection`].
    fn insert(&self, section: &Section) -> Result<SectionId, Error>;

    /// Deletes persisted sections by key. Unknown keys are ignored, as a
    /// relational delete would affect zero rows.
    fn delete_by_ids(&self, ids: &[SectionId]) -> Result<(), Error>;
}

/// In-memory store. The engine itself is single-threaded (the graph is a
/// per-request snapshot), so interior mutability is a plain `RefCell`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RefCell<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    lines: Vec<Line>,
    stations: HashMap<StationId, Station>,
    sections: HashMap<SectionId, Section>,
    next_section_id: SectionId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_station(&self, station: Station) {
        self.inner
            .borrow_mut()
            .stations
            .insert(station.id, station);
    }

    /// Registers a line. A line exists only together with its first
    /// section, so both are stored in one step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateSection`] if the first section is already
    /// present, and [`Error::Store`] if the section names another line.
    pub fn add_line(&self, line: Line, first: Section) -> Result<SectionId, Error> {
        if first.line_id != line.id {
            return Err(Error::Store(format!(
                "first section belongs to line {}, not {}",
                first.line_id, line.id
            )));
        }
        let id = self.insert(&first)?;
        self.inner.borrow_mut().lines.push(line);
        Ok(id)
    }
}

impl LineStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<LineSections>, Error> {
        let inner = self.inner.borrow();
        Ok(inner
            .lines
            .iter()
            .map(|line| LineSections {
                line: line.clone(),
                sections: inner
                    .sections
                    .values()
                    .filter(|section| section.line_id == line.id)
                    .cloned()
                    .collect(),
            })
            .collect())
    }

    fn load_line(&self, id: LineId) -> Result<Option<LineSections>, Error> {
        Ok(self.load_all()?.into_iter().find(|ls| ls.line.id == id))
    }
}

impl StationStore for MemoryStore {
    fn load(&self, id: StationId) -> Result<Option<Station>, Error> {
        Ok(self.inner.borrow().stations.get(&id).cloned())
    }
}

impl SectionStore for MemoryStore {
    fn insert(&self, section: &Section) -> Result<SectionId, Error> {
        let mut inner = self.inner.borrow_mut();
        let duplicate = inner.sections.values().any(|existing| {
            existing.line_id == section.line_id
                && existing.up_station == section.up_station
                && existing.down_station == section.down_station
        });
        if duplicate {
            return Err(Error::DuplicateSection);
        }

        inner.next_section_id += 1;
        let id = inner.next_section_id;
        let mut stored = section.clone();
        stored.id = Some(id);
        inner.sections.insert(id, stored);
        Ok(id)
    }

    fn delete_by_ids(&self, ids: &[SectionId]) -> Result<(), Error> {
        let mut inner = self.inner.borrow_mut();
        for id in ids {
            inner.sections.remove(id);
        }
        Ok(())
    }
}
