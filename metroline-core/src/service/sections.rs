//! Topology changes on one line's chain, committed as physical writes

use log::info;

use crate::model::{Distance, Section};
use crate::service::store::{LineStore, SectionStore};
use crate::topology::{SectionChain, SectionChange};
use crate::{Error, LineId, StationId};

pub struct SectionService<'a, S> {
    store: &'a S,
}

impl<'a, S: LineStore + SectionStore> SectionService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Registers a new section on the line, splitting an existing section
    /// when the insertion is interior.
    ///
    /// # Errors
    ///
    /// Propagates value validation ([`Error::InvalidDistance`],
    /// [`Error::IdenticalEndpoints`]), chain topology errors and store
    /// failures. The chain is validated before any write is issued.
    pub fn add_section(
        &self,
        line_id: LineId,
        up_station: StationId,
        down_station: StationId,
        distance: u32,
    ) -> Result<(), Error> {
        let section = Section::new(line_id, up_station, down_station, Distance::new(distance)?)?;
        let mut chain = self.load_chain(line_id)?;
        let change = chain.insert(section)?;
        self.commit(line_id, change)
    }

    /// Removes a station from the line, merging its two neighbouring
    /// sections when the station is interior.
    ///
    /// # Errors
    ///
    /// Propagates chain topology errors ([`Error::StationNotOnLine`],
    /// [`Error::MinimumSectionViolation`]) and store failures.
    pub fn remove_section(&self, line_id: LineId, station: StationId) -> Result<(), Error> {
        let mut chain = self.load_chain(line_id)?;
        let change = chain.remove(station)?;
        self.commit(line_id, change)
    }

    fn load_chain(&self, line_id: LineId) -> Result<SectionChain, Error> {
        let loaded = self
            .store
            .load_line(line_id)?
            .ok_or(Error::UnknownLine(line_id))?;
        SectionChain::from_unordered(loaded.sections)
    }

    // Split and merge results land as delete-old plus insert-new; the
    // store's transaction boundary makes the pair atomic.
    fn commit(&self, line_id: LineId, change: SectionChange) -> Result<(), Error> {
        self.store.delete_by_ids(&change.deleted)?;
        for section in &change.inserted {
            self.store.insert(section)?;
        }
        info!(
            "line {line_id}: {} sections inserted, {} deleted",
            change.inserted.len(),
            change.deleted.len()
        );
        Ok(())
    }
}
