use hashbrown::HashMap;
use itertools::Itertools;

use crate::model::Section;
use crate::topology::SectionChange;
use crate::{Error, LineId, SectionId, StationId};

/// The ordered, connected, branchless section chain of one line.
///
/// Invariants held between mutations: the sections form exactly one simple
/// path, no station pair appears twice, and the chain never shrinks below
/// one section. Every mutation validates before touching the chain, so on
/// error the chain is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionChain {
    line_id: LineId,
    sections: Vec<Section>,
}

impl SectionChain {
    /// A new line starts with exactly one section.
    pub fn new(first: Section) -> Self {
        Self {
            line_id: first.line_id,
            sections: vec![first],
        }
    }

    /// Re-links a persisted section set, stored in arbitrary order, into
    /// path order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MinimumSectionViolation`] for an empty set and
    /// [`Error::BrokenChain`] if the sections do not form exactly one
    /// simple path on one line.
    pub fn from_unordered(sections: Vec<Section>) -> Result<Self, Error> {
        let line_id = match sections.first() {
            Some(section) => section.line_id,
            None => return Err(Error::MinimumSectionViolation),
        };

        // A simple path visits each up station once.
        let mut by_up: HashMap<StationId, &Section> = HashMap::with_capacity(sections.len());
        for section in &sections {
            if section.line_id != line_id {
                return Err(Error::BrokenChain(line_id));
            }
            if by_up.insert(section.up_station, section).is_some() {
                return Err(Error::BrokenChain(line_id));
            }
        }

        // The head is the one section whose up station is nobody's down.
        let head = sections
            .iter()
            .find(|section| !sections.iter().any(|s| s.down_station == section.up_station))
            .ok_or(Error::BrokenChain(line_id))?;

        let mut ordered = Vec::with_capacity(sections.len());
        let mut cursor = head;
        loop {
            ordered.push(cursor.clone());
            match by_up.get(&cursor.down_station) {
                Some(&next) if ordered.len() < sections.len() => cursor = next,
                // A successor past the last slot means the walk loops back
                Some(_) => return Err(Error::BrokenChain(line_id)),
                None => break,
            }
        }
        if ordered.len() != sections.len() {
            return Err(Error::BrokenChain(line_id));
        }
        debug_assert!(
            ordered
                .iter()
                .tuple_windows()
                .all(|(a, b)| a.down_station == b.up_station)
        );

        Ok(Self {
            line_id,
            sections: ordered,
        })
    }

    /// Adds a section connecting an existing station to a new one.
    ///
    /// Extending a terminal appends or prepends directly; an interior
    /// insertion splits the section it lands in, the two replacements
    /// summing to the original distance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateSection`] if both endpoints are already
    /// chained, [`Error::DisconnectedInsertion`] if neither is, and
    /// [`Error::DistanceExceedsSpan`] if an interior insertion does not
    /// fit inside the section it divides.
    pub fn insert(&mut self, new: Section) -> Result<SectionChange, Error> {
        debug_assert_eq!(new.line_id, self.line_id);
        let has_up = self.contains(new.up_station);
        let has_down = self.contains(new.down_station);
        if has_up && has_down {
            return Err(Error::DuplicateSection);
        }
        if !has_up && !has_down {
            return Err(Error::DisconnectedInsertion);
        }

        if has_up {
            // Departs an existing station: either splits the section that
            // currently departs it, or appends past the tail.
            match self
                .sections
                .iter()
                .position(|s| s.up_station == new.up_station)
            {
                Some(index) => self.split_forward(index, new),
                None => {
                    self.sections.push(new.clone());
                    Ok(SectionChange::insert(new))
                }
            }
        } else {
            match self
                .sections
                .iter()
                .position(|s| s.down_station == new.down_station)
            {
                Some(index) => self.split_backward(index, new),
                None => {
                    self.sections.insert(0, new.clone());
                    Ok(SectionChange::insert(new))
                }
            }
        }
    }

    /// Removes a station from the chain.
    ///
    /// An interior removal merges the two touching sections into one whose
    /// distance is their sum; a terminal removal drops the single touching
    /// section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StationNotOnLine`] if the station is absent and
    /// [`Error::MinimumSectionViolation`] if the chain would drop below
    /// one section.
    pub fn remove(&mut self, station: StationId) -> Result<SectionChange, Error> {
        let arriving = self
            .sections
            .iter()
            .position(|s| s.down_station == station);
        let departing = self.sections.iter().position(|s| s.up_station == station);

        match (arriving, departing) {
            (None, None) => Err(Error::StationNotOnLine(station)),
            _ if self.sections.len() == 1 => Err(Error::MinimumSectionViolation),
            (Some(index), Some(_)) => self.merge(index),
            (Some(index), None) | (None, Some(index)) => {
                let old = self.sections.remove(index);
                Ok(SectionChange {
                    inserted: Vec::new(),
                    deleted: old.id.into_iter().collect(),
                })
            }
        }
    }

    pub fn line_id(&self) -> LineId {
        self.line_id
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Station ids from head to tail.
    pub fn stations(&self) -> Vec<StationId> {
        let mut stations = Vec::with_capacity(self.sections.len() + 1);
        stations.push(self.sections[0].up_station);
        stations.extend(self.sections.iter().map(|s| s.down_station));
        stations
    }

    pub fn total_distance(&self) -> u32 {
        self.sections.iter().map(|s| s.distance.value()).sum()
    }

    fn contains(&self, station: StationId) -> bool {
        self.sections.iter().any(|s| s.touches(station))
    }

    // `new` shares the old section's up station; [new, remainder] replace it
    fn split_forward(&mut self, index: usize, new: Section) -> Result<SectionChange, Error> {
        let old = &self.sections[index];
        let remainder = Section::new(
            old.line_id,
            new.down_station,
            old.down_station,
            old.distance.subtract(new.distance)?,
        )?;
        let deleted = old.id;
        self.sections
            .splice(index..=index, [new.clone(), remainder.clone()]);
        Ok(SectionChange {
            inserted: vec![new, remainder],
            deleted: deleted.into_iter().collect(),
        })
    }

    // `new` shares the old section's down station; [remainder, new] replace it
    fn split_backward(&mut self, index: usize, new: Section) -> Result<SectionChange, Error> {
        let old = &self.sections[index];
        let remainder = Section::new(
            old.line_id,
            old.up_station,
            new.up_station,
            old.distance.subtract(new.distance)?,
        )?;
        let deleted = old.id;
        self.sections
            .splice(index..=index, [remainder.clone(), new.clone()]);
        Ok(SectionChange {
            inserted: vec![remainder, new],
            deleted: deleted.into_iter().collect(),
        })
    }

    fn merge(&mut self, index: usize) -> Result<SectionChange, Error> {
        let first = &self.sections[index];
        let second = &self.sections[index + 1];
        let merged = Section::new(
            first.line_id,
            first.up_station,
            second.down_station,
            first.distance.add(second.distance),
        )?;
        let deleted: Vec<SectionId> = [first.id, second.id].into_iter().flatten().collect();
        self.sections.splice(index..=index + 1, [merged.clone()]);
        Ok(SectionChange {
            inserted: vec![merged],
            deleted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Distance;

    const LINE: LineId = 1;
    const A: StationId = 1;
    const B: StationId = 2;
    const C: StationId = 3;
    const D: StationId = 4;
    const E: StationId = 5;

    fn section(id: SectionId, up: StationId, down: StationId, distance: u32) -> Section {
        Section::persisted(id, LINE, up, down, Distance::new(distance).unwrap()).unwrap()
    }

    fn fresh(up: StationId, down: StationId, distance: u32) -> Section {
        Section::new(LINE, up, down, Distance::new(distance).unwrap()).unwrap()
    }

    // A -10- B -5- C
    fn chain_abc() -> SectionChain {
        SectionChain::from_unordered(vec![section(1, A, B, 10), section(2, B, C, 5)]).unwrap()
    }

    #[test]
    fn relinks_shuffled_sections_into_path_order() {
        let chain =
            SectionChain::from_unordered(vec![section(2, B, C, 5), section(1, A, B, 10)]).unwrap();
        assert_eq!(chain.stations(), vec![A, B, C]);
        assert_eq!(chain.total_distance(), 15);
    }

    #[test]
    fn rejects_empty_section_set() {
        assert_eq!(
            SectionChain::from_unordered(Vec::new()),
            Err(Error::MinimumSectionViolation)
        );
    }

    #[test]
    fn rejects_branching_sections() {
        // B forks to C and D
        let result = SectionChain::from_unordered(vec![
            section(1, A, B, 2),
            section(2, B, C, 2),
            section(3, B, D, 2),
        ]);
        assert_eq!(result, Err(Error::BrokenChain(LINE)));
    }

    #[test]
    fn rejects_cyclic_sections() {
        let result = SectionChain::from_unordered(vec![
            section(1, A, B, 2),
            section(2, B, C, 2),
            section(3, C, A, 2),
        ]);
        assert_eq!(result, Err(Error::BrokenChain(LINE)));
    }

    #[test]
    fn rejects_disconnected_sections() {
        let result = SectionChain::from_unordered(vec![section(1, A, B, 2), section(2, C, D, 2)]);
        assert_eq!(result, Err(Error::BrokenChain(LINE)));
    }

    #[test]
    fn appends_past_the_tail() {
        let mut chain = chain_abc();
        let change = chain.insert(fresh(C, D, 7)).unwrap();

        assert_eq!(chain.stations(), vec![A, B, C, D]);
        assert_eq!(chain.total_distance(), 22);
        assert_eq!(change.inserted.len(), 1);
        assert!(change.deleted.is_empty());
    }

    #[test]
    fn prepends_before_the_head() {
        let mut chain = chain_abc();
        let change = chain.insert(fresh(D, A, 4)).unwrap();

        assert_eq!(chain.stations(), vec![D, A, B, C]);
        assert_eq!(chain.total_distance(), 19);
        assert!(change.deleted.is_empty());
    }

    #[test]
    fn splits_when_landing_inside_a_section() {
        // Insert B-D(3) between B and C: B-C(5) becomes B-D(3), D-C(2)
        let mut chain = chain_abc();
        let change = chain.insert(fresh(B, D, 3)).unwrap();

        assert_eq!(chain.stations(), vec![A, B, D, C]);
        assert_eq!(chain.total_distance(), 15);
        assert_eq!(change.deleted, vec![2]);
        let spans: Vec<u32> = change.inserted.iter().map(|s| s.distance.value()).collect();
        assert_eq!(spans, vec![3, 2]);
    }

    #[test]
    fn splits_from_the_down_side() {
        // Insert D-C(2): same resulting chain as splitting B-D(3)
        let mut chain = chain_abc();
        let change = chain.insert(fresh(D, C, 2)).unwrap();

        assert_eq!(chain.stations(), vec![A, B, D, C]);
        assert_eq!(chain.total_distance(), 15);
        let spans: Vec<u32> = change.inserted.iter().map(|s| s.distance.value()).collect();
        assert_eq!(spans, vec![3, 2]);
    }

    #[test]
    fn rejects_split_that_does_not_fit() {
        let mut chain = chain_abc();
        let before = chain.clone();

        assert_eq!(
            chain.insert(fresh(B, D, 5)),
            Err(Error::DistanceExceedsSpan {
                inserted: 5,
                span: 5
            })
        );
        assert_eq!(chain, before);
    }

    #[test]
    fn rejects_duplicate_pair() {
        let mut chain = chain_abc();
        assert_eq!(chain.insert(fresh(A, B, 3)), Err(Error::DuplicateSection));
    }

    #[test]
    fn rejects_two_already_chained_stations() {
        // A and C are both on the line even though no A-C section exists
        let mut chain = chain_abc();
        assert_eq!(chain.insert(fresh(A, C, 3)), Err(Error::DuplicateSection));
    }

    #[test]
    fn rejects_disconnected_insertion() {
        let mut chain = chain_abc();
        assert_eq!(
            chain.insert(fresh(D, E, 3)),
            Err(Error::DisconnectedInsertion)
        );
    }

    #[test]
    fn merges_around_an_interior_station() {
        let mut chain = chain_abc();
        let change = chain.remove(B).unwrap();

        assert_eq!(chain.stations(), vec![A, C]);
        assert_eq!(chain.total_distance(), 15);
        assert_eq!(change.deleted, vec![1, 2]);
        assert_eq!(change.inserted.len(), 1);
        assert_eq!(change.inserted[0].distance.value(), 15);
    }

    #[test]
    fn drops_the_section_at_a_terminal() {
        let mut chain = chain_abc();
        let change = chain.remove(A).unwrap();

        assert_eq!(chain.stations(), vec![B, C]);
        assert_eq!(change.deleted, vec![1]);
        assert!(change.inserted.is_empty());
    }

    #[test]
    fn refuses_to_shrink_below_one_section() {
        for station in [A, B] {
            let mut chain = SectionChain::new(section(1, A, B, 10));
            assert_eq!(chain.remove(station), Err(Error::MinimumSectionViolation));
            assert_eq!(chain.sections().len(), 1);
        }
    }

    #[test]
    fn rejects_removal_of_an_unchained_station() {
        let mut chain = chain_abc();
        assert_eq!(chain.remove(D), Err(Error::StationNotOnLine(D)));
    }
}
