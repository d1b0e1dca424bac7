use crate::SectionId;
use crate::model::Section;

/// Physical writes produced by one chain mutation.
///
/// A split or merge is committed as delete-old plus insert-new, never as an
/// update in place, so the change carries the persisted keys to delete and
/// the fresh sections to insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionChange {
    pub inserted: Vec<Section>,
    pub deleted: Vec<SectionId>,
}

impl SectionChange {
    pub(crate) fn insert(section: Section) -> Self {
        Self {
            inserted: vec![section],
            deleted: Vec::new(),
        }
    }
}
