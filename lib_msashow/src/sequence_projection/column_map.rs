use tagged_vec::TaggedVec;

use crate::error::{Error, Result};

use super::index_types::{SequenceColumn, StructureColumn};

/// The forward map from sequence columns to structure columns.
///
/// One entry per column of the rendered sequence alignment. `None` marks an
/// unaligned column: the separator between two blocks, or an insertion that
/// never entered the alignment.
#[derive(Default)]
pub struct SequenceColumnMap {
    entries: TaggedVec<SequenceColumn, Option<StructureColumn>>,
}

impl SequenceColumnMap {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.len() == 0
    }

    /// Returns the structure column the given sequence column is aligned to,
    /// or `None` for an unaligned column.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lib_msashow::sequence_projection::column_map::SequenceColumnMap;
    /// use lib_msashow::sequence_projection::index_types::{SequenceColumn, StructureColumn};
    ///
    /// let map: SequenceColumnMap = [Some(0), None, Some(1)]
    ///     .into_iter()
    ///     .map(|column| column.map(StructureColumn::from))
    ///     .collect();
    /// assert_eq!(
    ///     map.get(SequenceColumn::from(0)).unwrap(),
    ///     Some(StructureColumn::from(0))
    /// );
    /// assert_eq!(map.get(SequenceColumn::from(1)).unwrap(), None);
    /// assert!(map.get(SequenceColumn::from(3)).is_err());
    /// ```
    pub fn get(&self, column: SequenceColumn) -> Result<Option<StructureColumn>> {
        if usize::from(column) >= self.entries.len() {
            return Err(Error::ColumnOutOfBounds {
                column: column.into(),
                column_count: self.entries.len(),
            });
        }

        Ok(self.entries[column])
    }

    pub fn is_aligned(&self, column: SequenceColumn) -> Result<bool> {
        Ok(self.get(column)?.is_some())
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<StructureColumn>> {
        self.entries.iter_values().copied()
    }

    pub fn columns(&self) -> impl Iterator<Item = SequenceColumn> {
        self.entries.iter_indices()
    }

    pub(super) fn push_aligned(&mut self, column: StructureColumn) {
        self.entries.push(Some(column));
    }

    pub(super) fn push_unaligned(&mut self) {
        self.entries.push(None);
    }
}

impl FromIterator<Option<StructureColumn>> for SequenceColumnMap {
    fn from_iter<T: IntoIterator<Item = Option<StructureColumn>>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect::<Vec<_>>().into(),
        }
    }
}
