use tagged_vec::TaggedVec;

use crate::index_types::{BlockColumn, ResidueIndex, StructureRow};

/// A contiguous span of aligned columns.
///
/// Each row holds, per column, either an index into that structure's residue
/// array or `None` for a gap. A structure may have residues between two
/// adjacent columns that never entered the alignment.
pub struct Block {
    rows: TaggedVec<StructureRow, TaggedVec<BlockColumn, Option<ResidueIndex>>>,
}

impl Block {
    pub fn new(rows: impl IntoIterator<Item = Vec<Option<ResidueIndex>>>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(TaggedVec::from)
                .collect::<Vec<_>>()
                .into(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The number of columns, taken from the first row.
    ///
    /// [`MultipleAlignment::new`](super::MultipleAlignment::new) rejects
    /// blocks whose rows disagree on this.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter_values()
            .next()
            .map(|row| row.len())
            .unwrap_or(0)
    }

    pub fn columns(&self) -> impl Iterator<Item = BlockColumn> {
        (0..self.column_count()).map(BlockColumn::from)
    }

    /// The residue index aligned at the given row and column, or `None` for a
    /// gap.
    pub fn residue_index(&self, row: StructureRow, column: BlockColumn) -> Option<ResidueIndex> {
        self.rows[row][column]
    }

    pub fn row(&self, row: StructureRow) -> impl Iterator<Item = Option<ResidueIndex>> {
        self.rows[row].iter_values().copied()
    }

    pub(super) fn row_lengths(&self) -> impl Iterator<Item = usize> {
        self.rows.iter_values().map(|row| row.len())
    }
}
