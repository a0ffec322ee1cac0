use log::debug;

use crate::{
    ensemble::StructureEnsemble,
    error::{Error, Result},
    index_types::{BlockIndex, StructureRow},
};

pub use block::Block;

mod block;


/// A multiple structure alignment: an ordered list of aligned blocks over a
/// structure ensemble.
///
/// The alignment is immutable after construction. All consistency checks run
/// eagerly in [`new`](Self::new), so every accessor can trust the model.
pub struct MultipleAlignment {
    ensemble: StructureEnsemble,
    blocks: Vec<Block>,
}

impl MultipleAlignment {
    /// Creates a multiple alignment after validating it against the ensemble.
    ///
    /// Every block must contain one row per structure, all rows of a block
    /// must contain the same number of columns, and every residue index
    /// referenced by a block must exist in its row's residue array.
    pub fn new(ensemble: StructureEnsemble, blocks: Vec<Block>) -> Result<Self> {
        let row_count = ensemble.row_count();

        for (block_index, block) in blocks.iter().enumerate() {
            if block.row_count() != row_count {
                return Err(Error::InconsistentBlockRowCount {
                    block: block_index,
                    actual: block.row_count(),
                    expected: row_count,
                });
            }

            let column_count = block.column_count();
            for (row, actual) in block.row_lengths().enumerate() {
                if actual != column_count {
                    return Err(Error::InconsistentBlockColumnCount {
                        block: block_index,
                        row,
                        actual,
                        expected: column_count,
                    });
                }
            }

            for row in (0..row_count).map(StructureRow::from) {
                let residue_count = ensemble.structure(row)?.residue_count();
                for index in block.row(row).flatten() {
                    if usize::from(index) >= residue_count {
                        return Err(Error::ResidueIndexOutOfBounds {
                            row: row.into(),
                            index: index.into(),
                            residue_count,
                        });
                    }
                }
            }
        }

        let result = Self { ensemble, blocks };
        debug!(
            "Validated multiple alignment: {} structures, {} blocks, {} block columns",
            result.row_count(),
            result.blocks.len(),
            result.core_length(),
        );
        Ok(result)
    }

    pub fn ensemble(&self) -> &StructureEnsemble {
        &self.ensemble
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, index: BlockIndex) -> Option<&Block> {
        self.blocks.get(usize::from(index))
    }

    /// The number of alignment rows, equal to the number of structures.
    pub fn row_count(&self) -> usize {
        self.ensemble.row_count()
    }

    /// The total number of block columns over all blocks.
    ///
    /// This is the size of the structure-column coordinate space.
    pub fn core_length(&self) -> usize {
        self.blocks.iter().map(Block::column_count).sum()
    }
}
