use std::iter;

use itertools::Itertools;
use lib_msalign::{
    ensemble::StructureEnsemble,
    index_types::{BlockColumn, BlockIndex, ResidueIndex, StructureRow},
    multiple_alignment::{Block, MultipleAlignment},
    residue::Residue,
    translation::OneLetterCode,
};
use log::{debug, trace};
use tagged_vec::TaggedVec;

use crate::error::{Error, Result};

use index_types::{SequenceColumn, StructureColumn};

pub use column_map::SequenceColumnMap;

pub mod column_map;
pub mod index_types;

#[cfg(test)]
mod tests;

/// The character emitted for gaps and for the separator between blocks.
pub const GAP_CHARACTER: char = '-';

/// A sequence-alignment view of a multiple structure alignment.
///
/// Blocks are concatenated in the order given by
/// [`MultipleAlignment::blocks`]. Residues between two blocks are omitted,
/// while gaps within blocks are rendered as [`GAP_CHARACTER`]; the separation
/// between two blocks is rendered as a gap in every row, meaning that there is
/// something unaligned in between. Residues a structure has between two
/// adjacent block columns that never entered the alignment are rendered as
/// extra unaligned columns, so that consecutively emitted residues of a row
/// are always consecutive in that structure's residue array.
///
/// The projection owns one rendered string per structure row together with the
/// [`SequenceColumnMap`] linking every sequence column to its structure column.
pub struct SequenceProjection {
    rows: TaggedVec<StructureRow, String>,
    column_map: SequenceColumnMap,
}

enum ProvisionalChar {
    Code(char),
    Gap,
    /// The row cannot emit its aligned residue yet, because this residue must
    /// be emitted first.
    Break(ResidueIndex),
}

impl SequenceProjection {
    /// Renders the sequence-alignment view of a multiple alignment.
    ///
    /// The one-letter code of each residue is taken from `translator`, whose
    /// fallback policy decides whether non-standard residue names render as a
    /// placeholder or fail the projection.
    pub fn new(
        alignment: &MultipleAlignment,
        translator: &impl OneLetterCode,
    ) -> Result<Self> {
        debug!(
            "Projecting a multiple alignment of {} structures and {} blocks into sequence space",
            alignment.row_count(),
            alignment.blocks().len()
        );

        let row_count = alignment.row_count();
        let ensemble = alignment.ensemble();
        let mut sequences: TaggedVec<StructureRow, String> =
            vec![String::new(); row_count].into();
        let mut column_map = SequenceColumnMap::default();
        let mut next_structure_column = StructureColumn::default();

        for (block_index, block) in alignment.blocks().iter().enumerate() {
            if block_index != 0 {
                // A gap in all rows separates this block from the previous
                // one: something unaligned lies in between.
                for sequence in sequences.iter_values_mut() {
                    sequence.push(GAP_CHARACTER);
                }
                column_map.push_unaligned();
            }

            // The residue index last emitted per row within this block.
            let mut previous: TaggedVec<StructureRow, Option<ResidueIndex>> =
                vec![None; row_count].into();

            for column in block.columns() {
                let structure_column = next_structure_column;
                next_structure_column += 1;

                // A row whose aligned residue is not consecutive with its
                // previously emitted residue has unaligned residues in
                // between. Emit those first, one extra column at a time, until
                // every row has caught up. The loop is bounded by the residues
                // remaining in the breaking rows: a model whose indices never
                // catch up runs out of residues and fails the lookup.
                loop {
                    let mut any_break = false;
                    let mut provisional: TaggedVec<StructureRow, ProvisionalChar> =
                        TaggedVec::default();

                    for row in previous.iter_indices() {
                        let provisional_char = match (previous[row], block.residue_index(row, column)) {
                            (_, None) => ProvisionalChar::Gap,
                            (None, Some(index)) => {
                                ProvisionalChar::Code(one_letter_code(ensemble, translator, row, index)?)
                            }
                            (Some(previous_index), Some(index)) => {
                                if previous_index + 1 == index {
                                    ProvisionalChar::Code(one_letter_code(
                                        ensemble, translator, row, index,
                                    )?)
                                } else {
                                    any_break = true;
                                    ProvisionalChar::Break(previous_index + 1)
                                }
                            }
                        };
                        provisional.push(provisional_char);
                    }

                    if any_break {
                        trace!(
                            "Emitting an insertion column before block {block_index}, column {}",
                            usize::from(column)
                        );

                        for (row, provisional_char) in
                            provisional.iter_indices().zip(provisional.iter_values())
                        {
                            if let ProvisionalChar::Break(insertion) = provisional_char {
                                sequences[row]
                                    .push(one_letter_code(ensemble, translator, row, *insertion)?);
                                previous[row] = Some(*insertion);
                            } else {
                                sequences[row].push(GAP_CHARACTER);
                            }
                        }
                        column_map.push_unaligned();
                    } else {
                        for (row, provisional_char) in
                            provisional.iter_indices().zip(provisional.iter_values())
                        {
                            match provisional_char {
                                ProvisionalChar::Code(code) => {
                                    sequences[row].push(*code);
                                    previous[row] = block.residue_index(row, column);
                                }
                                ProvisionalChar::Gap => sequences[row].push(GAP_CHARACTER),
                                ProvisionalChar::Break(_) => unreachable!(),
                            }
                        }
                        column_map.push_aligned(structure_column);
                        break;
                    }
                }
            }
        }

        debug_assert!(
            sequences
                .iter_values()
                .map(|sequence| sequence.chars().count())
                .chain(iter::once(column_map.len()))
                .all_equal()
        );
        debug!("Projected {} sequence columns", column_map.len());

        Ok(Self {
            rows: sequences,
            column_map,
        })
    }

    /// Renders only the per-row sequence strings, discarding the column map.
    pub fn rows_without_column_map(
        alignment: &MultipleAlignment,
        translator: &impl OneLetterCode,
    ) -> Result<TaggedVec<StructureRow, String>> {
        Ok(Self::new(alignment, translator)?.into_rows())
    }

    pub fn rows(&self) -> &TaggedVec<StructureRow, String> {
        &self.rows
    }

    pub fn row(&self, row: StructureRow) -> Option<&str> {
        (usize::from(row) < self.rows.len()).then(|| self.rows[row].as_str())
    }

    pub fn into_rows(self) -> TaggedVec<StructureRow, String> {
        self.rows
    }

    pub fn column_map(&self) -> &SequenceColumnMap {
        &self.column_map
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The number of columns of the rendered sequence alignment.
    pub fn column_count(&self) -> usize {
        self.column_map.len()
    }

    /// Returns the residue of the given structure row that is aligned at the
    /// given sequence column, or `None` if that column renders a gap for the
    /// row or is unaligned altogether.
    pub fn residue_for_column<'alignment>(
        &self,
        alignment: &'alignment MultipleAlignment,
        row: StructureRow,
        column: SequenceColumn,
    ) -> Result<Option<&'alignment Residue>> {
        alignment.ensemble().structure(row)?;

        let Some(structure_column) = self.column_map.get(column)? else {
            return Ok(None);
        };

        let (_, block, local_column) = locate_structure_column(alignment, structure_column)?;
        let Some(residue_index) = block.residue_index(row, local_column) else {
            return Ok(None);
        };

        Ok(Some(alignment.ensemble().residue(row, residue_index)?))
    }

    /// Returns the block the given sequence column belongs to, or `None` if
    /// the column is unaligned.
    pub fn block_for_column(
        &self,
        alignment: &MultipleAlignment,
        column: SequenceColumn,
    ) -> Result<Option<BlockIndex>> {
        let Some(structure_column) = self.column_map.get(column)? else {
            return Ok(None);
        };

        let (block_index, _, _) = locate_structure_column(alignment, structure_column)?;
        Ok(Some(block_index))
    }

    /// Writes the rendered alignment as one `label: sequence` line per row,
    /// with labels padded to equal width.
    ///
    /// Labels are paired with rows in row order.
    ///
    /// # Panics
    ///
    /// Panics if the number of labels differs from the number of rows.
    pub fn render<'label>(
        &self,
        mut output: impl std::io::Write,
        labels: impl IntoIterator<Item = &'label str>,
    ) -> std::result::Result<(), std::io::Error> {
        let labels: Vec<_> = labels.into_iter().collect();
        let max_label_len = labels
            .iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0);

        for (label, sequence) in labels.iter().zip_eq(self.rows.iter_values()) {
            write!(output, "{label}: ")?;
            for _ in label.chars().count()..max_label_len {
                write!(output, " ")?;
            }

            writeln!(output, "{sequence}")?;
        }

        Ok(())
    }
}

/// The render labels of an ensemble, in row order.
pub fn ensemble_labels(ensemble: &StructureEnsemble) -> impl Iterator<Item = &str> {
    ensemble.structures().map(|structure| structure.label())
}

fn one_letter_code(
    ensemble: &StructureEnsemble,
    translator: &impl OneLetterCode,
    row: StructureRow,
    index: ResidueIndex,
) -> Result<char> {
    Ok(translator.one_letter_code(ensemble.residue(row, index)?)?)
}

/// Finds the block containing a structure column, together with the column's
/// block-local position.
fn locate_structure_column(
    alignment: &MultipleAlignment,
    structure_column: StructureColumn,
) -> Result<(BlockIndex, &Block, BlockColumn)> {
    let target = usize::from(structure_column);
    let mut offset = 0;

    for (block_index, block) in alignment.blocks().iter().enumerate() {
        if offset + block.column_count() <= target {
            offset += block.column_count();
            continue;
        }

        return Ok((
            BlockIndex::from(block_index),
            block,
            (target - offset).into(),
        ));
    }

    Err(Error::StructureColumnOutOfBounds {
        column: target,
        core_length: alignment.core_length(),
    })
}
