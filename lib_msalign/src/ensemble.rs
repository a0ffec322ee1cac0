use tagged_vec::TaggedVec;

use crate::{
    error::{Error, Result},
    index_types::{ResidueIndex, StructureRow},
    residue::Residue,
};

/// A structure with its ordered residue array.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Structure {
    label: String,
    residues: Vec<Residue>,
}

/// The structures underlying a multiple alignment, one per alignment row.
pub struct StructureEnsemble {
    structures: TaggedVec<StructureRow, Structure>,
}

impl Structure {
    pub fn new(label: impl Into<String>, residues: Vec<Residue>) -> Self {
        Self {
            label: label.into(),
            residues,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    pub fn residue(&self, index: ResidueIndex) -> Option<&Residue> {
        self.residues.get(usize::from(index))
    }
}

impl StructureEnsemble {
    pub fn new(structures: impl IntoIterator<Item = Structure>) -> Self {
        Self {
            structures: structures.into_iter().collect::<Vec<_>>().into(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.structures.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = StructureRow> {
        self.structures.iter_indices()
    }

    pub fn structures(&self) -> impl Iterator<Item = &Structure> {
        self.structures.iter_values()
    }

    pub fn structure(&self, row: StructureRow) -> Result<&Structure> {
        if usize::from(row) >= self.structures.len() {
            return Err(Error::RowOutOfBounds {
                row: row.into(),
                row_count: self.structures.len(),
            });
        }

        Ok(&self.structures[row])
    }

    /// Resolves a residue index through the residue array of the given row.
    pub fn residue(&self, row: StructureRow, index: ResidueIndex) -> Result<&Residue> {
        let structure = self.structure(row)?;
        structure
            .residue(index)
            .ok_or_else(|| Error::ResidueIndexOutOfBounds {
                row: row.into(),
                index: index.into(),
                residue_count: structure.residue_count(),
            })
    }
}
