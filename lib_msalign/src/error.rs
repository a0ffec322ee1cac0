use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Block {block} contains {actual} structure rows, but the alignment has {expected} structures.")]
    InconsistentBlockRowCount {
        block: usize,
        actual: usize,
        expected: usize,
    },

    #[error(
        "Row {row} of block {block} contains {actual} columns, but the block's first row contains {expected}."
    )]
    InconsistentBlockColumnCount {
        block: usize,
        row: usize,
        actual: usize,
        expected: usize,
    },

    #[error("The structure row {row} does not exist, as the ensemble contains {row_count} structures.")]
    RowOutOfBounds { row: usize, row_count: usize },

    #[error(
        "Residue index {index} is out of bounds for structure row {row}, which contains {residue_count} residues."
    )]
    ResidueIndexOutOfBounds {
        row: usize,
        index: usize,
        residue_count: usize,
    },

    #[error("The residue name '{name}' has no one-letter code.")]
    UnknownResidueName { name: String },
}
