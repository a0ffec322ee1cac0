use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "The sequence alignment column {column} is out of bounds, as the projection contains {column_count} columns."
    )]
    ColumnOutOfBounds { column: usize, column_count: usize },

    #[error(
        "The structure column {column} does not exist in the alignment, which contains {core_length} block columns."
    )]
    StructureColumnOutOfBounds { column: usize, core_length: usize },

    #[error("Alignment model error: {0}")]
    Model(#[from] lib_msalign::error::Error),
}
