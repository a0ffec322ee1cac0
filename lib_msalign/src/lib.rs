pub mod ensemble;
pub mod error;
pub mod index_types;
pub mod multiple_alignment;
pub mod residue;
pub mod translation;
