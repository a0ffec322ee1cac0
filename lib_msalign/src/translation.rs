use crate::{
    error::{Error, Result},
    residue::Residue,
};


/// Translation from residues to one-letter codes.
///
/// This is the seam between the alignment model and anything that renders
/// residues as characters.
pub trait OneLetterCode {
    fn one_letter_code(&self, residue: &Residue) -> Result<char>;
}

/// What to do with a residue name that has no one-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FallbackPolicy {
    /// Translate unknown names to the given placeholder character.
    Placeholder(char),
    /// Report unknown names as an error.
    Fail,
}

/// The standard amino-acid one-letter-code table.
///
/// Covers the twenty standard amino acids plus the common ambiguity and
/// non-standard codes. Residue names are matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResidueCodeTable {
    fallback: FallbackPolicy,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self::Placeholder('X')
    }
}

impl ResidueCodeTable {
    pub fn new(fallback: FallbackPolicy) -> Self {
        Self { fallback }
    }
}

impl OneLetterCode for ResidueCodeTable {
    fn one_letter_code(&self, residue: &Residue) -> Result<char> {
        let name = residue.name().trim().to_ascii_uppercase();

        if let Some(code) = standard_code(&name) {
            Ok(code)
        } else {
            match self.fallback {
                FallbackPolicy::Placeholder(placeholder) => Ok(placeholder),
                FallbackPolicy::Fail => Err(Error::UnknownResidueName { name }),
            }
        }
    }
}

fn standard_code(name: &str) -> Option<char> {
    Some(match name {
        "ALA" => 'A',
        "ARG" => 'R',
        "ASN" => 'N',
        "ASP" => 'D',
        "CYS" => 'C',
        "GLN" => 'Q',
        "GLU" => 'E',
        "GLY" => 'G',
        "HIS" => 'H',
        "ILE" => 'I',
        "LEU" => 'L',
        "LYS" => 'K',
        "MET" => 'M',
        "PHE" => 'F',
        "PRO" => 'P',
        "SER" => 'S',
        "THR" => 'T',
        "TRP" => 'W',
        "TYR" => 'Y',
        "VAL" => 'V',
        // Ambiguity and non-standard codes.
        "ASX" => 'B',
        "GLX" => 'Z',
        "SEC" => 'U',
        "PYL" => 'O',
        _ => return None,
    })
}
