use std::fmt::Display;

/// A residue of a structure, as it appears in a structure's residue array.
///
/// Carries the three-letter chemical component name (e.g. `ALA`) and the
/// author-assigned sequence number, which is what callers typically want to
/// report back to the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Residue {
    name: String,
    number: i64,
}

impl Residue {
    pub fn new(name: impl Into<String>, number: i64) -> Self {
        Self {
            name: name.into(),
            number,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> i64 {
        self.number
    }
}

impl Display for Residue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.name, self.number)
    }
}
