//! Grade — weight class assigned to an egg.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Single-letter egg grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl Grade {
    /// All grades, heaviest first.
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    #[must_use]
    pub fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Style class used to colour log rows of this grade.
    #[must_use]
    pub fn row_class(self) -> String {
        format!("row-grade-{}", self.letter())
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_row_class_from_letter() {
        assert_eq!(Grade::A.row_class(), "row-grade-A");
        assert_eq!(Grade::D.row_class(), "row-grade-D");
    }

    #[test]
    fn should_display_letter() {
        assert_eq!(Grade::C.to_string(), "C");
    }

    #[test]
    fn should_serialize_as_bare_letter() {
        assert_eq!(serde_json::to_string(&Grade::B).unwrap(), "\"B\"");
    }
}
