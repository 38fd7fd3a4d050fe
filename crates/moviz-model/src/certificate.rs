//! MPAA-equivalent certificate enumeration.
//!
//! Source catalogs carry a mix of MPAA, TV, and foreign rating systems.
//! All of them are remapped onto this fixed enumeration; anything the remap
//! table does not recognize becomes [`Certificate::Unknown`] rather than
//! causing a rejection.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Certificate {
    G,
    Pg,
    Pg13,
    R,
    Nc17,
    Approved,
    Passed,
    Unrated,
    NotRated,
    Unknown,
}

impl Certificate {
    /// Canonical label as stored in the output tables.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::G => "G",
            Self::Pg => "PG",
            Self::Pg13 => "PG-13",
            Self::R => "R",
            Self::Nc17 => "NC-17",
            Self::Approved => "Approved",
            Self::Passed => "Passed",
            Self::Unrated => "Unrated",
            Self::NotRated => "Not Rated",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
