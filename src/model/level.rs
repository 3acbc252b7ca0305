use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The difficulty level of a course.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

serde_plain::derive_display_from_serialize!(Level);

impl FromStr for Level {
    type Err = CatalogError;

    /// Parses a level name case-insensitively. The Spanish names are accepted
    /// because the historical course files use them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BEGINNER" | "PRINCIPIANTE" => Ok(Level::Beginner),
            "INTERMEDIATE" | "INTERMEDIO" => Ok(Level::Intermediate),
            "ADVANCED" | "AVANZADO" => Ok(Level::Advanced),
            _ => Err(CatalogError::InvalidLevel(s.trim().to_string())),
        }
    }
}
