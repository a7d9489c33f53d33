//! Error types for mission generation
//!
//! Both variants describe content or programming defects. Nothing in the
//! generator retries or substitutes a default when one of them is raised.

use std::fmt;

use thiserror::Error;

use crate::lore::LoreCategory;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, MissionError>;

/// Collection that was found empty when a draw needed it
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSlot {
    /// One of the seven top-level lore collections
    Category(LoreCategory),
    /// The ability list of a specific archetype
    Abilities { archetype: String },
}

impl fmt::Display for CatalogSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSlot::Category(category) => write!(f, "{}", category.label()),
            CatalogSlot::Abilities { archetype } => {
                write!(f, "abilities of archetype '{}'", archetype)
            }
        }
    }
}

/// Fatal mission generation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MissionError {
    /// A lore collection had nothing to draw from
    #[error("lore catalog has no {0}")]
    EmptyCatalog(CatalogSlot),

    /// A count or bound was zero or negative
    #[error("invalid argument `{argument}`: {value} (must be positive)")]
    InvalidArgument { argument: &'static str, value: i64 },
}

/// Failure while loading catalog content or run parameters from JSON
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] MissionError),
}

impl MissionError {
    pub(crate) fn empty_category(category: LoreCategory) -> Self {
        MissionError::EmptyCatalog(CatalogSlot::Category(category))
    }

    pub(crate) fn empty_abilities(archetype: &str) -> Self {
        MissionError::EmptyCatalog(CatalogSlot::Abilities {
            archetype: archetype.to_string(),
        })
    }

    pub fn is_empty_catalog(&self) -> bool {
        matches!(self, MissionError::EmptyCatalog(_))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, MissionError::InvalidArgument { .. })
    }
}
