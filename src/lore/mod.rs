//! Lore catalog for mission generation
//!
//! Holds the seven ordered content collections that mission briefs are drawn
//! from. A catalog is an immutable value: it is built once (either from the
//! reference lore or from JSON content) and handed to generators by reference.
//!
//! # Usage
//!
//! ```ignore
//! use neon_ascendant::lore::LoreCatalog;
//! use neon_ascendant::mission::MissionGenerator;
//!
//! let catalog = LoreCatalog::reference();
//! let mut generator = MissionGenerator::with_seed(&catalog, 42);
//! let brief = generator.generate_one()?;
//! ```

pub mod codex;
pub mod types;

pub use types::{Ability, Archetype, District, Faction, Implant, Weapon};

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, MissionError, Result};

/// The seven top-level lore collections, in draw order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoreCategory {
    Districts,
    Factions,
    Archetypes,
    Weapons,
    Implants,
    Complications,
    ExtractionConditions,
}

impl LoreCategory {
    pub const ALL: [LoreCategory; 7] = [
        LoreCategory::Districts,
        LoreCategory::Factions,
        LoreCategory::Archetypes,
        LoreCategory::Weapons,
        LoreCategory::Implants,
        LoreCategory::Complications,
        LoreCategory::ExtractionConditions,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LoreCategory::Districts => "districts",
            LoreCategory::Factions => "factions",
            LoreCategory::Archetypes => "archetypes",
            LoreCategory::Weapons => "weapons",
            LoreCategory::Implants => "implants",
            LoreCategory::Complications => "complications",
            LoreCategory::ExtractionConditions => "extraction conditions",
        }
    }
}

impl fmt::Display for LoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable set of lore collections
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoreCatalog {
    districts: Vec<District>,
    factions: Vec<Faction>,
    archetypes: Vec<Archetype>,
    weapons: Vec<Weapon>,
    implants: Vec<Implant>,
    complications: Vec<String>,
    extraction_conditions: Vec<String>,
}

static SHARED: OnceLock<LoreCatalog> = OnceLock::new();

impl LoreCatalog {
    /// Build a catalog from explicit collections.
    ///
    /// No validation happens here; empty collections surface as
    /// [`MissionError::EmptyCatalog`] when a generator draws from them.
    pub fn new(
        districts: Vec<District>,
        factions: Vec<Faction>,
        archetypes: Vec<Archetype>,
        weapons: Vec<Weapon>,
        implants: Vec<Implant>,
        complications: Vec<String>,
        extraction_conditions: Vec<String>,
    ) -> Self {
        Self {
            districts,
            factions,
            archetypes,
            weapons,
            implants,
            complications,
            extraction_conditions,
        }
    }

    /// The lore the game ships with
    pub fn reference() -> Self {
        Self::new(
            codex::districts(),
            codex::factions(),
            codex::archetypes(),
            codex::weapons(),
            codex::implants(),
            codex::COMPLICATIONS.iter().map(|s| s.to_string()).collect(),
            codex::EXTRACTION_CONDITIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    /// Process-wide reference catalog, built on first access
    pub fn shared() -> &'static LoreCatalog {
        SHARED.get_or_init(Self::reference)
    }

    /// Parse catalog content from JSON and validate it
    pub fn from_json_str(json: &str) -> std::result::Result<Self, LoadError> {
        let catalog: LoreCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    pub fn factions(&self) -> &[Faction] {
        &self.factions
    }

    pub fn archetypes(&self) -> &[Archetype] {
        &self.archetypes
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn implants(&self) -> &[Implant] {
        &self.implants
    }

    pub fn complications(&self) -> &[String] {
        &self.complications
    }

    pub fn extraction_conditions(&self) -> &[String] {
        &self.extraction_conditions
    }

    /// Number of entries in a category
    pub fn len_of(&self, category: LoreCategory) -> usize {
        match category {
            LoreCategory::Districts => self.districts.len(),
            LoreCategory::Factions => self.factions.len(),
            LoreCategory::Archetypes => self.archetypes.len(),
            LoreCategory::Weapons => self.weapons.len(),
            LoreCategory::Implants => self.implants.len(),
            LoreCategory::Complications => self.complications.len(),
            LoreCategory::ExtractionConditions => self.extraction_conditions.len(),
        }
    }

    /// Fail on the first empty top-level collection, in draw order
    pub fn check_categories(&self) -> Result<()> {
        match LoreCategory::ALL
            .into_iter()
            .find(|&category| self.len_of(category) == 0)
        {
            Some(category) => Err(MissionError::empty_category(category)),
            None => Ok(()),
        }
    }

    /// Full content check: every collection and every archetype's abilities
    pub fn validate(&self) -> Result<()> {
        self.check_categories()?;
        match self.archetypes.iter().find(|a| a.abilities.is_empty()) {
            Some(archetype) => Err(MissionError::empty_abilities(&archetype.name)),
            None => Ok(()),
        }
    }
}

impl Default for LoreCatalog {
    fn default() -> Self {
        Self::reference()
    }
}
