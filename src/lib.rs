//! Mission briefing generator for Neon Ascendant
//!
//! Assembles mission briefs (district, opposition, archetype, loadout,
//! complication, extraction condition) from fixed lore tables using a seeded
//! draw stream. Seeded generators are fully reproducible; unseeded ones pick
//! a seed from the clock on first use.

pub mod draw;
pub mod error;
pub mod export;
pub mod lore;
pub mod mission;
pub mod seeds;

pub use draw::{ChaChaStream, DrawStream, ScriptedStream, SeedOrigin, StreamState};
pub use error::{CatalogSlot, LoadError, MissionError};
pub use lore::{LoreCatalog, LoreCategory};
pub use mission::{MissionBrief, MissionGenerator, MissionParams, MissionRun};
