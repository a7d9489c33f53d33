//! Mission brief generation
//!
//! Turns a [`LoreCatalog`] and a [`DrawStream`] into [`MissionBrief`] values.
//!
//! # Draw order
//!
//! Every brief consumes exactly eight draws, in this order:
//!
//! 1. district
//! 2. faction
//! 3. archetype
//! 4. weapon
//! 5. implant
//! 6. featured ability, drawn from the selected archetype's own list
//! 7. complication
//! 8. extraction condition
//!
//! The stream is stateful, so changing this order changes what every seed
//! produces.

pub mod brief;
pub mod parallel;
pub mod params;

pub use brief::MissionBrief;
pub use parallel::{generate_parallel, generate_run, MissionRun};
pub use params::MissionParams;

use crate::draw::{ChaChaStream, DrawStream, StreamState};
use crate::error::{MissionError, Result};
use crate::lore::LoreCatalog;

/// Draw one element of `items` through the stream.
///
/// An index outside `[0, len)` from a misbehaving stream is an error, not a panic.
fn pick<'c, T, S: DrawStream>(stream: &mut S, items: &'c [T]) -> Result<&'c T> {
    let index = stream.draw_uniform(items.len())?;
    items.get(index).ok_or(MissionError::InvalidArgument {
        argument: "index",
        value: i64::try_from(index).unwrap_or(i64::MAX),
    })
}

/// Generator bound to a read-only catalog and owning its own draw stream.
///
/// Instances are independent: two generators never share stream state, so
/// tests and worker threads can each hold their own.
#[derive(Clone, Debug)]
pub struct MissionGenerator<'a, S = ChaChaStream> {
    catalog: &'a LoreCatalog,
    stream: S,
}

impl<'a> MissionGenerator<'a, ChaChaStream> {
    /// Unseeded generator; auto-seeds from the clock on first use
    pub fn new(catalog: &'a LoreCatalog) -> Self {
        Self::with_stream(catalog, ChaChaStream::new())
    }

    pub fn with_seed(catalog: &'a LoreCatalog, seed: i64) -> Self {
        Self::with_stream(catalog, ChaChaStream::seeded(seed))
    }
}

impl<'a, S: DrawStream> MissionGenerator<'a, S> {
    pub fn with_stream(catalog: &'a LoreCatalog, stream: S) -> Self {
        Self { catalog, stream }
    }

    /// Reseed the underlying stream
    pub fn seed(&mut self, seed: i64) {
        self.stream.seed(seed);
    }

    pub fn state(&self) -> StreamState {
        self.stream.state()
    }

    pub fn catalog(&self) -> &'a LoreCatalog {
        self.catalog
    }

    pub fn stream(&self) -> &S {
        &self.stream
    }

    pub fn into_stream(self) -> S {
        self.stream
    }

    /// Generate one brief.
    ///
    /// Fails with [`MissionError::EmptyCatalog`] before drawing anything if a
    /// category is empty, or before the ability draw if the chosen archetype
    /// has no abilities. No partial brief is ever returned.
    pub fn generate_one(&mut self) -> Result<MissionBrief> {
        let catalog = self.catalog;
        catalog.check_categories()?;

        let district = pick(&mut self.stream, catalog.districts())?;
        let opposition = pick(&mut self.stream, catalog.factions())?;
        let archetype = pick(&mut self.stream, catalog.archetypes())?;
        let weapon = pick(&mut self.stream, catalog.weapons())?;
        let implant = pick(&mut self.stream, catalog.implants())?;

        if archetype.abilities.is_empty() {
            return Err(MissionError::empty_abilities(&archetype.name));
        }
        let ability = pick(&mut self.stream, &archetype.abilities)?;

        let complication = pick(&mut self.stream, catalog.complications())?;
        let extraction = pick(&mut self.stream, catalog.extraction_conditions())?;

        let brief = MissionBrief::new(
            district.clone(),
            opposition.clone(),
            archetype.clone(),
            weapon.clone(),
            implant.clone(),
            ability.clone(),
            complication.clone(),
            extraction.clone(),
        );
        tracing::debug!(%brief, "mission brief generated");
        Ok(brief)
    }

    /// Generate `count` briefs from consecutive draws on the same stream.
    ///
    /// The stream is not reset between briefs, so the batch is reproducible
    /// as a whole from the seed. `count` must be positive.
    pub fn generate_batch(&mut self, count: i64) -> Result<Vec<MissionBrief>> {
        if count <= 0 {
            return Err(MissionError::InvalidArgument {
                argument: "count",
                value: count,
            });
        }
        (0..count).map(|_| self.generate_one()).collect()
    }
}
