//! Seed management for mission generation
//!
//! Supplies the wall-clock seed used when a draw stream auto-seeds, and
//! derives independent per-worker seeds from a single master seed so that
//! parallel generation never has to share one stream.

use chrono::Utc;

/// Seeds for a set of independent generator streams.
///
/// Worker seeds are derived from the master with a fixed splitmix64 mixer,
/// so a whole parallel run is reproducible from `master` alone, across
/// builds and platforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MissionSeeds {
    /// Master seed (used for display/reference)
    pub master: i64,
}

impl MissionSeeds {
    pub fn from_master(master: i64) -> Self {
        Self { master }
    }

    /// Master seed taken from the wall clock
    pub fn from_clock() -> Self {
        Self::from_master(clock_seed())
    }

    /// Seed for the stream owned by worker `index`
    pub fn worker(&self, index: usize) -> i64 {
        derive_seed(self.master, index as u64)
    }
}

impl Default for MissionSeeds {
    fn default() -> Self {
        Self::from_clock()
    }
}

/// Non-deterministic seed from the current UTC time in nanoseconds.
pub fn clock_seed() -> i64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros())
}

/// Derive a sub-seed from a master seed and a stream index (splitmix64).
fn derive_seed(master: i64, index: u64) -> i64 {
    let step = index.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let mut z = (master as u64).wrapping_add(step);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    (z ^ (z >> 31)) as i64
}

impl std::fmt::Display for MissionSeeds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MissionSeeds {{ master: {} }}", self.master)
    }
}
