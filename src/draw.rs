//! Seeded draw streams
//!
//! A draw stream hands out uniform indices one at a time. Its state advances
//! with every draw, so the order of draws is part of the output contract.
//!
//! [`ChaChaStream`] is the production stream. [`ScriptedStream`] replays a
//! fixed list of values and records the bounds it was asked for, which lets
//! tests check draw order without depending on any PRNG's bit-level output.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::{MissionError, Result};
use crate::seeds::clock_seed;

/// How a stream obtained its seed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeedOrigin {
    /// Set through [`DrawStream::seed`]
    Explicit,
    /// Taken from the wall clock on the first draw
    Auto,
}

/// Seeding lifecycle of a stream. `Unseeded -> Seeded` is one-way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamState {
    Unseeded,
    Seeded { seed: i64, origin: SeedOrigin },
}

impl StreamState {
    pub fn is_seeded(&self) -> bool {
        matches!(self, StreamState::Seeded { .. })
    }

    /// Seed in use, if any
    pub fn seed(&self) -> Option<i64> {
        match self {
            StreamState::Unseeded => None,
            StreamState::Seeded { seed, .. } => Some(*seed),
        }
    }
}

/// Minimal sampling interface the mission generator draws through
pub trait DrawStream {
    /// Replace the stream state deterministically.
    fn seed(&mut self, seed: i64);

    /// Uniform index in `[0, bound)`.
    ///
    /// Implementations must stay inside the range; the generator reports an
    /// out-of-range index as [`MissionError::InvalidArgument`]. A zero bound is
    /// rejected with the same error.
    fn draw_uniform(&mut self, bound: usize) -> Result<usize>;

    fn state(&self) -> StreamState;
}

fn check_bound(bound: usize) -> Result<()> {
    if bound == 0 {
        return Err(MissionError::InvalidArgument {
            argument: "bound",
            value: 0,
        });
    }
    Ok(())
}

/// ChaCha8-backed stream with lazy wall-clock seeding
#[derive(Clone, Debug)]
pub struct ChaChaStream {
    // Placeholder until the first seed; never drawn from while unseeded
    rng: ChaCha8Rng,
    state: StreamState,
}

impl ChaChaStream {
    /// Unseeded stream; seeds itself from the clock on first draw
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(0),
            state: StreamState::Unseeded,
        }
    }

    pub fn seeded(seed: i64) -> Self {
        let mut stream = Self::new();
        stream.seed(seed);
        stream
    }

    fn install(&mut self, seed: i64, origin: SeedOrigin) {
        self.rng = ChaCha8Rng::seed_from_u64(seed as u64);
        self.state = StreamState::Seeded { seed, origin };
    }

    fn ensure_seeded(&mut self) {
        if self.state == StreamState::Unseeded {
            let seed = clock_seed();
            tracing::info!(seed, "draw stream auto-seeded from clock");
            self.install(seed, SeedOrigin::Auto);
        }
    }
}

impl Default for ChaChaStream {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawStream for ChaChaStream {
    fn seed(&mut self, seed: i64) {
        tracing::debug!(seed, "draw stream seeded");
        self.install(seed, SeedOrigin::Explicit);
    }

    fn draw_uniform(&mut self, bound: usize) -> Result<usize> {
        check_bound(bound)?;
        self.ensure_seeded();
        // Sample in u64 so the sequence is identical on 32- and 64-bit targets
        let index = self.rng.gen_range(0..bound as u64) as usize;
        tracing::trace!(bound, index, "draw");
        Ok(index)
    }

    fn state(&self) -> StreamState {
        self.state
    }
}

/// Deterministic fake that replays scripted values.
///
/// Values are cycled and reduced modulo the requested bound, so any script is
/// valid for any catalog. An empty script always yields 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedStream {
    values: Vec<usize>,
    cursor: usize,
    bounds: Vec<usize>,
    state: Option<StreamState>,
}

impl ScriptedStream {
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Always draws index 0
    pub fn zeros() -> Self {
        Self::new(Vec::new())
    }

    /// Bounds requested so far, in draw order
    pub fn requested_bounds(&self) -> &[usize] {
        &self.bounds
    }

    pub fn draws(&self) -> usize {
        self.bounds.len()
    }
}

impl DrawStream for ScriptedStream {
    fn seed(&mut self, seed: i64) {
        self.cursor = 0;
        self.state = Some(StreamState::Seeded {
            seed,
            origin: SeedOrigin::Explicit,
        });
    }

    fn draw_uniform(&mut self, bound: usize) -> Result<usize> {
        check_bound(bound)?;
        if self.state.is_none() {
            self.state = Some(StreamState::Seeded {
                seed: 0,
                origin: SeedOrigin::Auto,
            });
        }
        self.bounds.push(bound);
        let value = match self.values.len() {
            0 => 0,
            len => self.values[self.cursor % len],
        };
        self.cursor += 1;
        Ok(value % bound)
    }

    fn state(&self) -> StreamState {
        self.state.unwrap_or(StreamState::Unseeded)
    }
}
