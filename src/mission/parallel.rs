//! Parallel generation over independent streams
//!
//! A single stream must never be drawn from concurrently, so parallel runs
//! give every worker its own generator seeded from a [`MissionSeeds`] master.
//! The output order is fixed by worker index, so a parallel run is as
//! reproducible as a sequential one.

use rayon::prelude::*;
use serde::Serialize;

use crate::error::{MissionError, Result};
use crate::lore::LoreCatalog;
use crate::seeds::MissionSeeds;

use super::{MissionBrief, MissionGenerator, MissionParams};

/// Briefs from one run plus the seed needed to replay it
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MissionRun {
    /// Stream seed (single worker) or master seed (several workers)
    pub seed: i64,
    pub workers: usize,
    pub briefs: Vec<MissionBrief>,
}

/// Generate `per_worker` briefs on each of `workers` independent streams.
///
/// Result `i` is the batch produced by worker `i`.
pub fn generate_parallel(
    catalog: &LoreCatalog,
    seeds: MissionSeeds,
    workers: usize,
    per_worker: i64,
) -> Result<Vec<Vec<MissionBrief>>> {
    if workers == 0 {
        return Err(MissionError::InvalidArgument {
            argument: "workers",
            value: 0,
        });
    }

    (0..workers)
        .into_par_iter()
        .map(|index| {
            let mut generator = MissionGenerator::with_seed(catalog, seeds.worker(index));
            generator.generate_batch(per_worker)
        })
        .collect()
}

/// Split `count` briefs over `workers`; earlier workers take the remainder.
///
/// Never plans more workers than briefs.
fn shares(count: i64, workers: usize) -> Vec<i64> {
    let workers = i64::try_from(workers).unwrap_or(i64::MAX).min(count);
    (0..workers)
        .map(|i| count / workers + i64::from(i < count % workers))
        .filter(|&share| share > 0)
        .collect()
}

/// Execute a run described by [`MissionParams`].
pub fn generate_run(catalog: &LoreCatalog, params: &MissionParams) -> Result<MissionRun> {
    params.validate()?;

    if params.workers == 1 {
        let mut generator = match params.seed {
            Some(seed) => MissionGenerator::with_seed(catalog, seed),
            None => MissionGenerator::new(catalog),
        };
        let briefs = generator.generate_batch(params.count)?;
        // The stream is seeded by now, either explicitly or from the clock
        let seed = generator.state().seed().unwrap_or_default();
        return Ok(MissionRun {
            seed,
            workers: 1,
            briefs,
        });
    }

    let seeds = params
        .seed
        .map(MissionSeeds::from_master)
        .unwrap_or_else(MissionSeeds::from_clock);
    let plan = shares(params.count, params.workers);
    tracing::debug!(master = seeds.master, workers = plan.len(), "parallel run");

    let batches: Vec<Vec<MissionBrief>> = plan
        .par_iter()
        .enumerate()
        .map(|(index, &share)| {
            MissionGenerator::with_seed(catalog, seeds.worker(index)).generate_batch(share)
        })
        .collect::<Result<_>>()?;

    Ok(MissionRun {
        seed: seeds.master,
        workers: plan.len(),
        briefs: batches.into_iter().flatten().collect(),
    })
}
