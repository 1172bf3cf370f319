//! Parallel family fan-out and report assembly (made by FontLab https://www.fontlab.com/)

use anyhow::{Context, Result};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use serde::{Deserialize, Serialize};

use crate::collection::FontCollection;
use crate::extract::{extract_family, FamilyResult, FontMetadata};

/// Full enumeration output: every surviving record plus summary counters.
/// Built once per run, never mutated after assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateReport {
    pub fonts: Vec<FontMetadata>,
    pub stats: ReportStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStats {
    pub num_fonts: usize,
    /// Families dropped because extraction hit a terminal error.
    pub skipped_families: usize,
}

/// Extract every family of `collection` on a pool of exactly `workers`
/// threads and aggregate the results in family-index order.
///
/// A `workers` of zero behaves like one. One task is submitted per family
/// index up front; the indexed collect consumes results in submission
/// order regardless of completion order, so output ordering is identical
/// across worker counts. A family that fails contributes nothing and is
/// counted into `skipped_families`; it never aborts the run. There is no
/// cancellation and no retry.
pub fn run_all(collection: &dyn FontCollection, workers: usize) -> Result<AggregateReport> {
    let workers = workers.max(1);
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .context("building extraction worker pool")?;

    let family_count = collection.family_count();
    let results: Vec<FamilyResult> = pool.install(|| {
        (0..family_count)
            .into_par_iter()
            .map(|family_index| extract_family(collection, family_index))
            .collect()
    });

    let mut fonts = Vec::new();
    let mut skipped_families = 0;
    for (family_index, result) in results.into_iter().enumerate() {
        match result {
            Ok(records) => fonts.extend(records),
            Err(err) => {
                log::debug!("skipping family {family_index}: {err}");
                skipped_families += 1;
            }
        }
    }

    let num_fonts = fonts.len();
    Ok(AggregateReport {
        fonts,
        stats: ReportStats {
            num_fonts,
            skipped_families,
        },
    })
}
