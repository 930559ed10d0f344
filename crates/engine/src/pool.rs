use crate::digest::{DigestResult, DigestWorker};
use crate::distributor::WorkPartition;
use crate::error::{EngineError, Result};
use tracing::error;

/// Run one digest worker per partition on a dedicated pool and wait for all of them.
///
/// The pool has exactly `partitions.len()` threads and thread `k` processes
/// partition `k`; nothing is stolen or rebalanced. Results come back in
/// worker order once every worker has finished.
///
/// # Errors
/// Fails if the pool cannot be built or if any worker failed. Every failure is
/// logged; the one from the lowest worker index is returned.
pub fn run_workers(partitions: &[WorkPartition]) -> Result<Vec<DigestResult>> {
    if partitions.is_empty() {
        return Ok(Vec::new());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(partitions.len())
        .thread_name(|index| format!("digest-worker-{index}"))
        .build()?;
    ensure_pool_size(pool.current_num_threads(), partitions.len())?;

    let outcomes = pool.broadcast(|ctx| match partitions.get(ctx.index()) {
        Some(partition) => DigestWorker::new(partition).run(),
        None => Ok(DigestResult::new(ctx.index())),
    });
    ensure_pool_size(outcomes.len(), partitions.len())?;

    collect_outcomes(outcomes)
}

/// Rayon clamps `num_threads` to its own maximum; a smaller pool would leave
/// partitions unprocessed.
fn ensure_pool_size(actual: usize, expected: usize) -> Result<()> {
    if actual == expected {
        return Ok(());
    }
    Err(EngineError::Config(format!(
        "worker pool has {actual} threads but {expected} partitions need one each"
    )))
}

fn collect_outcomes(outcomes: Vec<Result<DigestResult>>) -> Result<Vec<DigestResult>> {
    let mut results = Vec::with_capacity(outcomes.len());
    let mut first_error: Option<EngineError> = None;

    for (worker, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(result) => results.push(result),
            Err(e) => {
                error!(worker, "digest worker failed: {e}");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(results),
    }
}
