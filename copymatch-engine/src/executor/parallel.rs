//! Parallel execution strategy

use crate::{
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor, ProgressFn},
    index::{LoadedSource, SuspectIndex},
    report::SourceReport,
};
use rayon::prelude::*;

/// Parallel multi-threaded executor
///
/// Each source is tokenized and scanned on its own rayon task against the
/// shared, read-only suspect index.
#[derive(Debug, Default)]
pub struct ParallelExecutor {
    thread_count: Option<usize>,
}

impl ParallelExecutor {
    /// Create a new parallel executor
    pub fn new(thread_count: Option<usize>) -> Self {
        Self { thread_count }
    }

    fn scan_all(
        index: &SuspectIndex,
        sources: &[LoadedSource],
        progress: ProgressFn<'_>,
    ) -> Vec<SourceReport> {
        sources
            .par_iter()
            .map(|source| {
                let report = index.match_source(source);
                progress(&source.label);
                report
            })
            .collect()
    }
}

impl Executor for ParallelExecutor {
    fn execute(
        &self,
        index: &SuspectIndex,
        sources: &[LoadedSource],
        progress: ProgressFn<'_>,
    ) -> Result<Vec<SourceReport>> {
        match self.thread_count {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| EngineError::ParallelError(e.to_string()))?;
                Ok(pool.install(|| Self::scan_all(index, sources, progress)))
            }
            None => Ok(Self::scan_all(index, sources, progress)),
        }
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
