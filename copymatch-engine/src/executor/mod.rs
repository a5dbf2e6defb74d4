//! Execution strategies for matching sources against a suspect index

use crate::error::Result;
use crate::index::{LoadedSource, SuspectIndex};
use crate::report::SourceReport;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Progress callback, invoked with the label of each finished source
pub type ProgressFn<'p> = &'p (dyn Fn(&str) + Sync);

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExecutionMode {
    /// One source after another on the calling thread
    Sequential,
    /// Sources spread across a rayon pool
    Parallel,
    /// Chosen from the workload size
    Adaptive,
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Match every source, returning reports in input order
    fn execute(
        &self,
        index: &SuspectIndex,
        sources: &[LoadedSource],
        progress: ProgressFn<'_>,
    ) -> Result<Vec<SourceReport>>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Automatically select execution mode based on workload size
pub fn auto_select(source_count: usize, source_bytes: usize, threshold: usize) -> ExecutionMode {
    if source_count < 2 || source_bytes < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_source_is_sequential() {
        assert_eq!(auto_select(1, usize::MAX, 10), ExecutionMode::Sequential);
    }

    #[test]
    fn test_small_workload_is_sequential() {
        assert_eq!(auto_select(8, 9, 10), ExecutionMode::Sequential);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_large_workload_is_parallel() {
        assert_eq!(auto_select(8, 10, 10), ExecutionMode::Parallel);
    }
}
