//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{ExecutionMode, Executor, ProgressFn},
    index::{LoadedSource, SuspectIndex},
    report::SourceReport,
};

/// Sequential single-threaded executor
#[derive(Debug, Clone)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn execute(
        &self,
        index: &SuspectIndex,
        sources: &[LoadedSource],
        progress: ProgressFn<'_>,
    ) -> Result<Vec<SourceReport>> {
        let mut reports = Vec::with_capacity(sources.len());
        for source in sources {
            reports.push(index.match_source(source));
            progress(&source.label);
        }
        Ok(reports)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
