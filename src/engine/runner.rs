#![forbid(unsafe_code)]

//! Target selection and the sequential formatting loop
//!
//! Explicit paths are formatted as given, in order, with no walk and no
//! extension filter. Without them the configured roots are walked. Files
//! are processed strictly one at a time; each formatter run finishes
//! before the next file is considered.

use crate::config::FormatConfig;
use crate::engine::file_walker::FileWalker;
use crate::engine::invoker::{InvocationOutcome, Invoker, LaunchError};
use crate::output::HumanReporter;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Where the files to format come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Targets {
    /// Paths given on the command line
    Explicit(Vec<PathBuf>),
    /// Files found by walking the configured roots
    Discovered(Vec<PathBuf>),
}

impl Targets {
    /// Pick the targets for a run
    ///
    /// The roots are only touched when `explicit` is empty.
    pub fn select(explicit: Vec<PathBuf>, config: &FormatConfig) -> Self {
        if explicit.is_empty() {
            let walker = FileWalker::new(&config.extensions);
            Targets::Discovered(walker.collect(&config.roots))
        } else {
            Targets::Explicit(explicit)
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        match self {
            Targets::Explicit(paths) | Targets::Discovered(paths) => paths,
        }
    }
}

/// Counts for a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub formatted: usize,
    pub formatter_failures: usize,
}

/// Drives the formatter over a list of targets
pub struct Runner<I: Invoker> {
    invoker: I,
}

impl<I: Invoker> Runner<I> {
    pub fn new(invoker: I) -> Self {
        Runner { invoker }
    }

    /// Format every target in order
    ///
    /// A formatter that exits non-zero does not stop the run. A formatter
    /// that cannot be launched does, leaving earlier files formatted.
    pub fn run(
        &mut self,
        targets: &Targets,
        reporter: &mut HumanReporter,
    ) -> Result<RunSummary, RunError> {
        let mut summary = RunSummary::default();

        for path in targets.paths() {
            reporter.formatting(path)?;
            match self.invoker.invoke(path)? {
                InvocationOutcome::Formatted => summary.formatted += 1,
                InvocationOutcome::FormatterFailed { .. } => summary.formatter_failures += 1,
            }
        }

        tracing::debug!(
            formatted = summary.formatted,
            failures = summary.formatter_failures,
            "run complete"
        );
        Ok(summary)
    }

    #[cfg(test)]
    fn into_invoker(self) -> I {
        self.invoker
    }
}
