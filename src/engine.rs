//! File collection and formatter invocation

pub mod file_walker;
pub mod invoker;
pub mod runner;

pub use file_walker::FileWalker;
pub use invoker::{ExternalFormatter, InvocationOutcome, Invoker, LaunchError};
pub use runner::{RunError, RunSummary, Runner, Targets};
