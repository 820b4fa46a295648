#![forbid(unsafe_code)]

//! ccfmt: run clang-format in place over a project's C++ sources
//!
//! With no arguments, every `.cc`/`.hh` file under `src/` and `test/` is
//! handed to the formatter one at a time. Explicit paths skip the walk.

pub mod cli;
pub mod config;
pub mod engine;
pub mod logging;
pub mod output;
