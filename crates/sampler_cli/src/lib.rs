//! # sampler_cli: Command Line Sampling
//!
//! Library half of the `dist-sampler` binary: configuration loading, the
//! error type and the `draw` and `check` commands. Commands write to any
//! [`std::io::Write`] so they can be exercised without a terminal.
//!
//! # Commands
//!
//! - `dist-sampler draw --kind Poisson --size 500 --lam 3` - draw and summarise
//! - `dist-sampler draw --request request.toml --chart text` - draw from a file
//! - `dist-sampler check --kind Normal --size 10 --mean 0` - validate only

pub mod commands;
pub mod config;
pub mod error;

pub use error::{CliError, Result};
