//! Configuration loading and resolution.
//!
//! `load` is the entry point: it layers the config file, extra files named on
//! the command line, `SNP_*` environment variables and CLI flags, then
//! validates the result into a [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
