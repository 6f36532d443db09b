//! CLI layer - argument parsing and server wire-up

pub mod app;
pub mod args;

pub use args::Cli;
