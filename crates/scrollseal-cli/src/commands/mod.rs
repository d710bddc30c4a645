//! Subcommand implementations.

pub mod quran;
mod shared;
pub mod torah;
