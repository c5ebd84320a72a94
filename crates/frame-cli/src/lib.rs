//! CLI library components for the frame transformer runner.

pub mod cli;
pub mod commands;
pub mod io;
pub mod logging;
pub mod summary;
