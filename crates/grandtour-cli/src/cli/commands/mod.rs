//! CLI command handlers.

pub mod config;
pub mod diagram;
pub mod routes;
pub mod simulate;
pub mod tui;
