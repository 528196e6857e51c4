//! Core Grand Tour library (navigation core, config, logging, static content).

pub mod config;
pub mod diagram;
pub mod logging;
pub mod nav;
pub mod portal;
