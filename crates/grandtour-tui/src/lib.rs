//! Full-screen terminal front end for Grand Tour.

pub mod effects;
pub mod events;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;
pub mod views;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
use grandtour_core::config::Config;
use tracing::info;

pub use runtime::TuiRuntime;

/// Runs the interactive app until the user quits.
pub fn run(config: &Config) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The interactive app requires a terminal.\n\
             Use `grandtour simulate` or `grandtour routes` for non-interactive use."
        );
    }

    info!("starting tui");
    let mut runtime = TuiRuntime::new(config)?;
    let result = runtime.run();
    info!(transitions = runtime.state.nav.journal().total(), "tui stopped");
    result
}
