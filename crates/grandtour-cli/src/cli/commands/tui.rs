//! Interactive app.

use anyhow::Result;
use grandtour_core::config::Config;

#[cfg(feature = "tui")]
pub fn run(config: &Config) -> Result<()> {
    grandtour_tui::run(config)
}

#[cfg(not(feature = "tui"))]
pub fn run(_config: &Config) -> Result<()> {
    anyhow::bail!("this build has no interactive app; rebuild with `--features tui`")
}
