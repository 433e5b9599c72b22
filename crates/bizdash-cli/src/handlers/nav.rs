use anyhow::{Context, Result};
use bizdash_core::NavTable;

use crate::config::Config;
use crate::presentation::Renderer;
use crate::presentation::presenters::present_nav;

pub fn handle<R: Renderer>(config: &Config, path: Option<&str>, renderer: &R) -> Result<()> {
    let table = NavTable::build(&config.nav).context("Invalid [[nav]] entries in config")?;
    tracing::debug!(entries = table.len(), "navigation table built");
    renderer.render(present_nav(&table, path))
}
