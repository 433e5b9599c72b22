use anyhow::{Context, Result};
use bizdash_core::NavTable;
use std::path::Path;

use crate::config::Config;
use crate::presentation::ListRecord;
use crate::presentation::renderers::BrowseApp;
use crate::source::JsonFileSource;

pub fn handle<Row: ListRecord>(config: &Config, file: &Path) -> Result<()> {
    let source = JsonFileSource::<Row>::open(file)
        .with_context(|| format!("Failed to load {}", file.display()))?;
    let nav = NavTable::build(&config.nav).context("Invalid [[nav]] entries in config")?;

    BrowseApp::new(source, config.page_size, nav, config.session.session()).run()
}
