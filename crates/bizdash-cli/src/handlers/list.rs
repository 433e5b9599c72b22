use anyhow::{Context, Result};
use bizdash_core::{QueryResult, QueryState, load};
use std::path::PathBuf;

use crate::config::Config;
use crate::presentation::presenters::{present_list, present_list_result};
use crate::presentation::{ListRecord, Renderer};
use crate::source::JsonFileSource;
use crate::types::OutputFormat;

pub struct ListArgs {
    pub file: PathBuf,
    pub search: Option<String>,
    pub page: i64,
    pub size: Option<u32>,
}

impl ListArgs {
    /// The invocation, for follow-up suggestions.
    fn command(&self, kind: &str) -> String {
        let mut cmd = format!("bizdash list {} --file {}", kind, self.file.display());
        if let Some(search) = &self.search {
            cmd.push_str(&format!(" --search {:?}", search));
        }
        if let Some(size) = self.size {
            cmd.push_str(&format!(" --size {}", size));
        }
        cmd
    }
}

pub fn handle<Row, R>(
    config: &Config,
    kind: &str,
    args: &ListArgs,
    format: OutputFormat,
    renderer: &R,
) -> Result<()>
where
    Row: ListRecord,
    R: Renderer,
{
    let mut query = QueryState::new(args.size.unwrap_or(config.page_size));
    // Search first: it resets the page
    if let Some(search) = &args.search {
        query.set_search(search.as_str());
    }
    query.set_page(args.page);

    let opened = JsonFileSource::<Row>::open(&args.file);
    let result = match &opened {
        Ok(source) => load(source, &mut query),
        Err(err) => {
            tracing::warn!(file = %args.file.display(), error = %err, "could not open records");
            QueryResult::failed()
        }
    };

    let max_width = match format {
        OutputFormat::Plain => terminal_size::terminal_size().map(|(w, _)| w.0 as usize),
        OutputFormat::Json | OutputFormat::Csv => None,
    };
    let columns = Row::columns();
    let list = present_list(&query, &result, &columns, None, max_width);
    renderer.render(present_list_result(list, &args.command(kind)))?;

    opened
        .map(|_| ())
        .with_context(|| format!("Failed to load {}", args.file.display()))
}
