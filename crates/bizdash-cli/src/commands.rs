use super::args::{Cli, Commands};
use super::handlers;
use super::handlers::list::ListArgs;
use crate::config::{Config, resolve_workspace_path};
use crate::logging;
use crate::presentation::ConsoleRenderer;
use crate::types::{LogLevel, RecordKind};
use anyhow::Result;
use bizdash_types::{Invoice, StaffMember};

pub fn run(cli: Cli) -> Result<()> {
    // The browser owns the terminal; log lines would tear the screen
    let log_level = match cli.command {
        Commands::Browse { .. } => LogLevel::Off,
        _ => cli.log_level,
    };
    logging::init(log_level);

    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let config = Config::load_from(&Config::path_in(&data_dir))?;
    tracing::debug!(data_dir = %data_dir.display(), "configuration loaded");

    let renderer = ConsoleRenderer::new(cli.format);

    match cli.command {
        Commands::List {
            kind,
            file,
            search,
            page,
            size,
        } => {
            let args = ListArgs {
                file,
                search,
                page,
                size,
            };
            let name = kind.to_string();
            match kind {
                RecordKind::Staff => handlers::list::handle::<StaffMember, _>(
                    &config, &name, &args, cli.format, &renderer,
                ),
                RecordKind::Invoices => handlers::list::handle::<Invoice, _>(
                    &config, &name, &args, cli.format, &renderer,
                ),
            }
        }

        Commands::Browse { kind, file } => match kind {
            RecordKind::Staff => handlers::browse::handle::<StaffMember>(&config, &file),
            RecordKind::Invoices => handlers::browse::handle::<Invoice>(&config, &file),
        },

        Commands::Nav { path } => handlers::nav::handle(&config, path.as_deref(), &renderer),

        Commands::Whoami => handlers::whoami::handle(&config, &renderer),
    }
}
