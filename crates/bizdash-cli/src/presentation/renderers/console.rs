use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, TabularExport};
use crate::types::OutputFormat;

pub struct ConsoleRenderer {
    format: OutputFormat,
    color: bool,
}

impl ConsoleRenderer {
    /// Colours are used only when stdout is a terminal.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: io::stdout().is_terminal(),
        }
    }

    pub fn without_color(format: OutputFormat) -> Self {
        Self {
            format,
            color: false,
        }
    }

    pub fn render_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display + TabularExport,
        W: Write,
    {
        match self.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            }
            OutputFormat::Csv => {
                let Some((header, rows)) = result.content.csv_table() else {
                    bail!("this command has no CSV output; use --format plain or json");
                };
                let mut writer = csv::Writer::from_writer(out);
                writer.write_record(&header)?;
                for row in rows {
                    writer.write_record(&row)?;
                }
                writer.flush()?;
            }
            OutputFormat::Plain => self.write_plain(out, result)?,
        }
        Ok(())
    }

    fn write_plain<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
        W: Write,
    {
        if let Some(badge) = &result.badge {
            if self.color {
                writeln!(out, "{} {}", badge.icon(), badge.label.bold())?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content)?;

        if !result.suggestions.is_empty() {
            if self.color {
                writeln!(out, "\n{}", "Tips:".yellow().bold())?;
            } else {
                writeln!(out, "\nTips:")?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display + TabularExport,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, &result)
    }
}
