use bizdash_core::TableOutput;
use serde::Serialize;
use std::fmt;

use super::common::TabularExport;
use crate::presentation::formatters::{pad_right, truncate};

const COLUMN_GAP: &str = "  ";
const MIN_COLUMN_WIDTH: usize = 6;

#[derive(Debug, Serialize)]
pub struct ListViewModel {
    pub title: String,
    pub route: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub page: u32,
    pub size: u32,
    pub total: usize,
    pub has_more: bool,
    pub columns: Vec<String>,
    pub table: TableOutput,
    /// Terminal width available for plain-text output
    #[serde(skip)]
    pub max_width: Option<usize>,
}

impl ListViewModel {
    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for row in self.table.rows() {
            for (width, cell) in widths.iter_mut().zip(&row.cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        if let Some(max_width) = self.max_width
            && !widths.is_empty()
        {
            let gaps = COLUMN_GAP.len() * (widths.len() - 1);
            let cap = (max_width.saturating_sub(gaps) / widths.len()).max(MIN_COLUMN_WIDTH);
            for width in &mut widths {
                *width = (*width).min(cap);
            }
        }
        widths
    }

    pub fn shown(&self) -> usize {
        self.table.rows().len()
    }
}

fn write_line(f: &mut fmt::Formatter, cells: &[String], widths: &[usize]) -> fmt::Result {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| pad_right(&truncate(cell, width), width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    writeln!(f, "{}", line.trim_end())
}

impl fmt::Display for ListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(state) = self.table.status() {
            writeln!(f, "{}", state.message())?;
            if let Some(ref search) = self.search {
                writeln!(f, "Search: {}", search)?;
            }
            return Ok(());
        }

        let widths = self.column_widths();
        write_line(f, &self.columns, &widths)?;
        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        write_line(f, &rule, &widths)?;
        for row in self.table.rows() {
            write_line(f, &row.cells, &widths)?;
        }

        writeln!(f)?;
        write!(
            f,
            "{} · page {} · showing {} of {}",
            self.title,
            self.page,
            self.shown(),
            self.total
        )?;
        if let Some(ref search) = self.search {
            write!(f, " · search \"{}\"", search)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

impl TabularExport for ListViewModel {
    fn csv_table(&self) -> Option<(Vec<String>, Vec<Vec<String>>)> {
        let rows = self
            .table
            .rows()
            .iter()
            .map(|row| row.cells.clone())
            .collect();
        Some((self.columns.clone(), rows))
    }
}
