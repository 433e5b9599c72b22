//! TUI View Components
//!
//! Ratatui widgets for the record browser. Each view is a thin wrapper
//! around a reference to its view model; layout and colour only.
//! Mapping from StatusLevel to terminal colours happens here.

pub mod confirm;
pub mod header;
pub mod status_bar;
pub mod table;

pub use confirm::ConfirmView;
pub use header::HeaderView;
pub use status_bar::StatusBarView;
pub use table::TableView;

use bizdash_core::StatusLevel;
use ratatui::style::Color;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
