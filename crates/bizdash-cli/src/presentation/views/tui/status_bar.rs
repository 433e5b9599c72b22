//! Status Bar View Component
//!
//! Renders the bottom status bar with paging, search and the last message.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(inner);

        let more = if self.model.has_more { "+" } else { "" };
        let mut spans = vec![
            Span::raw(format!("Page {}{} ", self.model.page, more)),
            Span::raw("| "),
            Span::raw(format!("{}/{} ", self.model.shown, self.model.total)),
            Span::raw("| "),
        ];
        if self.model.editing_search {
            spans.push(Span::styled(
                format!("/{}_", self.model.search),
                Style::default().fg(Color::Yellow),
            ));
        } else {
            if !self.model.search.is_empty() {
                spans.push(Span::raw(format!("search: {} ", self.model.search)));
                spans.push(Span::raw("| "));
            }
            spans.push(Span::styled(
                self.model.message.as_str(),
                Style::default().fg(color),
            ));
        }
        Paragraph::new(Line::from(spans)).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help_line = Line::from(vec![
            Span::styled("[q]", key),
            Span::raw("uit "),
            Span::styled("[n/p]", key),
            Span::raw("age "),
            Span::styled("[/]", key),
            Span::raw("search "),
            Span::styled("[e/d]", key),
            Span::raw("edit/del"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
