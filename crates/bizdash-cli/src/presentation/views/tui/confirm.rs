//! Delete confirmation popup, drawn over the table.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::ConfirmViewModel;

const POPUP_WIDTH: u16 = 52;
const POPUP_HEIGHT: u16 = 7;

pub struct ConfirmView<'a> {
    model: &'a ConfirmViewModel,
}

impl<'a> ConfirmView<'a> {
    pub fn new(model: &'a ConfirmViewModel) -> Self {
        Self { model }
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

impl<'a> Widget for ConfirmView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered(area, POPUP_WIDTH, POPUP_HEIGHT);
        Clear.render(popup, buf);

        let border = if self.model.busy {
            Color::DarkGray
        } else {
            Color::Red
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", self.model.title));

        let button = if self.model.busy {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let status = if self.model.busy {
            Line::from(Span::styled(
                "Deleting...",
                Style::default().fg(Color::Cyan),
            ))
        } else {
            Line::default()
        };

        let lines = vec![
            Line::from(format!("Delete {}?", self.model.target)),
            status,
            Line::from(vec![
                Span::styled("[y] Delete", button),
                Span::raw("    "),
                Span::styled("[n] Cancel", button),
            ]),
        ];

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(popup, buf);
    }
}
