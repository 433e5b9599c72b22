//! Header with the navigation breadcrumb and the signed-in user.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::BrowseScreenViewModel;

pub struct HeaderView<'a> {
    model: &'a BrowseScreenViewModel,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a BrowseScreenViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" bizdash ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut crumbs = Vec::new();
        for (i, label) in self.model.breadcrumb.iter().enumerate() {
            if i > 0 {
                crumbs.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
            }
            let style = if i + 1 == self.model.breadcrumb.len() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            crumbs.push(Span::styled(label.as_str(), style));
        }
        Paragraph::new(Line::from(crumbs)).render(inner, buf);

        let user = match &self.model.user {
            Some(user) => Span::styled(user.as_str(), Style::default().fg(Color::Cyan)),
            None => Span::styled("signed out", Style::default().fg(Color::DarkGray)),
        };
        Paragraph::new(Line::from(user))
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}
