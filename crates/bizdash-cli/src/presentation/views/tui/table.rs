//! Table View Component
//!
//! Renders the current page of rows with an actions column, or the
//! presenter's loading / error / empty message in place of the table.

use bizdash_core::ActionKind;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

use crate::presentation::view_models::ListViewModel;

use super::status_level_to_color;

const ACTIONS_WIDTH: u16 = 20;

pub struct TableView<'a> {
    model: &'a ListViewModel,
    selected: Option<usize>,
}

impl<'a> TableView<'a> {
    pub fn new(model: &'a ListViewModel, selected: Option<usize>) -> Self {
        Self { model, selected }
    }
}

fn action_key(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::Edit => "[e]",
        ActionKind::Delete => "[d]",
    }
}

impl<'a> Widget for TableView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.model.title));

        if let Some(state) = self.model.table.status() {
            let style = Style::default().fg(status_level_to_color(state.level()));
            Paragraph::new(Line::from(Span::styled(state.message(), style)))
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buf);
            return;
        }

        let rows = self.model.table.rows();
        let with_actions = rows.iter().any(|row| !row.actions.is_empty());

        let mut header: Vec<Cell> = self
            .model
            .columns
            .iter()
            .map(|c| Cell::from(c.as_str()))
            .collect();
        if with_actions {
            header.push(Cell::from("Actions"));
        }

        let body: Vec<Row> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut cells: Vec<Cell> =
                    row.cells.iter().map(|c| Cell::from(c.as_str())).collect();
                if with_actions {
                    let mut spans = Vec::new();
                    for button in &row.actions {
                        let style = if button.disabled {
                            Style::default().fg(Color::DarkGray)
                        } else {
                            Style::default().fg(Color::Yellow)
                        };
                        spans.push(Span::styled(
                            format!("{}{} ", action_key(button.kind), button.kind.label()),
                            style,
                        ));
                    }
                    cells.push(Cell::from(Line::from(spans)));
                }

                let row_widget = Row::new(cells);
                if self.selected == Some(i) {
                    row_widget.style(Style::default().add_modifier(Modifier::REVERSED))
                } else {
                    row_widget
                }
            })
            .collect();

        let mut widths: Vec<Constraint> = self
            .model
            .columns
            .iter()
            .map(|_| Constraint::Fill(1))
            .collect();
        if with_actions {
            widths.push(Constraint::Length(ACTIONS_WIDTH));
        }

        Table::new(body, widths)
            .header(Row::new(header).style(Style::default().add_modifier(Modifier::BOLD)))
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_list;
    use crate::presentation::records::ListRecord;
    use crate::presentation::views::tui::buffer_text;
    use bizdash_core::{MemorySource, QueryState, RowActions, load};
    use bizdash_types::{StaffMember, StaffRole};
    use futures::FutureExt;
    use ratatui::{Terminal, backend::TestBackend};

    fn list(
        rows: Vec<StaffMember>,
        actions: Option<&RowActions<'_, StaffMember>>,
    ) -> ListViewModel {
        let source = MemorySource::new(rows);
        let mut query = QueryState::new(10);
        let result = load(&source, &mut query);
        present_list(&query, &result, &StaffMember::columns(), actions, None)
    }

    fn draw(model: &ListViewModel, selected: Option<usize>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 8)).unwrap();
        terminal
            .draw(|f| f.render_widget(TableView::new(model, selected), f.area()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_empty_list_shows_message() {
        let text = draw(&list(Vec::new(), None), None);
        assert!(text.contains("No records found."));
        assert!(!text.contains("Email"));
    }

    #[test]
    fn test_rows_and_actions_column() {
        let actions = RowActions::<StaffMember>::new()
            .with_edit(|_, _| {})
            .with_delete(|_, _| async { Ok(()) }.boxed_local())
            .disable_delete(true);
        let model = list(
            vec![StaffMember {
                id: 1,
                name: "Ada".to_string(),
                role: StaffRole::Owner,
                email: "ada@example.com".to_string(),
                active: true,
            }],
            Some(&actions),
        );

        let text = draw(&model, Some(0));
        assert!(text.contains("Staff"));
        assert!(text.contains("ada@example.com"));
        assert!(text.contains("Actions"));
        assert!(text.contains("[e]Edit"));
        assert!(text.contains("[d]Delete"));
    }
}
