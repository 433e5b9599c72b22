//! TUI Renderer for the browse command
//!
//! Owns the page-level state of one record list (query, rows, selection,
//! delete dialog) and runs the event loop.
//!
//! ## Design:
//! - Rows come from the JSON file source through `bizdash_core::load`
//! - Edit and delete are row actions whose callbacks write back to the file
//! - A delete runs as a pending future polled between key events, so the
//!   dialog shows its busy state while the write is in flight
//! - The screen is rebuilt from view models on every frame

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use bizdash_core::{
    ColumnDescriptor, DeleteConfirmation, NavTable, QueryResult, QueryState, RowActions, Session,
    StatusLevel, load,
};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::FutureExt;
use futures::future::LocalBoxFuture;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};

use crate::presentation::presenters::{
    present_browse_screen, present_confirm, present_list, present_status_bar,
};
use crate::presentation::records::ListRecord;
use crate::presentation::view_models::BrowseScreenViewModel;
use crate::presentation::views::tui::{ConfirmView, HeaderView, StatusBarView, TableView};
use crate::source::JsonFileSource;

const TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Toast {
    level: StatusLevel,
    text: String,
}

type ToastSlot = Rc<RefCell<Option<Toast>>>;

fn post(slot: &ToastSlot, level: StatusLevel, text: impl Into<String>) {
    *slot.borrow_mut() = Some(Toast {
        level,
        text: text.into(),
    });
}

pub struct BrowseApp<Row: ListRecord> {
    source: Rc<RefCell<JsonFileSource<Row>>>,
    query: QueryState,
    result: QueryResult<Row>,
    columns: Vec<ColumnDescriptor<Row>>,
    actions: RowActions<'static, Row>,
    dialog: DeleteConfirmation<Row::Id>,
    pending: Option<LocalBoxFuture<'static, bizdash_core::Result<()>>>,
    toast: ToastSlot,
    nav: NavTable,
    session: Option<Session>,

    /// UI State: selected row on the current page
    selected: usize,
    /// UI State: search prompt contents while it has focus
    search_input: Option<String>,
    should_quit: bool,
}

impl<Row: ListRecord> BrowseApp<Row> {
    pub fn new(
        source: JsonFileSource<Row>,
        page_size: u32,
        nav: NavTable,
        session: Option<Session>,
    ) -> Self {
        let source = Rc::new(RefCell::new(source));
        let toast: ToastSlot = Rc::new(RefCell::new(None));
        let actions = row_actions(&source, &toast);

        let mut app = Self {
            source,
            query: QueryState::new(page_size),
            result: QueryResult::pending(),
            columns: Row::columns(),
            actions,
            dialog: DeleteConfirmation::new(),
            pending: None,
            toast,
            nav,
            session,
            selected: 0,
            search_input: None,
            should_quit: false,
        };
        app.reload();
        app
    }

    /// Main event loop for TUI rendering
    pub fn run(mut self) -> Result<()> {
        // Everything that can fail without touching the terminal goes first
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let mut terminal = enter_terminal()?;
        let result = runtime.block_on(self.event_loop(&mut terminal));

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            self.tick().await;

            while event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Wait one tick, or less if the pending delete settles first.
    async fn tick(&mut self) {
        let outcome = match self.pending.as_mut() {
            Some(pending) => tokio::select! {
                outcome = pending => Some(outcome),
                _ = tokio::time::sleep(TICK) => None,
            },
            None => {
                tokio::time::sleep(TICK).await;
                None
            }
        };

        if let Some(outcome) = outcome {
            self.pending = None;
            self.dialog.settle(outcome);
            self.reload();
        }
    }

    fn reload(&mut self) {
        self.result = load(&*self.source.borrow(), &mut self.query);
        if self.result.data.is_empty() && self.query.prev_page() {
            self.result = load(&*self.source.borrow(), &mut self.query);
        }
        self.selected = self
            .selected
            .min(self.result.data.len().saturating_sub(1));
    }

    fn selected_row(&self) -> Option<Row> {
        self.result.data.get(self.selected).cloned()
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if let Some(input) = self.search_input.as_mut() {
            match key.code {
                KeyCode::Enter => {
                    let text = std::mem::take(input);
                    self.search_input = None;
                    self.query.set_search(text);
                    self.selected = 0;
                    self.reload();
                }
                KeyCode::Esc => self.search_input = None,
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char(c) => input.push(c),
                _ => {}
            }
            return;
        }

        if self.dialog.is_open() {
            // Controls are disabled while the delete is in flight
            if self.dialog.controls_disabled() {
                return;
            }
            match key.code {
                KeyCode::Char('y') | KeyCode::Enter => self.confirm_delete(),
                KeyCode::Char('n') | KeyCode::Esc => {
                    self.dialog.cancel();
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.result.data.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::PageDown | KeyCode::Char('n') => {
                if self.query.next_page() {
                    self.selected = 0;
                    self.reload();
                }
            }
            KeyCode::Left | KeyCode::PageUp | KeyCode::Char('p') => {
                if self.query.prev_page() {
                    self.selected = 0;
                    self.reload();
                }
            }
            KeyCode::Char('/') => {
                self.search_input = Some(self.query.search().to_string());
            }
            KeyCode::Char('x') => {
                self.query.reset_filters();
                self.selected = 0;
                self.reload();
            }
            KeyCode::Char('r') => self.reload(),
            KeyCode::Char('e') => {
                if let Some(row) = self.selected_row()
                    && self.actions.edit(&row)
                {
                    self.reload();
                }
            }
            KeyCode::Char('d') => {
                if let Some(row) = self.selected_row() {
                    self.dialog.open_for(&self.actions, &row);
                }
            }
            _ => {}
        }
    }

    fn confirm_delete(&mut self) {
        let Some(row) = self
            .dialog
            .target()
            .and_then(|id| self.result.data.iter().find(|row| row.id() == id))
            .cloned()
        else {
            self.dialog.cancel();
            return;
        };
        self.pending = self.dialog.begin(&self.actions, &row);
        if self.pending.is_some() {
            // The list shows as loading until the delete settles and reloads
            self.result = std::mem::take(&mut self.result).refetching();
        }
    }

    fn screen(&self) -> BrowseScreenViewModel {
        let list = present_list(
            &self.query,
            &self.result,
            &self.columns,
            Some(&self.actions),
            None,
        );
        let toast = self.toast.borrow();
        let status_bar = present_status_bar(
            &self.query,
            &list,
            self.search_input.as_deref(),
            toast.as_ref().map(|t| (t.level, t.text.as_str())),
        );
        let confirm = present_confirm(&self.dialog, &self.result.data);

        present_browse_screen(
            &self.nav,
            Row::ROUTE,
            self.session.as_ref(),
            list,
            Some(self.selected),
            confirm,
            status_bar,
        )
    }

    fn draw(&self, f: &mut Frame) {
        let screen = self.screen();

        let chunks = Layout::vertical([
            Constraint::Length(3), // Breadcrumb
            Constraint::Min(5),    // Table
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

        f.render_widget(HeaderView::new(&screen), chunks[0]);
        f.render_widget(TableView::new(&screen.list, screen.selected), chunks[1]);
        f.render_widget(StatusBarView::new(&screen.status_bar), chunks[2]);

        if let Some(confirm) = &screen.confirm {
            f.render_widget(ConfirmView::new(confirm), chunks[1]);
        }
    }
}

/// Switch to raw mode and the alternate screen. A failure part way leaves
/// the terminal as it was found.
fn enter_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let entered = execute!(io::stdout(), EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));
    entered.map_err(|err| {
        restore_terminal();
        err.into()
    })
}

fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        tracing::debug!(error = %err, "could not leave raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        tracing::debug!(error = %err, "could not leave alternate screen");
    }
}

fn row_actions<Row: ListRecord>(
    source: &Rc<RefCell<JsonFileSource<Row>>>,
    toast: &ToastSlot,
) -> RowActions<'static, Row> {
    let edit_source = Rc::clone(source);
    let edit_toast = Rc::clone(toast);
    let delete_source = Rc::clone(source);
    let delete_toast = Rc::clone(toast);

    RowActions::<Row>::new()
        .with_edit(move |id, _row| {
            match edit_source.borrow_mut().update(id, Row::quick_edit) {
                Ok(change) => post(&edit_toast, StatusLevel::Success, format!("{} {}", id, change)),
                Err(err) => {
                    tracing::warn!(%id, error = %err, "edit failed");
                    post(&edit_toast, StatusLevel::Error, err.to_string());
                }
            }
        })
        .with_delete(move |id, _row| {
            let source = Rc::clone(&delete_source);
            let toast = Rc::clone(&delete_toast);
            let id = id.clone();
            async move {
                let outcome = delete_row(&source, &id).await;
                match &outcome {
                    Ok(()) => post(&toast, StatusLevel::Success, format!("Deleted {}", id)),
                    Err(err) => post(&toast, StatusLevel::Error, err.to_string()),
                }
                outcome
            }
            .boxed_local()
        })
}

/// Write the file without the row, then drop it from memory.
async fn delete_row<Row: ListRecord>(
    source: &RefCell<JsonFileSource<Row>>,
    id: &Row::Id,
) -> bizdash_core::Result<()> {
    let (path, body) = {
        let source = source.borrow();
        (source.path().to_path_buf(), source.encode_without(id)?)
    };
    tokio::fs::write(&path, body)
        .await
        .map_err(bizdash_types::Error::from)?;
    source.borrow_mut().remove(id)?;
    Ok(())
}
