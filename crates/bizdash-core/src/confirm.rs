//! Delete confirmation dialog state machine.
//!
//! ```text
//! Idle --open--> Confirming --accept--> Deleting --settle--> Idle
//!                     \--cancel--> Idle
//! ```
//!
//! `Deleting` is the only state in which the dialog's controls are disabled.
//! Leaving it is unconditional once the completion signal settles, whether
//! the delete succeeded or failed. There is no retry state.

use futures::future::LocalBoxFuture;
use std::cell::RefCell;

use bizdash_types::Identified;

use crate::Result;
use crate::actions::RowActions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmState<Id> {
    Idle,
    Confirming { target: Id },
    Deleting { target: Id },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation<Id> {
    state: ConfirmState<Id>,
}

impl<Id: Clone + PartialEq + std::fmt::Debug> DeleteConfirmation<Id> {
    pub fn new() -> Self {
        Self {
            state: ConfirmState::Idle,
        }
    }

    pub fn state(&self) -> &ConfirmState<Id> {
        &self.state
    }

    pub fn target(&self) -> Option<&Id> {
        match &self.state {
            ConfirmState::Idle => None,
            ConfirmState::Confirming { target } | ConfirmState::Deleting { target } => {
                Some(target)
            }
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, ConfirmState::Idle)
    }

    /// Busy indicator; also the only state with disabled controls.
    pub fn is_busy(&self) -> bool {
        matches!(self.state, ConfirmState::Deleting { .. })
    }

    pub fn controls_disabled(&self) -> bool {
        self.is_busy()
    }

    /// Prompt for `target`. Only possible from `Idle`.
    pub fn open(&mut self, target: Id) -> bool {
        if self.is_open() {
            return false;
        }
        tracing::debug!(?target, "delete confirmation opened");
        self.state = ConfirmState::Confirming { target };
        true
    }

    /// Open the prompt for a row whose delete button is present and enabled.
    pub fn open_for<Row>(&mut self, actions: &RowActions<'_, Row>, row: &Row) -> bool
    where
        Row: Identified<Id = Id>,
    {
        if !actions.can_delete() {
            return false;
        }
        self.open(row.id().clone())
    }

    /// Close the prompt without deleting. Ignored while deleting.
    pub fn cancel(&mut self) -> bool {
        match self.state {
            ConfirmState::Confirming { .. } => {
                self.state = ConfirmState::Idle;
                true
            }
            ConfirmState::Idle | ConfirmState::Deleting { .. } => false,
        }
    }

    /// Accept the prompt, moving to `Deleting`. Returns the confirmed target.
    pub fn accept(&mut self) -> Option<Id> {
        let ConfirmState::Confirming { target } = &self.state else {
            return None;
        };
        let target = target.clone();
        self.state = ConfirmState::Deleting {
            target: target.clone(),
        };
        Some(target)
    }

    /// Accept the prompt and invoke the row's delete callback.
    ///
    /// Returns the completion signal to await, after which [`settle`] must be
    /// called. Nothing happens unless the prompt is confirming this very row.
    /// If the delete callback is absent or disabled the dialog closes at once.
    ///
    /// [`settle`]: DeleteConfirmation::settle
    pub fn begin<Row>(
        &mut self,
        actions: &RowActions<'_, Row>,
        row: &Row,
    ) -> Option<LocalBoxFuture<'static, Result<()>>>
    where
        Row: Identified<Id = Id>,
    {
        match &self.state {
            ConfirmState::Confirming { target } if target == row.id() => {}
            ConfirmState::Confirming { target } => {
                tracing::warn!(?target, row = ?row.id(), "delete accepted for a different row");
                return None;
            }
            _ => return None,
        }

        self.accept()?;
        let pending = actions.delete(row);
        if pending.is_none() {
            self.state = ConfirmState::Idle;
        }
        pending
    }

    /// Leave `Deleting` regardless of the outcome.
    ///
    /// Failures are not reported from here; the delete callback owns error
    /// reporting.
    pub fn settle(&mut self, outcome: Result<()>) {
        let ConfirmState::Deleting { target } = &self.state else {
            return;
        };
        match outcome {
            Ok(()) => tracing::debug!(?target, "delete settled"),
            Err(err) => tracing::warn!(?target, error = %err, "delete failed; closing dialog"),
        }
        self.state = ConfirmState::Idle;
    }
}

impl<Id: Clone + PartialEq + std::fmt::Debug> Default for DeleteConfirmation<Id> {
    fn default() -> Self {
        Self::new()
    }
}

/// Accept a confirming dialog, await the delete, then close the dialog.
///
/// The dialog is never borrowed across the await, so other observers on the
/// same thread can read its state (e.g. to render the busy indicator).
pub async fn run_delete<Row>(
    dialog: &RefCell<DeleteConfirmation<Row::Id>>,
    actions: &RowActions<'_, Row>,
    row: &Row,
) where
    Row: Identified,
{
    let pending = dialog.borrow_mut().begin(actions, row);
    let Some(pending) = pending else {
        return;
    };
    let outcome = pending.await;
    dialog.borrow_mut().settle(outcome);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use futures::FutureExt;
    use std::time::Duration;
    use tokio::time::{Instant, sleep};

    #[derive(Debug)]
    struct Row {
        id: u32,
    }

    impl Identified for Row {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    fn slow_delete(result: Result<()>) -> RowActions<'static, Row> {
        let result = RefCell::new(Some(result));
        RowActions::<Row>::new().with_delete(move |_, _| {
            let outcome = result.borrow_mut().take().unwrap_or(Ok(()));
            async move {
                sleep(Duration::from_millis(100)).await;
                outcome
            }
            .boxed_local()
        })
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut dialog = DeleteConfirmation::new();
        assert!(dialog.open(3u32));
        assert!(!dialog.controls_disabled());

        assert!(dialog.cancel());
        assert_eq!(dialog.state(), &ConfirmState::Idle);
    }

    #[test]
    fn test_open_requires_idle() {
        let mut dialog = DeleteConfirmation::new();
        assert!(dialog.open(1u32));
        assert!(!dialog.open(2));
        assert_eq!(dialog.target(), Some(&1));
    }

    #[test]
    fn test_open_for_requires_enabled_delete() {
        let row = Row { id: 1 };
        let mut dialog = DeleteConfirmation::new();

        let no_delete = RowActions::<Row>::new().with_edit(|_, _| {});
        assert!(!dialog.open_for(&no_delete, &row));

        let disabled = slow_delete(Ok(())).disable_delete(true);
        assert!(!dialog.open_for(&disabled, &row));

        assert!(dialog.open_for(&slow_delete(Ok(())), &row));
    }

    #[test]
    fn test_cancel_ignored_while_deleting() {
        let mut dialog = DeleteConfirmation::new();
        dialog.open(5u32);
        assert_eq!(dialog.accept(), Some(5));

        assert!(!dialog.cancel());
        assert!(dialog.is_busy());
    }

    #[test]
    fn test_begin_for_other_row_does_nothing() {
        let actions = slow_delete(Ok(()));
        let mut dialog = DeleteConfirmation::new();
        dialog.open(1u32);

        assert!(dialog.begin(&actions, &Row { id: 2 }).is_none());
        assert_eq!(dialog.state(), &ConfirmState::Confirming { target: 1 });
    }

    #[tokio::test(start_paused = true)]
    async fn test_accept_disables_controls_until_resolved() {
        let row = Row { id: 1 };
        let actions = slow_delete(Ok(()));
        let dialog = RefCell::new(DeleteConfirmation::new());
        assert!(dialog.borrow_mut().open_for(&actions, &row));

        let start = Instant::now();
        let observer = async {
            sleep(Duration::from_millis(50)).await;
            assert!(dialog.borrow().controls_disabled());
            sleep(Duration::from_millis(49)).await;
            assert!(dialog.borrow().is_busy());
        };
        tokio::join!(run_delete(&dialog, &actions, &row), observer);

        assert!(start.elapsed() >= Duration::from_millis(100));
        assert_eq!(dialog.borrow().state(), &ConfirmState::Idle);
        assert!(!dialog.borrow().controls_disabled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_delete_still_closes_dialog() {
        let row = Row { id: 1 };
        let actions = slow_delete(Err(Error::Action("backend said no".to_string())));
        let dialog = RefCell::new(DeleteConfirmation::new());
        dialog.borrow_mut().open(1);

        let observer = async {
            sleep(Duration::from_millis(50)).await;
            assert!(dialog.borrow().controls_disabled());
        };
        tokio::join!(run_delete(&dialog, &actions, &row), observer);

        // The failure is swallowed: the dialog closes and the controls re-enable.
        assert_eq!(dialog.borrow().state(), &ConfirmState::Idle);
        assert!(!dialog.borrow().is_open());
        assert!(!dialog.borrow().controls_disabled());
    }

    #[tokio::test]
    async fn test_run_delete_without_confirmation_is_noop() {
        let row = Row { id: 1 };
        let calls = RefCell::new(0);
        let actions = RowActions::<Row>::new().with_delete(|_, _| {
            *calls.borrow_mut() += 1;
            async { Ok(()) }.boxed_local()
        });
        let dialog = RefCell::new(DeleteConfirmation::new());

        run_delete(&dialog, &actions, &row).await;

        assert_eq!(*calls.borrow(), 0);
        assert_eq!(dialog.borrow().state(), &ConfirmState::Idle);
    }
}
