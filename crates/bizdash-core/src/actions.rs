//! Per-row edit/delete actions.

use futures::future::LocalBoxFuture;
use serde::Serialize;
use std::fmt;

use bizdash_types::Identified;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Edit,
    Delete,
}

impl ActionKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Edit => "Edit",
            ActionKind::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionButton {
    pub kind: ActionKind,
    pub disabled: bool,
}

/// Optional edit/delete callbacks for the rows of one list view.
///
/// Buttons exist only for the callbacks that were supplied. The disable
/// flags are independent of callback presence. Callbacks borrow the row for
/// the duration of the call only; the delete completion future must own
/// whatever it needs.
pub struct RowActions<'a, Row: Identified> {
    on_edit: Option<Box<dyn Fn(&Row::Id, &Row) + 'a>>,
    on_delete: Option<Box<dyn Fn(&Row::Id, &Row) -> LocalBoxFuture<'static, Result<()>> + 'a>>,
    pub disable_edit: bool,
    pub disable_delete: bool,
}

impl<'a, Row: Identified> RowActions<'a, Row> {
    pub fn new() -> Self {
        Self {
            on_edit: None,
            on_delete: None,
            disable_edit: false,
            disable_delete: false,
        }
    }

    pub fn with_edit<F>(mut self, on_edit: F) -> Self
    where
        F: Fn(&Row::Id, &Row) + 'a,
    {
        self.on_edit = Some(Box::new(on_edit));
        self
    }

    pub fn with_delete<F>(mut self, on_delete: F) -> Self
    where
        F: Fn(&Row::Id, &Row) -> LocalBoxFuture<'static, Result<()>> + 'a,
    {
        self.on_delete = Some(Box::new(on_delete));
        self
    }

    pub fn disable_edit(mut self, disabled: bool) -> Self {
        self.disable_edit = disabled;
        self
    }

    pub fn disable_delete(mut self, disabled: bool) -> Self {
        self.disable_delete = disabled;
        self
    }

    pub fn has_edit(&self) -> bool {
        self.on_edit.is_some()
    }

    pub fn has_delete(&self) -> bool {
        self.on_delete.is_some()
    }

    pub fn can_edit(&self) -> bool {
        self.has_edit() && !self.disable_edit
    }

    pub fn can_delete(&self) -> bool {
        self.has_delete() && !self.disable_delete
    }

    /// Zero, one or two buttons, edit first.
    pub fn buttons(&self) -> Vec<ActionButton> {
        let mut buttons = Vec::with_capacity(2);
        if self.has_edit() {
            buttons.push(ActionButton {
                kind: ActionKind::Edit,
                disabled: self.disable_edit,
            });
        }
        if self.has_delete() {
            buttons.push(ActionButton {
                kind: ActionKind::Delete,
                disabled: self.disable_delete,
            });
        }
        buttons
    }

    /// Invoke the edit callback. Returns false when absent or disabled.
    pub fn edit(&self, row: &Row) -> bool {
        match &self.on_edit {
            Some(on_edit) if !self.disable_edit => {
                on_edit(row.id(), row);
                true
            }
            _ => false,
        }
    }

    /// Invoke the delete callback and hand back its completion signal.
    ///
    /// Callers that want a confirmation step go through
    /// [`DeleteConfirmation`](crate::confirm::DeleteConfirmation) instead.
    pub fn delete(&self, row: &Row) -> Option<LocalBoxFuture<'static, Result<()>>> {
        match &self.on_delete {
            Some(on_delete) if !self.disable_delete => Some(on_delete(row.id(), row)),
            _ => None,
        }
    }
}

impl<Row: Identified> Default for RowActions<'_, Row> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Row: Identified> fmt::Debug for RowActions<'_, Row> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowActions")
            .field("on_edit", &self.has_edit())
            .field("on_delete", &self.has_delete())
            .field("disable_edit", &self.disable_edit)
            .field("disable_delete", &self.disable_delete)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;
    use std::cell::RefCell;

    struct Row {
        id: u32,
        name: &'static str,
    }

    impl Identified for Row {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    #[test]
    fn test_buttons_follow_callback_presence() {
        let none = RowActions::<Row>::new();
        assert!(none.buttons().is_empty());

        let edit_only = RowActions::<Row>::new().with_edit(|_, _| {});
        assert_eq!(
            edit_only.buttons(),
            vec![ActionButton {
                kind: ActionKind::Edit,
                disabled: false
            }]
        );

        let both = RowActions::<Row>::new()
            .with_edit(|_, _| {})
            .with_delete(|_, _| async { Ok(()) }.boxed_local());
        let kinds: Vec<ActionKind> = both.buttons().iter().map(|b| b.kind).collect();
        assert_eq!(kinds, vec![ActionKind::Edit, ActionKind::Delete]);
    }

    #[test]
    fn test_disable_flags_do_not_remove_buttons() {
        let actions = RowActions::<Row>::new()
            .with_delete(|_, _| async { Ok(()) }.boxed_local())
            .disable_edit(true)
            .disable_delete(true);

        let buttons = actions.buttons();
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].kind, ActionKind::Delete);
        assert!(buttons[0].disabled);
    }

    #[test]
    fn test_edit_receives_identity_and_row() {
        let seen = RefCell::new(Vec::new());
        let actions = RowActions::<Row>::new().with_edit(|id, row| {
            seen.borrow_mut().push((*id, row.name));
        });

        let row = Row { id: 9, name: "Nine" };
        assert!(actions.edit(&row));
        assert_eq!(seen.borrow().as_slice(), &[(9, "Nine")]);
    }

    #[test]
    fn test_disabled_edit_is_not_invoked() {
        let calls = RefCell::new(0);
        let actions = RowActions::<Row>::new()
            .with_edit(|_, _| *calls.borrow_mut() += 1)
            .disable_edit(true);

        assert!(!actions.edit(&Row { id: 1, name: "A" }));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_delete_absent_yields_no_future() {
        let actions = RowActions::<Row>::new().with_edit(|_, _| {});
        assert!(actions.delete(&Row { id: 1, name: "A" }).is_none());
    }
}
