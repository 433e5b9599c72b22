//! Loading / error / empty state selection.

use serde::{Deserialize, Serialize};

/// Fetch status reported by a data source alongside its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FetchFlags {
    pub is_loading: bool,
    pub is_error: bool,
    pub is_fetching: bool,
}

impl FetchFlags {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    pub fn error() -> Self {
        Self {
            is_error: true,
            ..Self::default()
        }
    }

    pub fn any(&self) -> bool {
        self.is_loading || self.is_error || self.is_fetching
    }
}

/// Severity used by renderers to pick colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderState {
    Loading,
    Error,
    Empty,
}

impl RenderState {
    pub fn message(&self) -> &'static str {
        match self {
            RenderState::Loading => "Loading...",
            RenderState::Error => "Something went wrong while loading this list.",
            RenderState::Empty => "No records found.",
        }
    }

    pub fn level(&self) -> StatusLevel {
        match self {
            RenderState::Loading => StatusLevel::Info,
            RenderState::Error => StatusLevel::Error,
            RenderState::Empty => StatusLevel::Warning,
        }
    }
}

/// Pick the render state for a list view.
///
/// Precedence is fixed: loading beats error beats empty, so a request that
/// is failing while a refetch is in flight still shows `Loading`.
pub fn present(is_loading: bool, is_error: bool, is_fetching: bool) -> RenderState {
    if is_loading || is_fetching {
        RenderState::Loading
    } else if is_error {
        RenderState::Error
    } else {
        RenderState::Empty
    }
}

pub fn present_flags(flags: FetchFlags) -> RenderState {
    present(flags.is_loading, flags.is_error, flags.is_fetching)
}
