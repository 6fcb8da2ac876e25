//! Transient notifications shown after user-triggered actions.

use serde::Serialize;

/// Maximum number of toasts visible at once; older ones are dropped first.
pub const MAX_TOASTS: usize = 4;

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// Neutral information.
    Info,
    /// Action completed.
    Success,
    /// Action failed.
    Error,
}

/// Toast payload rendered by the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Toast {
    /// Identifier used for dismissal.
    pub id: u64,
    /// Localised message.
    pub message: String,
    /// Visual variant.
    pub kind: ToastKind,
}

/// Bounded queue of visible toasts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast and return its identifier.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        if self.toasts.len() > MAX_TOASTS {
            let drain = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(0..drain);
        }
        id
    }

    /// Remove the toast with `id`; returns whether one was removed.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Visible toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Most recent toast.
    #[must_use]
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}
