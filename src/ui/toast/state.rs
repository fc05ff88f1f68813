//! State for the toast queue.

use std::time::Instant;

use crate::ui::mvi::UiState;
use crate::ui::notification::Notification;

/// Maximum number of toasts on screen. Older ones are dropped first.
pub const MAX_TOASTS: usize = 5;

/// A notification placed on screen until `expires_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
    pub expires_at: Instant,
}

/// Visible toasts, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub(super) toasts: Vec<Toast>,
    pub(super) next_id: u64,
}

impl UiState for ToastState {}

impl ToastState {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Most recent toast, if any.
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_default() {
        let state = ToastState::default();
        assert!(state.is_empty());
        assert!(state.latest().is_none());
    }
}
