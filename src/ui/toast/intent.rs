//! Intents for the toast queue.

use std::time::Instant;

use crate::ui::mvi::Intent;
use crate::ui::notification::Notification;

#[derive(Debug, Clone)]
pub enum ToastIntent {
    /// Show a notification until `expires_at`.
    Push {
        notification: Notification,
        expires_at: Instant,
    },

    /// Timer tick: drop everything that has expired by `now`.
    Expire { now: Instant },

    /// Drop a single toast.
    Dismiss { id: u64 },

    Clear,
}

impl Intent for ToastIntent {}
