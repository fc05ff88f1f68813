//! Reducer for the toast queue.

use std::convert::Infallible;

use crate::ui::mvi::Reducer;

use super::intent::ToastIntent;
use super::state::{Toast, ToastState, MAX_TOASTS};

pub struct ToastReducer;

impl Reducer for ToastReducer {
    type State = ToastState;
    type Intent = ToastIntent;
    type Effect = Infallible;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Option<Self::Effect>) {
        let next = match intent {
            ToastIntent::Push {
                notification,
                expires_at,
            } => {
                let ToastState {
                    mut toasts,
                    next_id,
                } = state;
                toasts.push(Toast {
                    id: next_id,
                    notification,
                    expires_at,
                });
                if toasts.len() > MAX_TOASTS {
                    let overflow = toasts.len() - MAX_TOASTS;
                    toasts.drain(..overflow);
                }
                ToastState {
                    toasts,
                    next_id: next_id.wrapping_add(1),
                }
            }

            ToastIntent::Expire { now } => {
                let ToastState {
                    mut toasts,
                    next_id,
                } = state;
                toasts.retain(|toast| toast.expires_at > now);
                ToastState { toasts, next_id }
            }

            ToastIntent::Dismiss { id } => {
                let ToastState {
                    mut toasts,
                    next_id,
                } = state;
                toasts.retain(|toast| toast.id != id);
                ToastState { toasts, next_id }
            }

            ToastIntent::Clear => ToastState {
                toasts: Vec::new(),
                next_id: state.next_id,
            },
        };
        (next, None)
    }
}
