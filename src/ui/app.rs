use crate::config::{Config, ToastPosition};
use crate::error::ValidationError;
use crate::ui::jokes::{
    validate_joke_text, Joke, JokeIntent, JokeList, JokeReducer, ADDED_MESSAGE,
};
use crate::ui::mvi::Reducer;
use crate::ui::notification::Notification;
use crate::ui::toast::{ToastIntent, ToastReducer, ToastState};
use std::time::{Duration, Instant};

/// What the keyboard is currently driving.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    /// Moving through the list and rating jokes.
    Browse,
    /// Typing a new joke.
    Compose,
    /// Rewriting the text of an existing joke.
    Edit { id: u64 },
}

impl Mode {
    pub fn is_input(&self) -> bool {
        !matches!(self, Mode::Browse)
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores the new
/// state and evaluates to the reducer's effect.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {{
        let (state, effect) = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
        $self.$field = state;
        effect
    }};
}

/// State container for the joke list UI.
///
/// Owns the current snapshot and forwards every gesture to the reducer as a
/// single command. Notifications that come back are queued as toasts.
pub struct App {
    should_quit: bool,
    mode: Mode,
    /// Joke snapshot (MVI pattern).
    jokes: JokeList,
    selected: usize,
    draft: String,
    /// Toast queue (MVI pattern).
    toasts: ToastState,
    toast_duration: Duration,
    toast_position: ToastPosition,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            mode: Mode::Browse,
            jokes: config.initial_jokes(),
            selected: 0,
            draft: String::new(),
            toasts: ToastState::default(),
            toast_duration: config.toast_duration(),
            toast_position: config.toasts.position,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn jokes(&self) -> &JokeList {
        &self.jokes
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_joke(&self) -> Option<&Joke> {
        self.jokes.jokes().get(self.selected)
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Length of the draft in characters, as shown by the counter.
    pub fn draft_len(&self) -> usize {
        self.draft.chars().count()
    }

    pub fn toasts(&self) -> &ToastState {
        &self.toasts
    }

    pub fn toast_position(&self) -> ToastPosition {
        self.toast_position
    }

    /// Run one command through caller-side validation and the reducer.
    ///
    /// Returns the notification that was queued, if any. Empty text is
    /// dropped silently; over-long text is rejected with an error toast and
    /// never reaches the reducer.
    pub fn submit(&mut self, intent: JokeIntent, now: Instant) -> Option<Notification> {
        match self.try_submit(intent, now) {
            Ok(notification) => notification,
            Err(err) => self.reject(err, now),
        }
    }

    fn try_submit(
        &mut self,
        intent: JokeIntent,
        now: Instant,
    ) -> Result<Option<Notification>, ValidationError> {
        let intent = match intent {
            JokeIntent::AddJoke { text } => JokeIntent::AddJoke {
                text: validate_joke_text(&text)?,
            },
            JokeIntent::EditJoke { id, text } => JokeIntent::EditJoke {
                id,
                text: validate_joke_text(&text)?,
            },
            other => other,
        };

        let adding = matches!(intent, JokeIntent::AddJoke { .. });
        let before = self.jokes.len();
        let mut notification = self.dispatch(intent);
        if adding && self.jokes.len() > before {
            notification = Some(Notification::success(ADDED_MESSAGE));
        }

        if let Some(notification) = &notification {
            self.notify(notification.clone(), now);
        }
        Ok(notification)
    }

    fn dispatch(&mut self, intent: JokeIntent) -> Option<Notification> {
        let name = intent.name();
        if let JokeIntent::Unrecognized { command } = &intent {
            tracing::debug!(command = %command, "Ignoring unrecognized command");
        }

        let notification = dispatch_mvi!(self, jokes, JokeReducer, intent);
        self.clamp_selection();

        tracing::debug!(intent = name, jokes = self.jokes.len(), "Applied joke intent");
        notification
    }

    fn reject(&mut self, err: ValidationError, now: Instant) -> Option<Notification> {
        if err.is_silent() {
            return None;
        }
        tracing::info!(error = %err, "Rejected joke text");
        let notification = Notification::error(err.to_string());
        self.notify(notification.clone(), now);
        Some(notification)
    }

    /// Queue a toast that closes after the configured duration.
    pub fn notify(&mut self, notification: Notification, now: Instant) {
        tracing::info!(
            kind = notification.kind.label(),
            message = %notification.message,
            "Notification"
        );
        dispatch_mvi!(
            self,
            toasts,
            ToastReducer,
            ToastIntent::Push {
                notification,
                expires_at: now + self.toast_duration,
            }
        );
    }

    pub fn on_tick(&mut self, now: Instant) {
        if !self.toasts.is_empty() {
            dispatch_mvi!(self, toasts, ToastReducer, ToastIntent::Expire { now });
        }
    }

    pub fn dismiss_toasts(&mut self) {
        dispatch_mvi!(self, toasts, ToastReducer, ToastIntent::Clear);
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.jokes.is_empty() {
            self.selected = 0;
            return;
        }
        let last = self.jokes.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.jokes.len().saturating_sub(1));
    }

    pub fn upvote_selected(&mut self, now: Instant) {
        if let Some(id) = self.selected_joke().map(|joke| joke.id) {
            self.submit(JokeIntent::IncreaseRating { id }, now);
        }
    }

    pub fn downvote_selected(&mut self, now: Instant) {
        if let Some(id) = self.selected_joke().map(|joke| joke.id) {
            self.submit(JokeIntent::DecreaseRating { id }, now);
        }
    }

    pub fn delete_selected(&mut self, now: Instant) {
        if let Some(id) = self.selected_joke().map(|joke| joke.id) {
            self.submit(JokeIntent::DeleteJoke { id }, now);
        }
    }

    pub fn start_compose(&mut self) {
        self.mode = Mode::Compose;
        self.draft.clear();
    }

    /// Open the selected joke for editing with its text prefilled.
    pub fn start_edit(&mut self) {
        let Some((id, text)) = self
            .selected_joke()
            .map(|joke| (joke.id, joke.text.clone()))
        else {
            return;
        };
        self.draft = text;
        self.mode = Mode::Edit { id };
    }

    pub fn cancel_input(&mut self) {
        self.mode = Mode::Browse;
        self.draft.clear();
    }

    pub fn push_char(&mut self, ch: char) {
        if self.mode.is_input() && !ch.is_control() {
            self.draft.push(ch);
        }
    }

    /// Append pasted text. Line breaks become spaces.
    pub fn push_str(&mut self, text: &str) {
        if !self.mode.is_input() {
            return;
        }
        for ch in text.chars() {
            if ch == '\n' || ch == '\r' {
                self.draft.push(' ');
            } else if !ch.is_control() {
                self.draft.push(ch);
            }
        }
    }

    pub fn pop_char(&mut self) {
        if self.mode.is_input() {
            self.draft.pop();
        }
    }

    /// Submit the draft as an add or edit, depending on the mode.
    ///
    /// The draft is kept when validation rejects it, so the user can fix it.
    pub fn submit_draft(&mut self, now: Instant) {
        let intent = match self.mode {
            Mode::Browse => return,
            Mode::Compose => JokeIntent::AddJoke {
                text: self.draft.clone(),
            },
            Mode::Edit { id } => JokeIntent::EditJoke {
                id,
                text: self.draft.clone(),
            },
        };
        let adding = self.mode == Mode::Compose;

        match self.try_submit(intent, now) {
            Ok(_) => {
                if adding {
                    self.selected = self.jokes.len().saturating_sub(1);
                }
                self.cancel_input();
            }
            Err(err) => {
                self.reject(err, now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedJoke;
    use crate::ui::notification::NotificationKind;

    fn app_with(seeds: &[(&str, i64)]) -> App {
        let config = Config {
            jokes: seeds
                .iter()
                .map(|(text, rating)| SeedJoke::new(*text, *rating))
                .collect(),
            ..Config::default()
        };
        App::new(&config)
    }

    #[test]
    fn starts_with_configured_jokes() {
        let app = App::new(&Config::default());
        assert_eq!(app.jokes().len(), 9);
        assert_eq!(app.selected_joke().map(|j| j.id), Some(1));
    }

    #[test]
    fn move_selection_stays_in_bounds() {
        let mut app = app_with(&[("a", 0), ("b", 0)]);
        app.move_selection(-1);
        assert_eq!(app.selected(), 0);
        app.move_selection(5);
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn delete_last_moves_selection_up() {
        let mut app = app_with(&[("a", 0), ("b", 0)]);
        app.move_selection(1);
        app.delete_selected(Instant::now());
        assert_eq!(app.selected(), 0);
        assert_eq!(app.jokes().ids(), vec![1]);
    }

    #[test]
    fn downvote_past_floor_queues_info_toast() {
        let mut app = app_with(&[("cold", -5)]);
        app.downvote_selected(Instant::now());
        assert!(app.jokes().is_empty());
        let toast = app.toasts().latest().expect("toast queued");
        assert_eq!(toast.notification.kind, NotificationKind::Info);
    }

    #[test]
    fn compose_submit_adds_and_selects_new_joke() {
        let mut app = app_with(&[("a", 0)]);
        app.start_compose();
        app.push_str("  knock knock  ");
        app.submit_draft(Instant::now());

        assert_eq!(app.mode(), Mode::Browse);
        assert!(app.draft().is_empty());
        assert_eq!(app.selected_joke().map(|j| j.text.as_str()), Some("knock knock"));
        assert_eq!(
            app.toasts().latest().map(|t| t.notification.message.as_str()),
            Some(ADDED_MESSAGE)
        );
    }

    #[test]
    fn compose_blank_stays_open_without_toast() {
        let mut app = app_with(&[]);
        app.start_compose();
        app.push_char(' ');
        app.submit_draft(Instant::now());

        assert_eq!(app.mode(), Mode::Compose);
        assert!(app.toasts().is_empty());
        assert!(app.jokes().is_empty());
    }

    #[test]
    fn compose_too_long_keeps_draft_and_errors() {
        let mut app = app_with(&[]);
        app.start_compose();
        app.push_str(&"x".repeat(151));
        app.submit_draft(Instant::now());

        assert_eq!(app.mode(), Mode::Compose);
        assert_eq!(app.draft_len(), 151);
        assert!(app.jokes().is_empty());
        let toast = app.toasts().latest().expect("error toast");
        assert_eq!(toast.notification.kind, NotificationKind::Error);
        assert_eq!(toast.notification.message, "Joke cannot exceed 150 characters.");
    }

    #[test]
    fn edit_prefills_and_replaces_text() {
        let mut app = app_with(&[("old", 2)]);
        app.start_edit();
        assert_eq!(app.mode(), Mode::Edit { id: 1 });
        assert_eq!(app.draft(), "old");

        app.pop_char();
        app.pop_char();
        app.pop_char();
        app.push_str("new");
        app.submit_draft(Instant::now());

        assert_eq!(app.mode(), Mode::Browse);
        assert_eq!(app.jokes().get(1).map(|j| j.text.as_str()), Some("new"));
        assert_eq!(app.jokes().get(1).map(|j| j.rating), Some(2));
    }

    #[test]
    fn typing_ignored_while_browsing() {
        let mut app = app_with(&[("a", 0)]);
        app.push_char('x');
        app.push_str("paste");
        assert!(app.draft().is_empty());
    }

    #[test]
    fn tick_expires_toasts() {
        let mut app = app_with(&[("a", 0)]);
        let now = Instant::now();
        app.delete_selected(now);
        assert_eq!(app.toasts().len(), 1);

        app.on_tick(now + Duration::from_millis(1999));
        assert_eq!(app.toasts().len(), 1);
        app.on_tick(now + Duration::from_millis(2000));
        assert!(app.toasts().is_empty());
    }

    #[test]
    fn rating_ops_on_empty_list_are_noops() {
        let mut app = app_with(&[]);
        let now = Instant::now();
        app.upvote_selected(now);
        app.downvote_selected(now);
        app.delete_selected(now);
        app.start_edit();
        assert_eq!(app.mode(), Mode::Browse);
        assert!(app.toasts().is_empty());
    }
}
