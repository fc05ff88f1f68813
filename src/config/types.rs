use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ui::jokes::JokeList;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub toasts: ToastConfig,
    /// Jokes on screen at startup, numbered from 1 in file order.
    #[serde(default = "default_jokes")]
    pub jokes: Vec<SeedJoke>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Interval between timer ticks in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Toast notification settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToastConfig {
    /// How long a toast stays on screen in milliseconds (default: 2000).
    #[serde(default = "default_auto_close_ms")]
    pub auto_close_ms: u64,
    /// Screen corner toasts stack in (default: top-right).
    #[serde(default)]
    pub position: ToastPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

/// A joke listed in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedJoke {
    pub text: String,
    #[serde(default)]
    pub rating: i64,
}

impl SeedJoke {
    pub fn new(text: impl Into<String>, rating: i64) -> Self {
        Self {
            text: text.into(),
            rating,
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_auto_close_ms() -> u64 {
    2000
}

fn default_jokes() -> Vec<SeedJoke> {
    vec![
        SeedJoke::new("I asked the librarian if the library had books on paranoia. She whispered, 'They're right behind you...'", 7),
        SeedJoke::new("Why don't skeletons fight each other? They don't have the guts.", 5),
        SeedJoke::new("I accidentally wore a red shirt to Target and now I work here.", 6),
        SeedJoke::new("I'm not arguing, I'm just explaining why I'm right... loudly and repeatedly.", 8),
        SeedJoke::new("Tried cooking last night. The fire alarm was so impressed it gave me a standing ovation.", 9),
        SeedJoke::new("I named my dog 'Five Miles' so I can say I walk Five Miles every day.", 4),
        SeedJoke::new("Autocorrect has become my worst enema.", 6),
        SeedJoke::new("My brain has too many tabs open. And one of them is playing music I can't find.", 8),
        SeedJoke::new("They said 'don't try this at home'... so I went to my friend's house.", 7),
    ]
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            auto_close_ms: default_auto_close_ms(),
            position: ToastPosition::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            toasts: ToastConfig::default(),
            jokes: default_jokes(),
        }
    }
}

impl Config {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toasts.auto_close_ms)
    }

    /// Snapshot of the configured jokes, trimmed and numbered from 1.
    pub fn initial_jokes(&self) -> JokeList {
        JokeList::from_seeds(
            self.jokes
                .iter()
                .map(|seed| (seed.text.trim().to_string(), seed.rating)),
        )
    }
}
