//! Application state
//!
//! All state transitions happen through the reducer (see `reducer.rs`).
//! The signup form's own state lives in `libstorefront`; this only tracks
//! what the shell around it needs.

use libstorefront::config::UiSection;
use libstorefront::SubmissionStatus;

use super::actions::{Focus, FormIntent};

/// Root application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// What receives keys
    pub focus: Focus,

    /// First visible line of the page body
    pub scroll: u16,

    /// Largest useful value of `scroll` for the current terminal size
    pub scroll_max: u16,

    /// Form status as last reported by the form's events
    pub form_status: SubmissionStatus,

    /// Handler call waiting to be forwarded to the form
    pub intent: Option<FormIntent>,

    /// Status bar state
    pub status: StatusBarState,

    /// Error overlay state
    pub error: Option<String>,

    /// UI configuration
    pub config: UiConfig,
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl UiConfig {
    /// Build from the `[ui]` config section, then apply environment overrides
    ///
    /// `NO_COLOR` or `STOREFRONT_NO_COLOR` force colors off;
    /// `STOREFRONT_TICK_MS` replaces the tick rate when it parses.
    pub fn from_section(section: &UiSection) -> Self {
        let colors_enabled = section.colors
            && std::env::var_os("NO_COLOR").is_none()
            && std::env::var_os("STOREFRONT_NO_COLOR").is_none();

        let tick_rate_ms = std::env::var("STOREFRONT_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(section.tick_rate_ms);

        Self {
            colors_enabled,
            tick_rate_ms,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::from_section(&UiSection::default())
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: UiConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Whether an overlay is swallowing keys
    pub fn overlay_open(&self) -> bool {
        self.help_visible || self.error.is_some()
    }

    /// Whether typed keys belong to the email field
    pub fn editing_email(&self) -> bool {
        self.focus == Focus::Email && !self.overlay_open()
    }

    /// Take the pending form intent, leaving none behind
    pub fn take_intent(&mut self) -> Option<FormIntent> {
        self.intent.take()
    }
}
