//! Application state.
//!
//! `App` owns the in-memory country collection, the filter inputs, the
//! active screen and the theme. Async fetch results arrive over an
//! unbounded mpsc channel as [`AppMessage`]s and are applied by
//! [`App::apply_message`].

mod handlers;
mod messages;
mod navigation;

pub use messages::AppMessage;

use crate::api::RestCountriesClient;
use crate::models::{CountrySummary, DetailResolution};
use crate::pipeline::{self, RegionFilter};
use crate::theme::Theme;
use crate::traits::ThemeStore;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Which screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The filterable country list.
    #[default]
    List,
    /// A single country, parameterized by `App::detail`.
    Detail,
    /// A fetch failure; shows the failure's message text.
    Error,
}

/// State of the active detail visit. Created on navigation, discarded on
/// navigating away.
#[derive(Debug, Clone)]
pub struct DetailView {
    /// The identifier being resolved.
    pub code: String,
    /// True until the resolver answers.
    pub loading: bool,
    /// The resolver's answer: a full record or the not-found sentinel.
    pub resolution: Option<DetailResolution>,
    /// Selected border-country link, if any borders exist.
    pub border_selected: usize,
}

impl DetailView {
    fn pending(code: String) -> Self {
        Self {
            code,
            loading: true,
            resolution: None,
            border_selected: 0,
        }
    }
}

/// Top-level application state.
pub struct App {
    /// Full country collection, fetched once per session and never mutated.
    pub countries: Vec<CountrySummary>,
    /// True while the initial list fetch is in flight.
    pub loading: bool,
    /// Free-text search input.
    pub search: String,
    /// Region selector.
    pub region: RegionFilter,
    /// Selected index into the visible (filtered, sorted) list.
    pub selected: usize,
    /// First visible row of the list viewport.
    pub scroll_offset: usize,
    /// Active screen.
    pub screen: Screen,
    /// Failure text shown on the error screen.
    pub error_message: Option<String>,
    /// Active detail visit, present while `screen == Screen::Detail`.
    pub detail: Option<DetailView>,
    /// Current theme, read from the store once at startup.
    pub theme: Theme,
    /// API client shared with spawned fetch tasks.
    pub client: Arc<RestCountriesClient>,
    /// Sender handed to spawned fetch tasks.
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver taken by the event loop.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Set when the user asks to exit.
    pub should_quit: bool,
    /// Dirty flag for the draw loop.
    pub needs_redraw: bool,
    pub terminal_width: u16,
    pub terminal_height: u16,
    theme_store: Box<dyn ThemeStore>,
    /// Incremented per detail navigation; stale resolver results are dropped.
    detail_generation: u64,
}

impl App {
    /// Create the application state. Reads the persisted theme once.
    pub fn new(client: Arc<RestCountriesClient>, theme_store: Box<dyn ThemeStore>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let theme = theme_store.load().unwrap_or_default();

        Self {
            countries: Vec::new(),
            loading: false,
            search: String::new(),
            region: RegionFilter::All,
            selected: 0,
            scroll_offset: 0,
            screen: Screen::List,
            error_message: None,
            detail: None,
            theme,
            client,
            message_tx,
            message_rx: Some(message_rx),
            should_quit: false,
            needs_redraw: true,
            terminal_width: 80,
            terminal_height: 24,
            theme_store,
            detail_generation: 0,
        }
    }

    /// Kick off the one-per-session list fetch.
    pub fn initialize(&mut self) {
        self.loading = true;
        self.mark_dirty();

        let client = Arc::clone(&self.client);
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            match client.fetch_all().await {
                Ok(countries) => {
                    let _ = message_tx.send(AppMessage::CountriesLoaded(countries));
                }
                Err(e) => {
                    tracing::error!(error = %e, "list fetch failed");
                    let _ = message_tx.send(AppMessage::CountriesLoadFailed {
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    /// The visible subset of the collection for the current filters.
    pub fn visible(&self) -> Vec<&CountrySummary> {
        pipeline::visible_countries(&self.countries, self.region, &self.search)
    }

    /// Apply a message from an async operation.
    pub fn apply_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::CountriesLoaded(countries) => {
                self.countries = countries;
                self.loading = false;
                self.reset_selection();
            }
            AppMessage::CountriesLoadFailed { error } => {
                self.loading = false;
                self.error_message = Some(error);
                self.screen = Screen::Error;
            }
            AppMessage::DetailResolved {
                generation,
                resolution,
            } => {
                if generation != self.detail_generation {
                    tracing::debug!(generation, "discarding stale detail resolution");
                    return;
                }
                if let Some(detail) = &mut self.detail {
                    detail.loading = false;
                    detail.resolution = Some(resolution);
                    detail.border_selected = 0;
                }
            }
            AppMessage::DetailFailed { generation, error } => {
                if generation != self.detail_generation {
                    tracing::debug!(generation, "discarding stale detail failure");
                    return;
                }
                self.detail = None;
                self.error_message = Some(error);
                self.screen = Screen::Error;
            }
        }
        self.mark_dirty();
    }

    /// Flip the theme and persist the new choice.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        if let Err(e) = self.theme_store.save(self.theme) {
            tracing::warn!(error = %e, "failed to persist theme preference");
        }
        self.mark_dirty();
    }

    /// Reset list selection after a filter change.
    pub fn reset_selection(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    pub(crate) fn next_detail_generation(&mut self) -> u64 {
        self.detail_generation += 1;
        self.detail_generation
    }
}
