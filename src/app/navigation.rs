//! Navigation methods for the App.

use std::sync::Arc;

use super::{App, AppMessage, DetailView, Screen};
use crate::models::DetailResolution;

impl App {
    /// Move selection up in the visible list.
    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down in the visible list.
    pub fn move_down(&mut self) {
        let len = self.visible().len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// Open the detail screen for the currently selected country.
    pub fn open_selected(&mut self) {
        let code = {
            let visible = self.visible();
            match visible.get(self.selected) {
                Some(country) => country.id.clone(),
                None => return,
            }
        };
        self.open_detail(code);
    }

    /// Navigate to a country's detail screen and issue its fetch.
    ///
    /// Each navigation is an independent top-level resolution: border
    /// links re-enter here, so a border loop just produces repeated
    /// independent fetches. The generation token keeps a slow stale
    /// response from overwriting a newer visit.
    pub fn open_detail(&mut self, code: String) {
        tracing::info!(code, "navigating to country detail");
        self.screen = Screen::Detail;
        self.detail = Some(DetailView::pending(code.clone()));
        let generation = self.next_detail_generation();
        self.mark_dirty();

        let client = Arc::clone(&self.client);
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            match client.resolve_detail(&code).await {
                Ok(resolution) => {
                    let _ = message_tx.send(AppMessage::DetailResolved {
                        generation,
                        resolution,
                    });
                }
                Err(e) => {
                    tracing::error!(code, error = %e, "detail fetch failed");
                    let _ = message_tx.send(AppMessage::DetailFailed {
                        generation,
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    /// Leave the detail or error screen for the list. The detail record is
    /// discarded, not cached.
    pub fn back_to_list(&mut self) {
        self.screen = Screen::List;
        self.detail = None;
        self.error_message = None;
        self.mark_dirty();
    }

    /// Select the previous border-country link.
    pub fn border_prev(&mut self) {
        if let Some(detail) = &mut self.detail {
            if detail.border_selected > 0 {
                detail.border_selected -= 1;
                self.mark_dirty();
            }
        }
    }

    /// Select the next border-country link.
    pub fn border_next(&mut self) {
        let len = self.border_count();
        if let Some(detail) = &mut self.detail {
            if len > 0 && detail.border_selected < len - 1 {
                detail.border_selected += 1;
                self.mark_dirty();
            }
        }
    }

    /// Follow the selected border link, re-entering the resolver.
    pub fn follow_selected_border(&mut self) {
        let code = match &self.detail {
            Some(detail) => match &detail.resolution {
                Some(DetailResolution::Found(record)) => record
                    .borders
                    .get(detail.border_selected)
                    .cloned(),
                _ => None,
            },
            None => None,
        };
        if let Some(code) = code {
            self.open_detail(code);
        }
    }

    fn border_count(&self) -> usize {
        match &self.detail {
            Some(detail) => match &detail.resolution {
                Some(DetailResolution::Found(record)) => record.borders.len(),
                _ => 0,
            },
            None => 0,
        }
    }
}
