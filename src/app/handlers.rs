//! Keyboard handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Screen};

impl App {
    /// Handle a key press for the active screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global bindings first.
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => {
                    self.quit();
                    return;
                }
                KeyCode::Char('t') => {
                    self.toggle_theme();
                    return;
                }
                _ => {}
            }
        }

        match self.screen {
            Screen::List => self.handle_list_key(key),
            Screen::Detail => self.handle_detail_key(key),
            Screen::Error => self.handle_error_key(key),
        }
        self.mark_dirty();
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Enter => self.open_selected(),
            KeyCode::Tab => {
                self.region = self.region.next();
                self.reset_selection();
            }
            KeyCode::BackTab => {
                self.region = self.region.prev();
                self.reset_selection();
            }
            KeyCode::Backspace => {
                self.search.pop();
                self.reset_selection();
            }
            KeyCode::Char(c) => {
                self.search.push(c);
                self.reset_selection();
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => self.back_to_list(),
            KeyCode::Left => self.border_prev(),
            KeyCode::Right => self.border_next(),
            KeyCode::Enter => self.follow_selected_border(),
            _ => {}
        }
    }

    fn handle_error_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.back_to_list(),
            _ => {}
        }
    }
}
