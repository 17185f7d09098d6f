use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use crate::coordinator::{CoordinatorPhase, SearchView};

impl App {
    /// Translate a key press into coordinator triggers
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
            }
            KeyCode::Char('r') if ctrl => {
                self.coordinator.on_reset();
            }
            // Single-line input: swallow the textarea's newline bindings
            KeyCode::Char('m') | KeyCode::Char('j') if ctrl => {}

            KeyCode::Esc => {
                // Close the dropdown or abandon a lookup before quitting
                if self.pane().is_open() || self.coordinator.phase() != CoordinatorPhase::Idle {
                    self.coordinator.on_dismiss();
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Down => {
                self.coordinator.view_mut().select_next();
            }
            KeyCode::Up => {
                self.coordinator.view_mut().select_previous();
            }
            KeyCode::Enter => match self.pane().selected_candidate().cloned() {
                Some(candidate) => self.coordinator.on_suggestion_picked(&candidate),
                None => self.coordinator.on_submit(),
            },
            KeyCode::Tab | KeyCode::BackTab => {}

            _ => {
                if self.coordinator.view_mut().textarea.input(key) {
                    let text = self.pane().query();
                    self.coordinator.on_input(&text, now);
                }
            }
        }

        // Any keystroke clears a one-off notice
        self.notice = None;
    }
}
