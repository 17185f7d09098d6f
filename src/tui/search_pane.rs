use std::collections::HashSet;

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

use crate::catalog::Candidate;
use crate::coordinator::SearchView;

/// Widget state the coordinator renders into
pub struct SearchPane {
    pub textarea: TextArea<'static>,
    suggestions: Vec<Candidate>,
    /// Highlighted dropdown row
    selected: Option<usize>,
    hidden: HashSet<String>,
}

impl SearchPane {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(Color::Cyan)),
        );

        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("Type a name...");

        Self {
            textarea,
            suggestions: Vec::new(),
            selected: None,
            hidden: HashSet::new(),
        }
    }

    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn suggestions(&self) -> &[Candidate] {
        &self.suggestions
    }

    pub fn is_open(&self) -> bool {
        !self.suggestions.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_candidate(&self) -> Option<&Candidate> {
        self.selected.and_then(|i| self.suggestions.get(i))
    }

    /// Move the highlight down, wrapping to the top
    pub fn select_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < self.suggestions.len() => i + 1,
            Some(_) => 0,
            None => 0,
        });
    }

    /// Move the highlight up, wrapping to the bottom
    pub fn select_previous(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let last = self.suggestions.len() - 1;
        self.selected = Some(match self.selected {
            Some(0) | None => last,
            Some(i) => i - 1,
        });
    }

    pub fn is_visible(&self, id: &str) -> bool {
        !self.hidden.contains(id)
    }
}

impl Default for SearchPane {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchView for SearchPane {
    fn query(&self) -> String {
        self.text().to_string()
    }

    fn set_query(&mut self, query: &str) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(query);
    }

    fn set_suggestions(&mut self, suggestions: &[Candidate]) {
        self.suggestions = suggestions.to_vec();
        self.selected = None;
    }

    fn set_item_visible(&mut self, id: &str, visible: bool) {
        if visible {
            self.hidden.remove(id);
        } else {
            self.hidden.insert(id.to_string());
        }
    }
}

#[cfg(test)]
#[path = "search_pane_tests.rs"]
mod search_pane_tests;
