//! Screen rendering
//!
//! Input box on top, card grid below, status line at the bottom, and the
//! suggestion dropdown drawn last so it overlays the grid.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::app::App;
use crate::coordinator::CoordinatorPhase;
use crate::widgets::popup;

const INPUT_HEIGHT: u16 = 3;
const CARD_WIDTH: u16 = 24;
const CARD_HEIGHT: u16 = 3;
const DROPDOWN_MIN_WIDTH: u16 = 20;
const DROPDOWN_BORDER: u16 = 2;
const DROPDOWN_OFFSET_X: u16 = 1;

impl App {
    pub fn render(&self, frame: &mut Frame) {
        let [input_area, grid_area, status_area] = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(&self.pane().textarea, input_area);
        self.render_grid(frame, grid_area);
        self.render_status(frame, status_area);
        self.render_dropdown(frame, input_area);
    }

    fn render_grid(&self, frame: &mut Frame, area: Rect) {
        let items = self.visible_items();

        if items.is_empty() {
            let message = Paragraph::new("No cards match")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(message, popup::inset_rect(area, 1, 1));
            return;
        }

        let columns = (area.width / CARD_WIDTH).max(1);
        let rows = area.height / CARD_HEIGHT;
        let capacity = usize::from(columns) * usize::from(rows);

        for (index, item) in items.iter().take(capacity).enumerate() {
            let column = (index % usize::from(columns)) as u16;
            let row = (index / usize::from(columns)) as u16;
            let card_area = Rect {
                x: area.x + column * CARD_WIDTH,
                y: area.y + row * CARD_HEIGHT,
                width: CARD_WIDTH.min(area.width),
                height: CARD_HEIGHT,
            };

            let inner_width = usize::from(card_area.width.saturating_sub(2));
            let card = Paragraph::new(truncate_to_width(&item.name, inner_width)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            frame.render_widget(card, card_area);
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let coordinator = &self.coordinator;
        let phase_color = match coordinator.phase() {
            CoordinatorPhase::Idle => Color::DarkGray,
            CoordinatorPhase::Pending | CoordinatorPhase::Fetching => Color::Yellow,
            CoordinatorPhase::Displaying => Color::Green,
            CoordinatorPhase::Suppressed => Color::Red,
        };

        let mut spans = vec![
            Span::styled(
                format!(" {} ", coordinator.phase()),
                Style::default().fg(phase_color),
            ),
            Span::raw(format!(
                "| {}/{} cards ",
                coordinator.visible_count(),
                coordinator.items().len()
            )),
        ];

        match &self.notice {
            Some(notice) => spans.push(Span::styled(
                format!("| {}", notice),
                Style::default().fg(Color::Yellow),
            )),
            None => spans.push(Span::styled(
                "| Enter: pick/submit  Esc: close/quit  Ctrl+R: reset",
                Style::default().fg(Color::DarkGray),
            )),
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_dropdown(&self, frame: &mut Frame, input_area: Rect) {
        let pane = self.pane();
        let suggestions = pane.suggestions();
        if suggestions.is_empty() {
            return;
        }

        let text_width = suggestions
            .iter()
            .map(|candidate| candidate.name.width())
            .max()
            .unwrap_or(0);
        let width = u16::try_from(text_width)
            .unwrap_or(u16::MAX)
            .saturating_add(DROPDOWN_BORDER + 2)
            .max(DROPDOWN_MIN_WIDTH);
        let height = u16::try_from(suggestions.len())
            .unwrap_or(u16::MAX)
            .saturating_add(DROPDOWN_BORDER);

        let area =
            popup::popup_below_anchor(input_area, frame.area(), width, height, DROPDOWN_OFFSET_X);
        if area.height <= DROPDOWN_BORDER {
            return;
        }
        popup::clear_area(frame, area);

        let inner_width = usize::from(area.width.saturating_sub(DROPDOWN_BORDER));
        let rows: Vec<ListItem> = suggestions
            .iter()
            .map(|candidate| ListItem::new(truncate_to_width(&candidate.name, inner_width)))
            .collect();

        let list = List::new(rows)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Cyan)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            );

        let mut state = ListState::default().with_selected(pane.selected());
        frame.render_stateful_widget(list, area, &mut state);
    }
}

/// Cut `text` to at most `max_width` display columns, marking the cut with an ellipsis
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut truncated = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width + 1 > max_width {
            break;
        }
        truncated.push(ch);
        used += ch_width;
    }
    truncated.push('…');
    truncated
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
