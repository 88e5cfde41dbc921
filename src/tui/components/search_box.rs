//! # SearchBox Component
//!
//! Single-line filter input. Every edit emits `SearchEvent::Changed` so the
//! list filters on each keystroke.
//!
//! The buffer is internal state; `focused` is a prop from the TUI input mode.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Search by country name";

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The term changed; carries the full new term.
    Changed(String),
    /// Leave the search box (Enter, Esc, Down).
    Done,
}

pub struct SearchBox {
    pub buffer: String,
    pub focused: bool,
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: false,
        }
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::Changed(self.buffer.clone()))
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single line: newlines would never match a name
                self.buffer
                    .extend(text.chars().filter(|c| !c.is_control()));
                self.changed()
            }
            TuiEvent::Backspace => self.buffer.pop().and_then(|_| self.changed()),
            TuiEvent::ClearLine => {
                if self.buffer.is_empty() {
                    return None;
                }
                self.buffer.clear();
                self.changed()
            }
            TuiEvent::Submit | TuiEvent::Escape | TuiEvent::CursorDown => {
                Some(SearchEvent::Done)
            }
            _ => None,
        }
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .title(" Search ")
            .border_style(border_style);

        let paragraph = if self.buffer.is_empty() && !self.focused {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.buffer.as_str())
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            let inner_width = area.width.saturating_sub(2);
            let column = (self.buffer.width() as u16).min(inner_width.saturating_sub(1));
            frame.set_cursor_position((area.x + 1 + column, area.y + 1));
        }
    }
}
