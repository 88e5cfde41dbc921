//! # Detail Overlay Component
//!
//! Centered overlay describing one country. Opened with Enter or a click on
//! a row, dismissed with Esc / Enter / q. Long native-name lists scroll.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DetailState` lives in `TuiState`
//! - `Detail` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::country::Country;
use crate::core::format::{
    alt_spellings, calling_code, flag_description, flag_emoji, flag_url, native_names,
};
use crate::tui::event::TuiEvent;

/// Persistent state for the overlay.
pub struct DetailState {
    pub scroll_state: ScrollViewState,
}

impl DetailState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
        }
    }

    /// Handle a key event, returning `DetailEvent::Close` if the overlay should close.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::Submit | TuiEvent::InputChar('q') => {
                self.scroll_state.scroll_to_top();
                Some(DetailEvent::Close)
            }
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                None
            }
            TuiEvent::PageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::PageDown => {
                self.scroll_state.scroll_page_down();
                None
            }
            _ => None,
        }
    }
}

impl Default for DetailState {
    fn default() -> Self {
        Self::new()
    }
}

pub enum DetailEvent {
    Close,
}

/// Transient render wrapper for the overlay.
pub struct Detail<'a> {
    state: &'a mut DetailState,
    country: &'a Country,
}

impl<'a> Detail<'a> {
    pub fn new(state: &'a mut DetailState, country: &'a Country) -> Self {
        Self { state, country }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 70, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let title = match flag_emoji(&self.country.cca2) {
            Some(flag) => format!(" {} {} ", flag, self.country.official_name()),
            None => format!(" {} ", self.country.official_name()),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title)
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" ↑↓ Scroll  Esc Close ").centered())
            .padding(Padding::horizontal(1));

        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let paragraph = Paragraph::new(detail_lines(self.country)).wrap(Wrap { trim: false });

        // Leave a column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let height = paragraph.line_count(content_width) as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, height));

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

fn detail_lines(country: &Country) -> Vec<Line<'static>> {
    let label = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let field = |name: &'static str, value: String| {
        Line::from(vec![Span::styled(name, label), Span::raw(value)])
    };

    let mut lines = vec![field("Flag: ", flag_url(country).to_string())];
    if let Some(description) = flag_description(country) {
        lines.push(Line::from(format!("  {description}")));
    }
    lines.extend([
        field("2-letter code: ", or_unknown(&country.cca2)),
        field("3-letter code: ", or_unknown(&country.cca3)),
        field("Calling codes: ", calling_code(&country.idd)),
        field("Alternative names: ", alt_spellings(country)),
        Line::from(Span::styled("Native names:", label)),
    ]);
    lines.extend(
        native_names(country)
            .into_iter()
            .map(|name| Line::from(format!("  {name}"))),
    );
    lines
}

fn or_unknown(value: &str) -> String {
    if value.is_empty() {
        crate::core::format::UNKNOWN.to_string()
    } else {
        value.to_string()
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

/// Whether a screen position falls inside the overlay drawn over `area`.
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    centered_rect(70, 70, area).contains(ratatui::layout::Position::new(column, row))
}
