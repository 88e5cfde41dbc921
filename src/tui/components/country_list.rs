//! # Country List Component
//!
//! The rows of the current page: flag, official name, and the three-letter
//! code right-aligned. Also stands in for the whole list area while the
//! catalog is loading or after the load failed.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CountryListState` lives in `TuiState`
//! - `CountryList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::country::Country;
use crate::core::format::flag_emoji;
use crate::core::state::LoadStatus;
use crate::tui::event::TuiEvent;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Persistent state: which row of the current page is highlighted.
pub struct CountryListState {
    pub highlighted: usize,
    pub list_state: ListState,
}

impl CountryListState {
    pub fn new() -> Self {
        Self {
            highlighted: 0,
            list_state: ListState::default(),
        }
    }

    /// Move the highlight. `rows` is the number of rows on the current page.
    pub fn handle_event(&mut self, event: &TuiEvent, rows: usize) {
        if rows == 0 {
            return;
        }
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.highlighted = self.highlighted.saturating_sub(1);
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.highlighted = (self.highlighted + 1).min(rows - 1);
            }
            _ => {}
        }
    }

    pub fn highlight(&mut self, row: usize) {
        self.highlighted = row;
    }

    /// Keep the highlight on an existing row after the page changed.
    pub fn clamp(&mut self, rows: usize) {
        self.highlighted = self.highlighted.min(rows.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.highlighted = 0;
        *self.list_state.offset_mut() = 0;
    }
}

impl Default for CountryListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient render wrapper for the list area.
pub struct CountryList<'a> {
    state: &'a mut CountryListState,
    countries: Vec<&'a Country>,
    status: &'a LoadStatus,
    page: usize,
    page_count: usize,
    spinner_frame: usize,
}

impl<'a> CountryList<'a> {
    pub fn new(
        state: &'a mut CountryListState,
        countries: Vec<&'a Country>,
        status: &'a LoadStatus,
        page: usize,
        page_count: usize,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            countries,
            status,
            page,
            page_count,
            spinner_frame,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" Page {} of {} ", self.page, self.page_count.max(1)))
            .padding(Padding::horizontal(1));

        match self.status {
            LoadStatus::Pending => {
                let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
                self.render_message(frame, area, block, vec![Line::from(format!(
                    "{spinner} Loading countries..."
                ))]);
                return;
            }
            LoadStatus::Failed(reason) => {
                let lines = vec![
                    Line::from(Span::styled(
                        "failed to load countries",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        reason.clone(),
                        Style::default().fg(Color::DarkGray),
                    )),
                ];
                self.render_message(frame, area, block, lines);
                return;
            }
            LoadStatus::Loaded => {}
        }

        if self.countries.is_empty() {
            let message = if self.page_count == 0 {
                "No countries match.".to_string()
            } else {
                format!(
                    "Nothing on page {}. There are {} pages.",
                    self.page, self.page_count
                )
            };
            self.render_message(frame, area, block, vec![Line::from(message)]);
            return;
        }

        let inner_width = area.width.saturating_sub(4) as usize; // borders + padding
        let items: Vec<ListItem> = self
            .countries
            .iter()
            .map(|country| ListItem::new(row_line(country, inner_width)))
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

        self.state.clamp(self.countries.len());
        self.state.list_state.select(Some(self.state.highlighted));
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }

    fn render_message(&self, frame: &mut Frame, area: Rect, block: Block, lines: Vec<Line>) {
        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

/// `🇦🇱  Republic of Albania            ALB`
fn row_line(country: &Country, width: usize) -> Line<'static> {
    let flag = flag_emoji(&country.cca2).unwrap_or_else(|| "  ".to_string());
    let code = country.cca3.clone();

    // flag (2) + gap (2) + name + gap (2) + code
    let name_width = width.saturating_sub(2 + 2 + 2 + code.width());
    let name = truncate_to_width(country.official_name(), name_width);
    let padding = name_width.saturating_sub(name.width());

    Line::from(vec![
        Span::raw(flag),
        Span::raw("  "),
        Span::raw(name),
        Span::raw(" ".repeat(padding + 2)),
        Span::styled(code, Style::default().fg(Color::DarkGray)),
    ])
}

/// Truncate to at most `max_width` display columns, adding "..." if cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{country, numbered_countries};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(
        state: &mut CountryListState,
        countries: Vec<&Country>,
        status: &LoadStatus,
        page: usize,
        page_count: usize,
    ) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                CountryList::new(state, countries, status, page, page_count, 0).render(f, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_highlight_moves_within_page() {
        let mut state = CountryListState::new();
        state.handle_event(&TuiEvent::CursorUp, 5);
        assert_eq!(state.highlighted, 0);

        for _ in 0..10 {
            state.handle_event(&TuiEvent::CursorDown, 5);
        }
        assert_eq!(state.highlighted, 4);

        state.handle_event(&TuiEvent::CursorUp, 5);
        assert_eq!(state.highlighted, 3);
    }

    #[test]
    fn test_clamp_after_shorter_page() {
        let mut state = CountryListState::new();
        state.highlight(20);
        state.clamp(10);
        assert_eq!(state.highlighted, 9);
        state.clamp(0);
        assert_eq!(state.highlighted, 0);
    }

    #[test]
    fn test_renders_rows() {
        let countries = vec![country("Republic of Albania"), country("Republic of Zambia")];
        let mut state = CountryListState::new();
        let text = render_text(
            &mut state,
            countries.iter().collect(),
            &LoadStatus::Loaded,
            1,
            1,
        );

        assert!(text.contains("Republic of Albania"));
        assert!(text.contains("Republic of Zambia"));
        assert!(text.contains("REP"));
        assert!(text.contains("Page 1 of 1"));
        assert_eq!(state.list_state.selected(), Some(0));
    }

    #[test]
    fn test_loading_message() {
        let mut state = CountryListState::new();
        let text = render_text(&mut state, Vec::new(), &LoadStatus::Pending, 1, 0);
        assert!(text.contains("Loading countries..."));
    }

    #[test]
    fn test_failure_message() {
        let mut state = CountryListState::new();
        let status = LoadStatus::Failed("network error: refused".into());
        let text = render_text(&mut state, Vec::new(), &status, 1, 0);
        assert!(text.contains("failed to load countries"));
        assert!(text.contains("network error: refused"));
    }

    #[test]
    fn test_empty_page_messages() {
        let mut state = CountryListState::new();
        let text = render_text(&mut state, Vec::new(), &LoadStatus::Loaded, 1, 0);
        assert!(text.contains("No countries match."));

        let text = render_text(&mut state, Vec::new(), &LoadStatus::Loaded, 4, 2);
        assert!(text.contains("Nothing on page 4."));
    }

    #[test]
    fn test_highlight_clamped_to_rendered_rows() {
        let countries = numbered_countries(3);
        let mut state = CountryListState::new();
        state.highlight(24);
        render_text(&mut state, countries.iter().collect(), &LoadStatus::Loaded, 1, 1);
        assert_eq!(state.highlighted, 2);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Chad", 10), "Chad");
        assert_eq!(truncate_to_width("Republic of Chad", 10), "Republi...");
        assert_eq!(truncate_to_width("Česká republika", 8), "Česká...");
        assert_eq!(truncate_to_width("Chad", 2), "..");
    }
}
