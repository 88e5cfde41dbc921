//! # TitleBar Component
//!
//! Top status bar: catalog size, how many entries the search left,
//! the direction the next sort will apply, and any status message.
//!
//! Stateless: everything arrives as props.
//!
//! 1. **Filtered**: `"Country Catalog | 12 of 250 | Sort A→Z"`
//! 2. **Unfiltered**: `"Country Catalog | 250 countries | Sort A→Z"`
//! 3. **Not loaded**: `"Country Catalog | <status>"`

use crate::core::query::SortOrder;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub total: usize,
    pub shown: usize,
    pub next_sort: SortOrder,
    pub status_message: String,
    pub loaded: bool,
}

impl TitleBar {
    pub fn new(
        total: usize,
        shown: usize,
        next_sort: SortOrder,
        status_message: String,
        loaded: bool,
    ) -> Self {
        Self {
            total,
            shown,
            next_sort,
            status_message,
            loaded,
        }
    }

    fn text(&self) -> String {
        if !self.loaded {
            return format!("Country Catalog | {}", self.status_message);
        }
        let counts = if self.shown == self.total {
            format!("{} countries", self.total)
        } else {
            format!("{} of {}", self.shown, self.total)
        };
        format!("Country Catalog | {} | Sort {}", counts, self.next_sort.label())
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                self.text(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                title_bar.render(f, area);
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_unfiltered() {
        let mut title_bar =
            TitleBar::new(250, 250, SortOrder::Ascending, "250 countries".into(), true);
        let text = rendered(&mut title_bar);

        assert!(text.contains("Country Catalog"));
        assert!(text.contains("250 countries"));
        assert!(text.contains("Sort A→Z"));
    }

    #[test]
    fn test_title_bar_filtered() {
        let mut title_bar = TitleBar::new(250, 12, SortOrder::Descending, String::new(), true);
        let text = rendered(&mut title_bar);

        assert!(text.contains("12 of 250"));
        assert!(text.contains("Sort Z→A"));
    }

    #[test]
    fn test_title_bar_before_load() {
        let mut title_bar = TitleBar::new(
            0,
            0,
            SortOrder::Ascending,
            "failed to load countries".into(),
            false,
        );
        let text = rendered(&mut title_bar);

        assert!(text.contains("failed to load countries"));
        assert!(!text.contains("Sort"));
    }
}
