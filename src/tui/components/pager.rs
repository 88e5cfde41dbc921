//! # Pager Component
//!
//! One row of page buttons built from the windowed pager. The button
//! layout is computed separately from rendering so mouse clicks can be
//! hit-tested against exactly what was drawn.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::pagination::{PAGER_WINDOW, PagerSlot, pager_window};
use crate::tui::component::Component;

const LABEL: &str = "Pages ";
const GAP: &str = " … ";

/// A drawn slot and the columns it occupies, relative to the pager row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSpan {
    pub slot: PagerSlot,
    pub x: u16,
    pub width: u16,
}

/// Column layout of the pager row for the given position.
pub fn layout(current: usize, total: usize) -> Vec<SlotSpan> {
    let mut x = LABEL.len() as u16;
    pager_window(current, total, PAGER_WINDOW)
        .into_iter()
        .map(|slot| {
            let width = slot_text(slot, current).chars().count() as u16;
            let span = SlotSpan { slot, x, width };
            x += width;
            span
        })
        .collect()
}

/// Page number under column `x` of the pager row, if any.
pub fn page_at(current: usize, total: usize, x: u16) -> Option<usize> {
    layout(current, total)
        .into_iter()
        .find(|s| x >= s.x && x < s.x + s.width)
        .and_then(|s| match s.slot {
            PagerSlot::Page(n) => Some(n),
            PagerSlot::Gap => None,
        })
}

fn slot_text(slot: PagerSlot, current: usize) -> String {
    match slot {
        PagerSlot::Page(n) if n == current => format!("[{n}]"),
        PagerSlot::Page(n) => format!(" {n} "),
        PagerSlot::Gap => GAP.to_string(),
    }
}

pub struct Pager {
    pub current: usize,
    pub total: usize,
}

impl Pager {
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }
}

impl Component for Pager {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.total == 0 {
            return;
        }

        let mut spans = vec![Span::styled(LABEL, Style::default().fg(Color::DarkGray))];
        for span in layout(self.current, self.total) {
            let style = match span.slot {
                PagerSlot::Page(n) if n == self.current => Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                PagerSlot::Page(_) => Style::default().fg(Color::Gray),
                PagerSlot::Gap => Style::default().fg(Color::DarkGray),
            };
            spans.push(Span::styled(slot_text(span.slot, self.current), style));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(current: usize, total: usize) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                Pager::new(current, total).render(f, area);
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
    fn test_renders_every_page_for_small_catalogs() {
        let text = rendered(2, 3);
        assert!(text.starts_with("Pages  1 [2] 3 "));
    }

    #[test]
    fn test_renders_gaps_for_large_catalogs() {
        let text = rendered(10, 20);
        assert!(text.contains(" 1  … "));
        assert!(text.contains("[10]"));
        assert!(text.contains(" … "));
        assert!(text.contains(" 20 "));
        assert!(!text.contains(" 2 "));
    }

    #[test]
    fn test_nothing_rendered_without_pages() {
        assert!(rendered(1, 0).trim().is_empty());
    }

    #[test]
    fn test_layout_is_contiguous() {
        let spans = layout(5, 30);
        assert_eq!(spans[0].x, LABEL.len() as u16);
        for pair in spans.windows(2) {
            assert_eq!(pair[0].x + pair[0].width, pair[1].x);
        }
    }

    #[test]
    fn test_page_at_hits_buttons() {
        // "Pages " then " 1 " at 6..9, "[2]" at 9..12, " 3 " at 12..15
        assert_eq!(page_at(2, 3, 0), None);
        assert_eq!(page_at(2, 3, 6), Some(1));
        assert_eq!(page_at(2, 3, 8), Some(1));
        assert_eq!(page_at(2, 3, 10), Some(2));
        assert_eq!(page_at(2, 3, 14), Some(3));
        assert_eq!(page_at(2, 3, 15), None);
    }

    #[test]
    fn test_page_at_skips_gaps() {
        let spans = layout(10, 20);
        let gap = spans.iter().find(|s| s.slot == PagerSlot::Gap).unwrap();
        assert_eq!(page_at(10, 20, gap.x + 1), None);
    }
}
