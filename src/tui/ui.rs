use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::state::{App, LoadStatus};
use crate::tui::component::Component;
use crate::tui::components::{CountryList, Detail, Pager, TitleBar, pager};
use crate::tui::{InputMode, TuiState};

/// Screen regions, top to bottom.
pub struct Areas {
    pub title: Rect,
    pub search: Rect,
    pub list: Rect,
    pub pager: Rect,
    pub help: Rect,
}

pub fn areas(frame_area: Rect) -> Areas {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Min(0), Length(1), Length(1)]);
    let [title, search, list, pager, help] = layout.areas(frame_area);
    Areas {
        title,
        search,
        list,
        pager,
        help,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let full = frame.area();
    let areas = areas(full);

    TitleBar::new(
        app.catalog.len(),
        app.view.len(),
        app.sort_order,
        app.status_message.clone(),
        app.load_status == LoadStatus::Loaded,
    )
    .render(frame, areas.title);

    tui.search_box.focused = tui.input_mode == InputMode::Search && !app.is_detail_open();
    tui.search_box.render(frame, areas.search);

    CountryList::new(
        &mut tui.country_list,
        app.page_countries().collect(),
        &app.load_status,
        app.page,
        app.page_count(),
        spinner_frame,
    )
    .render(frame, areas.list);

    Pager::new(app.page, app.page_count()).render(frame, areas.pager);

    frame.render_widget(
        Line::styled(
            help_text(tui.input_mode, app.is_detail_open()),
            Style::default().fg(Color::DarkGray),
        ),
        areas.help,
    );

    // Overlay last so it sits on top
    if let Some(country) = app.selected_country() {
        Detail::new(&mut tui.detail, country).render(frame, full);
    }
}

fn help_text(mode: InputMode, detail_open: bool) -> &'static str {
    if detail_open {
        return " ↑↓ Scroll  Esc Close";
    }
    match mode {
        InputMode::Search => " Type to filter  Enter/Esc Done  Ctrl+S Sort  Ctrl+C Quit",
        InputMode::Browse => {
            " ↑↓ Move  Enter Details  ←→ Page  Home/End First/Last  / Search  s Sort  q Quit"
        }
    }
}

/// Row of the current page under a screen position, if any.
///
/// `list_offset` is the list widget's scroll offset; `rows` the number of
/// rows on the page.
pub fn hit_test_row(
    frame_area: Rect,
    column: u16,
    row: u16,
    list_offset: usize,
    rows: usize,
) -> Option<usize> {
    let list = areas(frame_area).list;
    let inner = Rect::new(
        list.x + 1,
        list.y + 1,
        list.width.saturating_sub(2),
        list.height.saturating_sub(2),
    );
    if !inner.contains(Position::new(column, row)) {
        return None;
    }
    let index = (row - inner.y) as usize + list_offset;
    (index < rows).then_some(index)
}

/// Page button under a screen position, if any.
pub fn hit_test_pager(
    frame_area: Rect,
    column: u16,
    row: u16,
    current: usize,
    total: usize,
) -> Option<usize> {
    let area = areas(frame_area).pager;
    if row != area.y || column < area.x {
        return None;
    }
    pager::page_at(current, total, column - area.x)
}

pub fn hit_test_search(frame_area: Rect, column: u16, row: u16) -> bool {
    areas(frame_area)
        .search
        .contains(Position::new(column, row))
}
