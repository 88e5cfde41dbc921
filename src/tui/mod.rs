//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Input Modes
//!
//! - **Browse**: arrows move the highlight, Enter opens the detail overlay,
//!   ←/→ and PgUp/PgDn change page. Typing any other character jumps into
//!   the search box and forwards the keystroke.
//! - **Search**: keystrokes edit the search term and filter on every change.
//!   Enter, Esc or ↓ go back to Browse.
//!
//! While the detail overlay is open it receives every event.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events, terminal resize,
//!   or a message from the loader task.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::source::{CatalogSource, FileSource, RestCountriesSource, SourceError};
use crate::tui::component::EventHandler;
use crate::tui::components::detail;
use crate::tui::components::{
    CountryListState, DetailEvent, DetailState, SearchBox, SearchEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Move through the list and pages.
    Browse,
    /// Edit the search term.
    Search,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_box: SearchBox,
    pub country_list: CountryListState,
    pub detail: DetailState,
    pub input_mode: InputMode,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_box: SearchBox::new(),
            country_list: CountryListState::new(),
            detail: DetailState::new(),
            input_mode: InputMode::Browse,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Build the catalog source the resolved config asks for.
pub fn build_source(config: &ResolvedConfig) -> Result<Arc<dyn CatalogSource>, SourceError> {
    match &config.catalog_file {
        Some(path) => Ok(Arc::new(FileSource::new(path.clone()))),
        None => Ok(Arc::new(RestCountriesSource::new(
            config.base_url.clone(),
            config.timeout,
        )?)),
    }
}

pub fn run(config: ResolvedConfig, source: Arc<dyn CatalogSource>) -> std::io::Result<()> {
    let mut app = App::new(config.reset_page_on_filter);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from the loader task
    let (tx, rx) = mpsc::channel();
    spawn_load(source, tx);

    let result = event_loop(
        &mut terminal,
        &mut app,
        &mut tui,
        &rx,
        poll_event_timeout,
        poll_event_immediate,
    );
    if let Err(e) = &result {
        warn!("Event loop failed: {}", e);
    }

    // Restore even when drawing failed
    info!("Shutting down");
    ratatui::restore();
    result
}

/// Draw, read input, apply loader results; until something asks to quit.
///
/// `poll_timeout` blocks for the first event of an iteration,
/// `poll_immediate` drains whatever else is pending.
fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tui: &mut TuiState,
    rx: &mpsc::Receiver<Action>,
    mut poll_timeout: impl FnMut(Duration) -> Option<TuiEvent>,
    mut poll_immediate: impl FnMut() -> Option<TuiEvent>,
) -> Result<(), B::Error> {
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain everything pending before the next draw
        let frame_area = terminal.get_frame().area();
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(&mut poll_immediate))
        {
            if handle_event(app, tui, event, frame_area) {
                return Ok(());
            }
        }

        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {}", action_name(&action));
            update(app, action);
            tui.country_list.clamp(app.page_range().len());
        }
    }
}

fn action_name(action: &Action) -> String {
    match action {
        // The full catalog is too noisy for the log
        Action::CatalogLoaded(countries) => format!("CatalogLoaded({} countries)", countries.len()),
        other => format!("{other:?}"),
    }
}

fn spawn_load(source: Arc<dyn CatalogSource>, tx: mpsc::Sender<Action>) {
    info!("Loading catalog from {}", source.name());
    tokio::spawn(async move {
        let action = match source.fetch_all().await {
            Ok(countries) => {
                info!("Fetched {} countries from {}", countries.len(), source.name());
                Action::CatalogLoaded(countries)
            }
            Err(e) => {
                warn!("Fetching from {} failed: {}", source.name(), e);
                Action::CatalogFailed(e.to_string())
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send catalog result: receiver dropped");
        }
    });
}

/// Run an action through the reducer and keep the list highlight valid.
/// Returns true when the app should quit.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> bool {
    let page_before = app.page;
    let effect = update(app, action);
    if app.page != page_before {
        tui.country_list.reset();
    } else {
        tui.country_list.clamp(app.page_range().len());
    }
    effect == Effect::Quit
}

fn search(app: &mut App, tui: &mut TuiState, event: &TuiEvent) {
    match tui.search_box.handle_event(event) {
        Some(SearchEvent::Changed(term)) => {
            dispatch(app, tui, Action::Search(term));
            tui.country_list.reset();
        }
        Some(SearchEvent::Done) => tui.input_mode = InputMode::Browse,
        None => {}
    }
}

fn page_action(event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::PageUp => Some(Action::PrevPage),
        TuiEvent::PageDown => Some(Action::NextPage),
        _ => None,
    }
}

/// Route one terminal event. Returns true when the app should quit.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent, frame_area: Rect) -> bool {
    match event {
        TuiEvent::ForceQuit => return dispatch(app, tui, Action::Quit),
        TuiEvent::Resize => return false,
        _ => {}
    }

    // The overlay swallows everything while open
    if app.is_detail_open() {
        let close = match event {
            TuiEvent::MouseClick(column, row) => !detail::contains(frame_area, column, row),
            _ => matches!(tui.detail.handle_event(&event), Some(DetailEvent::Close)),
        };
        if close {
            dispatch(app, tui, Action::CloseDetail);
        }
        return false;
    }

    let rows = app.page_range().len();

    match event {
        TuiEvent::ToggleSort => {
            dispatch(app, tui, Action::ToggleSort);
            tui.country_list.reset();
            return false;
        }
        TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
            tui.country_list.handle_event(&event, rows);
            return false;
        }
        TuiEvent::MouseClick(column, row) => {
            if ui::hit_test_search(frame_area, column, row) {
                tui.input_mode = InputMode::Search;
            } else if let Some(page) =
                ui::hit_test_pager(frame_area, column, row, app.page, app.page_count())
            {
                dispatch(app, tui, Action::GoToPage(page));
            } else if let Some(hit) = ui::hit_test_row(
                frame_area,
                column,
                row,
                tui.country_list.list_state.offset(),
                rows,
            ) {
                tui.country_list.highlight(hit);
                let position = app.page_range().start + hit;
                dispatch(app, tui, Action::Select(position));
            }
            return false;
        }
        _ => {}
    }

    match tui.input_mode {
        InputMode::Search => {
            if let Some(action) = page_action(&event) {
                dispatch(app, tui, action);
            } else {
                search(app, tui, &event);
            }
            false
        }
        InputMode::Browse => {
            if let Some(action) = page_action(&event) {
                return dispatch(app, tui, action);
            }
            match event {
                TuiEvent::CursorUp | TuiEvent::CursorDown => {
                    tui.country_list.handle_event(&event, rows);
                    false
                }
                TuiEvent::Submit if rows > 0 => {
                    let position = app.page_range().start + tui.country_list.highlighted;
                    dispatch(app, tui, Action::Select(position))
                }
                TuiEvent::CursorLeft => dispatch(app, tui, Action::PrevPage),
                TuiEvent::CursorRight => dispatch(app, tui, Action::NextPage),
                TuiEvent::Home => dispatch(app, tui, Action::FirstPage),
                TuiEvent::End => dispatch(app, tui, Action::LastPage),
                TuiEvent::InputChar('/') => {
                    tui.input_mode = InputMode::Search;
                    false
                }
                TuiEvent::InputChar('s') => {
                    dispatch(app, tui, Action::ToggleSort);
                    tui.country_list.reset();
                    false
                }
                TuiEvent::InputChar('q') | TuiEvent::Escape => dispatch(app, tui, Action::Quit),
                // Typing auto-switches to Search and forwards the event
                TuiEvent::InputChar(_)
                | TuiEvent::Paste(_)
                | TuiEvent::Backspace
                | TuiEvent::ClearLine => {
                    tui.input_mode = InputMode::Search;
                    search(app, tui, &event);
                    false
                }
                _ => false,
            }
        }
    }
}
