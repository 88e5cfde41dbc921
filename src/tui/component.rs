//! Traits shared by the widgets in `components/`.

use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// Something that draws itself into a region of the screen.
///
/// Props arrive as struct fields. `render` takes `&mut self` because some
/// widgets (the search box) push the terminal cursor while drawing.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Turns raw terminal events into widget-level events.
pub trait EventHandler {
    /// What the widget reports back to the event loop.
    type Event;

    /// `None` means the event was ignored or changed nothing worth reporting.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
