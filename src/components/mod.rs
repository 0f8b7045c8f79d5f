pub mod detail_modal;
pub mod search_bar;

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// A focused panel: turns key events into actions and draws itself from
/// borrowed props. All state lives in `AppState`, never in components.
pub trait Component<A> {
    type Props<'a>;

    fn handle_key(&mut self, key: &KeyEvent, props: Self::Props<'_>) -> Vec<A>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}

pub use detail_modal::{DetailModal, DetailModalProps};
pub use search_bar::{SearchBar, SearchBarProps};
