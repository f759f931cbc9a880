use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::keymap::{KeyBinding, Keymap};
use crate::widgets::PageIndicatorWidget;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    /// Animate back to the middle page
    Center,
    /// Jump straight to a page, like clicking its dot
    SelectPage(usize),
    None,
}

/// Resolve a key press through the keymap. Digit keys double as direct page
/// jumps (1 is the first page), mirroring a click on the matching dot.
pub fn handle_key_event(key: KeyEvent, keymap: &Keymap) -> Action {
    let binding = KeyBinding::new(key.code, key.modifiers);
    if let Some(action) = keymap.get(&binding) {
        return *action;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::SelectPage(c as usize - '1' as usize)
        }
        _ => Action::None,
    }
}

/// Translate mouse input: the wheel pages, a left click on an indicator dot
/// selects that page.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    indicator_area: Option<Rect>,
    item_count: usize,
) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => Action::NextPage,
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => Action::PrevPage,
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(area) = indicator_area {
                if let Some(dot) =
                    PageIndicatorWidget::dot_hit(area, item_count, mouse.column, mouse.row)
                {
                    return Action::SelectPage(dot);
                }
            }
            Action::None
        }
        _ => Action::None,
    }
}
