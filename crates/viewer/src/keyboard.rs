//! Keyboard shortcut handling

use crate::shell::Action;

/// Map a key press (DOM `KeyboardEvent.key` names) to a shell action.
///
/// - `i` / `I`: toggle the product info panel
/// - `f` / `F`: toggle fullscreen
/// - `Escape`: close the info panel and leave fullscreen
///
/// Letter shortcuts are suppressed while a text field has focus so typing in
/// the search box does not trigger them. Escape always applies.
pub fn shortcut(key: &str, text_input_focused: bool) -> Option<Action> {
    if key == "Escape" {
        return Some(Action::Escape);
    }
    if text_input_focused {
        return None;
    }
    match key {
        "i" | "I" => Some(Action::ToggleInfoPanel),
        "f" | "F" => Some(Action::ToggleFullscreen),
        _ => None,
    }
}
