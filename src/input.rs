use macroquad::prelude::*;

use flappy_evo::simulation::events::InputEvent;

/// Collects this frame's keyboard events. Escape quits; the window close button is
/// handled by the caller through `prevent_quit`.
pub fn poll_events() -> Vec<InputEvent> {
    let mut events = Vec::new();

    if is_key_pressed(KeyCode::Escape) || is_quit_requested() {
        events.push(InputEvent::Quit);
    }
    if is_key_pressed(KeyCode::Space) {
        events.push(InputEvent::JumpPressed);
    }
    if is_key_released(KeyCode::Space) {
        events.push(InputEvent::JumpReleased);
    }

    events
}
