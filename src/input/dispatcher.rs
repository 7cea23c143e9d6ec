use macroquad::prelude::*;
use crate::core::grid::cell_at;
use crate::state::ApplicationState;

/// Central input dispatcher that handles all user input for the frame
pub fn handle_input(state: &mut ApplicationState) {
    if is_key_pressed(KeyCode::R) {
        state.reshuffle();
    }

    if is_mouse_button_pressed(MouseButton::Left) {
        let mouse_pos = Vec2::from(mouse_position());
        if state.apply_click(mouse_pos).is_none() {
            log::trace!("ignored click on cell {:?}", cell_at(mouse_pos));
        }
    }
}
