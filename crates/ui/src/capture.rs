use bevy::prelude::*;
use bevy_egui::EguiContexts;

#[derive(Resource, Default, Clone, Copy, Debug)]
pub struct UiInputCaptureRes {
    /// True when egui wants to consume mouse/pointer input.
    pub pointer: bool,
    /// True when egui wants to consume keyboard input.
    pub keyboard: bool,
}

pub fn update_ui_input_capture(
    mut contexts: EguiContexts,
    mut capture: ResMut<UiInputCaptureRes>,
) {
    let ctx = match contexts.ctx_mut() {
        Ok(ctx) => ctx,
        Err(_) => {
            capture.pointer = false;
            capture.keyboard = false;
            return;
        }
    };

    // Hovering a panel counts as captured, so drags that start over the
    // story column never reach the orbit camera.
    capture.pointer = ctx.wants_pointer_input() || ctx.is_pointer_over_area();
    capture.keyboard = ctx.wants_keyboard_input();
}
