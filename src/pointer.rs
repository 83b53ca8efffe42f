use macroquad::prelude::*;
use virtual_joystick::joystick::Vec2 as JoyVec2;
use virtual_joystick::viewport::Viewport;

/// One frame of primary-pointer input, in world space.
#[derive(Debug, Clone, Copy)]
pub struct PointerSnapshot {
    pub position: JoyVec2,
    pub just_active: bool,
    pub active: bool,
}

/// 🖱️ Read the primary pointer. Touches arrive here too, since macroquad
/// reports the first touch as the left mouse button.
pub fn sample(viewport: &Viewport) -> PointerSnapshot {
    let (x, y) = mouse_position();

    PointerSnapshot {
        position: viewport.screen_to_world(JoyVec2::new(x, y)),
        just_active: is_mouse_button_pressed(MouseButton::Left),
        active: is_mouse_button_down(MouseButton::Left),
    }
}
