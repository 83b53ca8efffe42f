use macroquad::prelude::*;
use tracing::{debug, trace};
use virtual_joystick::joystick::{Vec2 as JoyVec2, VirtualStick};
use virtual_joystick::player::Player;
use virtual_joystick::viewport::Viewport;
use virtual_joystick::StickError;

use crate::pointer;

const THUMB_RADIUS: f32 = 20.0;
const PLAYER_SIZE: f32 = 24.0;

// Helper to convert our Vec2 into Macroquad's Vec2
fn to_mac_vec2(v: JoyVec2) -> Vec2 {
    Vec2::new(v.x, v.y)
}

#[derive(Debug, Clone)]
pub struct GameSettings {
    pub radius: f32,
    pub move_speed: f32,
    pub world_width: f32,
    pub world_height: f32,
}

pub struct GameState {
    stick: VirtualStick,
    player: Player,
    viewport: Viewport,
}

impl GameState {
    pub fn new(settings: &GameSettings) -> Result<Self, StickError> {
        let mut viewport = Viewport::extend(settings.world_width, settings.world_height);
        viewport.resize(screen_width(), screen_height());

        let anchor = viewport.bottom_left_anchor(settings.radius);
        let stick = VirtualStick::new(anchor.x, anchor.y, settings.radius)?;

        Ok(Self {
            stick,
            player: Player::new(JoyVec2::new(0.0, 100.0), settings.move_speed),
            viewport,
        })
    }

    pub fn update(&mut self, dt: f32) {
        self.viewport.resize(screen_width(), screen_height());

        // Keep the stick in the corner before it sees this frame's pointer
        let anchor = self.viewport.bottom_left_anchor(self.stick.radius());
        self.stick.reposition(anchor.x, anchor.y);

        let pointer = pointer::sample(&self.viewport);
        let was_pressed = self.stick.is_pressed();
        self.stick
            .update(pointer.position, pointer.just_active, pointer.active);

        match (was_pressed, self.stick.is_pressed()) {
            (false, true) => debug!(
                x = pointer.position.x,
                y = pointer.position.y,
                "stick pressed"
            ),
            (true, false) => debug!("stick released"),
            _ => {}
        }
        if self.stick.is_pressed() {
            trace!(
                angle = self.stick.angle_degrees(),
                horizontal = self.stick.horizontal_input(),
                vertical = self.stick.vertical_input(),
                "thumb"
            );
        }

        self.player.update(&self.stick, dt);
    }

    pub fn draw(&self) {
        clear_background(GRAY);

        let world = self.viewport.world_size();
        set_camera(&Camera2D {
            target: vec2(0.0, 0.0),
            zoom: vec2(2.0 / world.x, 2.0 / world.y),
            ..Default::default()
        });

        self.draw_player();
        self.draw_stick();

        set_default_camera();
    }

    fn draw_player(&self) {
        let pos = to_mac_vec2(self.player.position);
        let heading = self.player.rotation.to_radians();
        let forward = vec2(heading.cos(), heading.sin());
        let side = vec2(-forward.y, forward.x);

        let nose = pos + forward * PLAYER_SIZE;
        let back = pos - forward * PLAYER_SIZE * 0.6;
        let left = back + side * PLAYER_SIZE * 0.6;
        let right = back - side * PLAYER_SIZE * 0.6;

        draw_triangle(nose, left, right, Color::from_rgba(100, 200, 255, 255));
        draw_circle(pos.x, pos.y, 4.0, WHITE);
    }

    fn draw_stick(&self) {
        let anchor = to_mac_vec2(self.stick.anchor());
        let thumb = to_mac_vec2(self.stick.control_point());

        draw_circle(anchor.x, anchor.y, self.stick.radius(), BLACK);
        draw_circle(thumb.x, thumb.y, THUMB_RADIUS, WHITE);
    }
}
