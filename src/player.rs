use crate::joystick::{Vec2, VirtualStick};

#[derive(Debug)]
pub struct Player {
    pub position: Vec2,
    pub rotation: f32, // in degrees, same convention as the stick
    pub move_speed: f32,
}

impl Player {
    pub fn new(start_pos: Vec2, move_speed: f32) -> Self {
        Self {
            position: start_pos,
            rotation: 0.0,
            move_speed,
        }
    }

    /// 🚀 Move and turn according to the stick's current reading.
    pub fn update(&mut self, stick: &VirtualStick, dt: f32) {
        let input = stick.input();

        self.position += input * self.move_speed * dt;

        // Keep facing the last direction once the stick recentres
        if input.x != 0.0 || input.y != 0.0 {
            self.rotation = stick.angle_degrees();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_stick_leaves_player_alone() {
        let stick = VirtualStick::new(0.0, 0.0, 50.0).unwrap();
        let mut player = Player::new(Vec2::new(0.0, 100.0), 240.0);
        player.update(&stick, 1.0 / 60.0);
        assert_eq!(player.position, Vec2::new(0.0, 100.0));
        assert_eq!(player.rotation, 0.0);
    }

    #[test]
    fn test_moves_along_stick_and_faces_it() {
        let mut stick = VirtualStick::new(0.0, 0.0, 50.0).unwrap();
        stick.update(Vec2::new(0.0, 100.0), false, true);
        stick.update(Vec2::new(0.0, 25.0), true, true);

        let mut player = Player::new(Vec2::ZERO, 240.0);
        player.update(&stick, 0.5);
        assert!(player.position.x.abs() < 1e-4);
        assert!((player.position.y - 60.0).abs() < 1e-4);
        assert!((player.rotation - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_rotation_held_after_release() {
        let mut stick = VirtualStick::new(0.0, 0.0, 50.0).unwrap();
        let mut player = Player::new(Vec2::ZERO, 240.0);

        stick.update(Vec2::new(-20.0, 0.0), true, true);
        player.update(&stick, 0.1);
        assert!((player.rotation - 180.0).abs() < 1e-3);

        stick.update(Vec2::new(-20.0, 0.0), false, false);
        let before = player.position;
        player.update(&stick, 0.1);
        assert_eq!(player.position, before);
        assert!((player.rotation - 180.0).abs() < 1e-3);
    }
}
