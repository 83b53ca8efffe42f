//! Screen to world mapping for a camera centred on the world origin.
//!
//! The world is y-up and always at least `min_width` x `min_height` units.
//! When the screen aspect ratio differs from the minimum world's, the world
//! grows along one axis instead of letterboxing.

use crate::joystick::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    min_width: f32,
    min_height: f32,
    screen_width: f32,
    screen_height: f32,
    world_width: f32,
    world_height: f32,
}

impl Viewport {
    pub fn extend(min_width: f32, min_height: f32) -> Self {
        Self {
            min_width,
            min_height,
            screen_width: min_width,
            screen_height: min_height,
            world_width: min_width,
            world_height: min_height,
        }
    }

    /// Recompute the visible world for a new screen size in pixels.
    pub fn resize(&mut self, screen_width: f32, screen_height: f32) {
        if screen_width <= 0.0 || screen_height <= 0.0 {
            // Minimised window
            self.world_width = self.min_width;
            self.world_height = self.min_height;
            return;
        }

        self.screen_width = screen_width;
        self.screen_height = screen_height;

        let screen_aspect = screen_width / screen_height;
        if screen_aspect > self.min_width / self.min_height {
            self.world_height = self.min_height;
            self.world_width = self.min_height * screen_aspect;
        } else {
            self.world_width = self.min_width;
            self.world_height = self.min_width / screen_aspect;
        }
    }

    /// Visible world size as (width, height).
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.world_width, self.world_height)
    }

    /// Map a pixel position (origin top-left, y down) into world space.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            (screen.x / self.screen_width - 0.5) * self.world_width,
            (0.5 - screen.y / self.screen_height) * self.world_height,
        )
    }

    /// Anchor that tucks a stick of `radius` into the bottom-left corner.
    pub fn bottom_left_anchor(&self, radius: f32) -> Vec2 {
        Vec2::new(
            -self.world_width / 2.0 + radius,
            -self.world_height / 2.0 + radius,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_aspect_keeps_min_world() {
        let mut viewport = Viewport::extend(640.0, 480.0);
        viewport.resize(1280.0, 960.0);
        assert_eq!(viewport.world_size(), Vec2::new(640.0, 480.0));
    }

    #[test]
    fn test_wide_screen_extends_width() {
        let mut viewport = Viewport::extend(640.0, 480.0);
        viewport.resize(1600.0, 900.0);
        let size = viewport.world_size();
        assert_eq!(size.y, 480.0);
        assert!((size.x - 853.333).abs() < 1e-2);
    }

    #[test]
    fn test_tall_screen_extends_height() {
        let mut viewport = Viewport::extend(640.0, 480.0);
        viewport.resize(600.0, 900.0);
        let size = viewport.world_size();
        assert_eq!(size.x, 640.0);
        assert!((size.y - 960.0).abs() < 1e-2);
    }

    #[test]
    fn test_screen_to_world_flips_y_around_centre() {
        let mut viewport = Viewport::extend(640.0, 480.0);
        viewport.resize(1280.0, 960.0);

        assert_eq!(viewport.screen_to_world(Vec2::new(640.0, 480.0)), Vec2::ZERO);
        assert_eq!(
            viewport.screen_to_world(Vec2::new(0.0, 0.0)),
            Vec2::new(-320.0, 240.0)
        );
        assert_eq!(
            viewport.screen_to_world(Vec2::new(1280.0, 960.0)),
            Vec2::new(320.0, -240.0)
        );
    }

    #[test]
    fn test_bottom_left_anchor() {
        let viewport = Viewport::extend(640.0, 480.0);
        assert_eq!(viewport.bottom_left_anchor(50.0), Vec2::new(-270.0, -190.0));
    }

    #[test]
    fn test_zero_size_screen_falls_back_to_min_world() {
        let mut viewport = Viewport::extend(640.0, 480.0);
        viewport.resize(1600.0, 900.0);
        viewport.resize(0.0, 0.0);
        assert_eq!(viewport.world_size(), Vec2::new(640.0, 480.0));
        assert!(viewport.screen_to_world(Vec2::new(10.0, 10.0)).is_finite());
    }
}
