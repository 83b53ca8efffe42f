use crate::error::StickError;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(&self, other: Vec2) -> f32 {
        (*self - other).length()
    }

    /// Angle in radians from +X, as `atan2(y, x)`.
    pub fn angle(&self) -> f32 {
        self.y.atan2(self.x)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, scalar: f32) -> Vec2 {
        Vec2 {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl std::ops::Div<f32> for Vec2 {
    type Output = Vec2;

    fn div(self, scalar: f32) -> Vec2 {
        Vec2 {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, other: Vec2) {
        self.x += other.x;
        self.y += other.y;
    }
}

/// Press state of a [`VirtualStick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StickState {
    #[default]
    Idle,
    Pressed,
}

impl StickState {
    /// Transition for one frame of pointer input.
    ///
    /// A press only engages when it starts inside the stick's circle, but once
    /// engaged it keeps tracking until the pointer goes inactive, wherever the
    /// pointer wanders in the meantime.
    pub fn next(self, just_active: bool, active: bool, inside_bounds: bool) -> StickState {
        if just_active && inside_bounds {
            StickState::Pressed
        } else if !active {
            StickState::Idle
        } else {
            self
        }
    }
}

/// 🕹️ Virtual analog stick driven by a single pointer.
///
/// The thumb (control point) never leaves the circle of `radius` around the
/// anchor. Axis values are the thumb's offset from the anchor divided by the
/// radius, so the input vector never exceeds unit length.
///
/// Angles are reported in degrees in `[0, 360)`, counter-clockwise from +X
/// in a y-up world.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualStick {
    anchor: Vec2,
    radius: f32,
    control_point: Vec2,
    state: StickState,
    horizontal_input: f32,
    vertical_input: f32,
}

impl VirtualStick {
    pub fn new(anchor_x: f32, anchor_y: f32, radius: f32) -> Result<Self, StickError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(StickError::InvalidRadius(radius));
        }
        let anchor = Vec2::new(anchor_x, anchor_y);
        if !anchor.is_finite() {
            return Err(StickError::InvalidAnchor {
                x: anchor_x,
                y: anchor_y,
            });
        }

        Ok(Self {
            anchor,
            radius,
            control_point: anchor,
            state: StickState::Idle,
            horizontal_input: 0.0,
            vertical_input: 0.0,
        })
    }

    /// 🖱️ Feed this frame's pointer snapshot. `pointer` is in the same space
    /// as the anchor.
    pub fn update(&mut self, pointer: Vec2, just_active: bool, active: bool) {
        let inside_bounds = pointer.distance(self.anchor) <= self.radius;

        self.state = self.state.next(just_active, active, inside_bounds);

        let anchor = self.anchor;
        let radius = self.radius;

        let (control_point, offset) = match self.state {
            StickState::Pressed if inside_bounds => {
                let offset = shrink_to_fit((pointer - anchor) / radius, is_within_unit);
                (pointer, offset)
            }
            StickState::Pressed => {
                // Project onto the rim along the ray from anchor to pointer
                let angle = (pointer - anchor).angle();
                let offset = shrink_to_fit(Vec2::new(angle.cos(), angle.sin()), |offset| {
                    is_within_unit(offset) && (anchor + offset * radius).distance(anchor) <= radius
                });
                (anchor + offset * radius, offset)
            }
            StickState::Idle => (anchor, Vec2::ZERO),
        };

        self.control_point = control_point;
        self.horizontal_input = offset.x;
        self.vertical_input = offset.y;
    }

    /// Move the anchor. Thumb, press state and axes are left as they are
    /// until the next [`update`](Self::update).
    pub fn reposition(&mut self, x: f32, y: f32) {
        self.anchor = Vec2::new(x, y);
    }

    pub fn horizontal_input(&self) -> f32 {
        self.horizontal_input
    }

    pub fn vertical_input(&self) -> f32 {
        self.vertical_input
    }

    /// 🎮 Both axes as a vector, each in -1.0..=1.0.
    pub fn input(&self) -> Vec2 {
        Vec2::new(self.horizontal_input, self.vertical_input)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    pub fn control_point(&self) -> Vec2 {
        self.control_point
    }

    pub fn state(&self) -> StickState {
        self.state
    }

    pub fn is_pressed(&self) -> bool {
        self.state == StickState::Pressed
    }

    /// Direction from anchor to thumb in degrees, `[0, 360)`. A centred
    /// thumb reports 0.
    pub fn angle_degrees(&self) -> f32 {
        let degrees = (self.control_point - self.anchor).angle().to_degrees();
        let wrapped = if degrees < 0.0 { degrees + 360.0 } else { degrees };
        // Tiny negative angles round up to exactly 360 in f32
        if wrapped >= 360.0 {
            0.0
        } else {
            wrapped
        }
    }
}

fn is_within_unit(offset: Vec2) -> bool {
    offset.x * offset.x + offset.y * offset.y <= 1.0
}

/// Scale `offset` towards zero in doubling steps until `fits` accepts it.
///
/// f32 rounding can leave `cos² + sin²` a hair above 1, and far from the
/// origin `anchor + offset * radius` can land just past the rim. `fits` must
/// accept the zero vector; anything that never fits (NaN) collapses to zero.
fn shrink_to_fit(mut offset: Vec2, fits: impl Fn(Vec2) -> bool) -> Vec2 {
    let mut step = f32::EPSILON;
    while !fits(offset) {
        if step >= 1.0 {
            return Vec2::ZERO;
        }
        offset = offset * (1.0 - step);
        step *= 2.0;
    }
    offset
}
