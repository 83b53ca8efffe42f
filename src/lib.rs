//! Virtual analog joystick for touch and mouse input.
//!
//! [`joystick::VirtualStick`] turns a world-space pointer into clamped axes
//! and a facing angle. [`player::Player`] is a simple consumer of those axes,
//! and [`viewport::Viewport`] maps screen pixels into the world the stick
//! lives in.

pub mod error;
pub mod joystick;
pub mod player;
pub mod viewport;

pub use error::StickError;
pub use joystick::{StickState, Vec2, VirtualStick};
