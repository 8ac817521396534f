//! Host ABI View
//!
//! The minimum surface of the host's object graph the hooks need, expressed as
//! capability traits. `pwn3-hook` implements them over raw host memory at the
//! fixed offsets of one host build; tests implement them with a simulator.
//!
//! # Borrowing
//!
//! A player obtained from [`WorldView::active_player`] borrows the world and
//! is only valid for the duration of one hook invocation. Nothing here is
//! meant to be cached across callbacks.

use crate::math::Vector3;

/// The locally controlled player entity.
pub trait PlayerView {
    /// Overwrite the host's `walkingSpeed` field.
    fn set_walk_speed(&mut self, speed: f32);

    /// Overwrite the host's `jumpSpeed` field.
    fn set_jump_speed(&mut self, speed: f32);

    fn position(&self) -> Vector3;

    /// Move the player through the host's own position setter.
    fn set_position(&mut self, position: Vector3);

    /// Display name, used for the chat echo.
    fn name(&self) -> String;
}

/// The host's active world.
pub trait WorldView {
    type Player<'a>: PlayerView
    where
        Self: 'a;

    /// The currently controlled player, or `None` when nobody is in game.
    fn active_player(&mut self) -> Option<Self::Player<'_>>;
}

impl<P: PlayerView + ?Sized> PlayerView for &mut P {
    fn set_walk_speed(&mut self, speed: f32) {
        (**self).set_walk_speed(speed)
    }

    fn set_jump_speed(&mut self, speed: f32) {
        (**self).set_jump_speed(speed)
    }

    fn position(&self) -> Vector3 {
        (**self).position()
    }

    fn set_position(&mut self, position: Vector3) {
        (**self).set_position(position)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}
