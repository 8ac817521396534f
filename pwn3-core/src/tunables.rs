//! Tunables Store
//!
//! The four user-chosen values and the one piece of state the module owns.
//! Chat commands write them, the tick hook reads them.
//!
//! # Process-wide Instance
//!
//! The host drives both hooks from its main thread, so the lock below is never
//! contended. It exists so the store stays sound Rust regardless, and is
//! reached only through [`snapshot`] and [`update`].
//!
//! ```rust
//! use pwn3_core::tunables;
//!
//! tunables::update(|t| t.set_walk_speed(5.0));
//! assert_eq!(tunables::snapshot().walk_speed(), 5.0);
//! ```

use crate::math::Vector3;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Vertical offset added to the frozen position on every tick.
///
/// Counters one frame of host gravity plus velocity integration for this host
/// build. Calibrated, not derived from the frame time.
pub const GRAVITY_COMPENSATION: f32 = 60.0;

/// User-chosen values pushed into the active player every tick.
///
/// # Invariant
/// `frozen` implies `frozen_position` has been assigned at least once. The
/// only way to set `frozen` is [`Tunables::toggle_freeze`], which assigns the
/// position first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tunables {
    jump_speed: f32,
    walk_speed: f32,
    frozen: bool,
    frozen_position: Vector3,
}

impl Tunables {
    pub const DEFAULT: Tunables = Tunables {
        jump_speed: 1000.0,
        walk_speed: 10000.0,
        frozen: false,
        frozen_position: Vector3::ZERO,
    };

    pub const fn new() -> Self {
        Self::DEFAULT
    }

    #[inline]
    pub fn jump_speed(&self) -> f32 {
        self.jump_speed
    }

    #[inline]
    pub fn set_jump_speed(&mut self, speed: f32) {
        self.jump_speed = speed;
    }

    #[inline]
    pub fn walk_speed(&self) -> f32 {
        self.walk_speed
    }

    #[inline]
    pub fn set_walk_speed(&mut self, speed: f32) {
        self.walk_speed = speed;
    }

    #[inline]
    pub fn frozen(&self) -> bool {
        self.frozen
    }

    #[inline]
    pub fn frozen_position(&self) -> Vector3 {
        self.frozen_position
    }

    /// Flip freeze mode, capturing `at` as the frozen position.
    ///
    /// The capture happens on every toggle, leaving as well as entering. The
    /// value captured on leave is unused until the next entry.
    ///
    /// # Returns
    /// The new value of `frozen`.
    pub fn toggle_freeze(&mut self, at: Vector3) -> bool {
        self.frozen_position = at;
        self.frozen = !self.frozen;
        self.frozen
    }

    /// Where the tick hook puts a frozen player, or `None` when not frozen.
    pub fn freeze_target(&self) -> Option<Vector3> {
        self.frozen
            .then(|| self.frozen_position.raised(GRAVITY_COMPENSATION))
    }

    /// JSON rendering used for debug logging.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

impl Default for Tunables {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The process-wide tunables. Given defaults at load, never reinitialised.
static TUNABLES: Mutex<Tunables> = Mutex::new(Tunables::DEFAULT);

fn lock() -> MutexGuard<'static, Tunables> {
    // A panic while holding the lock cannot leave a half-written `Copy`
    // record behind, so poisoning is safe to ignore.
    TUNABLES.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Copy of the current process-wide tunables.
pub fn snapshot() -> Tunables {
    *lock()
}

/// Mutate the process-wide tunables in place.
pub fn update<R>(f: impl FnOnce(&mut Tunables) -> R) -> R {
    let mut guard = lock();
    f(&mut guard)
}
