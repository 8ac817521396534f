//! World handle over host memory.

use super::player::PlayerHandle;
use super::symbols::{next_symbol, HostMethods, GAME_WORLD};
use super::PWN3_LAYOUT;
use pwn3_core::{HostError, WorldView};
use std::ffi::c_void;
use std::ptr::NonNull;

/// Borrowed view of the host's active `ClientWorld`.
pub struct WorldHandle<'a> {
    world: NonNull<u8>,
    methods: &'a HostMethods,
}

impl<'a> WorldHandle<'a> {
    /// Resolve the host's active world through `GameWorld`.
    ///
    /// The symbol is looked up with next-module semantics and holds a pointer
    /// to the world, so one dereference yields the world itself. Call this on
    /// every tick; the result must not outlive the callback.
    pub fn resolve(methods: &'a HostMethods) -> Result<Self, HostError> {
        let slot = next_symbol(GAME_WORLD)?.cast::<*mut c_void>();
        // SAFETY: `GameWorld` is a pointer-sized global in the host.
        let world = unsafe { slot.as_ptr().read() };
        // SAFETY: the host keeps `GameWorld` null or pointing at a live world.
        unsafe { Self::from_raw(world, methods) }
    }

    /// Wrap a `ClientWorld*`.
    ///
    /// # Safety
    /// `world` must be null or point at a live `ClientWorld` of the supported
    /// build for the duration of `'a`.
    pub unsafe fn from_raw(world: *mut c_void, methods: &'a HostMethods) -> Result<Self, HostError> {
        let world = NonNull::new(world.cast::<u8>()).ok_or(HostError::NullWorld)?;
        Ok(Self { world, methods })
    }

    /// Raw `IPlayer*` held in `m_activePlayer`.
    fn active_interface(&self) -> *mut c_void {
        // SAFETY: layout contract; the field is a pointer.
        unsafe {
            self.world
                .as_ptr()
                .add(PWN3_LAYOUT.active_player)
                .cast::<*mut c_void>()
                .read()
        }
    }
}

impl WorldView for WorldHandle<'_> {
    type Player<'p> = PlayerHandle<'p> where Self: 'p;

    fn active_player(&mut self) -> Option<Self::Player<'_>> {
        // SAFETY: the world's active player outlives this borrow of the world.
        unsafe { PlayerHandle::from_interface(self.active_interface(), self.methods) }.ok()
    }
}
