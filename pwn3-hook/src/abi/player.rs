//! Player handle over host memory.

use super::symbols::HostMethods;
use super::PWN3_LAYOUT;
use pwn3_core::{HostError, PlayerView, Vector3};
use std::ffi::{c_void, CStr};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// Borrowed, non-owning view of the host's `Player`.
///
/// Valid for one hook invocation only. Speed writes go straight to the fixed
/// field offsets; position and name go through the host's own methods.
pub struct PlayerHandle<'a> {
    player: NonNull<u8>,
    methods: &'a HostMethods,
    _borrow: PhantomData<&'a mut ()>,
}

impl<'a> PlayerHandle<'a> {
    /// Wrap a `Player*`.
    ///
    /// # Safety
    /// `player` must be null or point at a live `Player` of the supported
    /// build, and stay valid for `'a`.
    pub unsafe fn from_raw(player: *mut c_void, methods: &'a HostMethods) -> Result<Self, HostError> {
        let player = NonNull::new(player.cast::<u8>()).ok_or(HostError::NullPlayer)?;
        Ok(Self {
            player,
            methods,
            _borrow: PhantomData,
        })
    }

    /// Wrap the `IPlayer*` stored in a world, stepping back to the `Player`.
    ///
    /// # Safety
    /// `iplayer` must be null or point at the `IPlayer` sub-object of a live
    /// `Player`, valid for `'a`.
    pub unsafe fn from_interface(
        iplayer: *mut c_void,
        methods: &'a HostMethods,
    ) -> Result<Self, HostError> {
        if iplayer.is_null() {
            return Err(HostError::NoActivePlayer);
        }
        // SAFETY: the IPlayer sub-object lives `iplayer_base` bytes into the
        // Player allocation.
        let player = unsafe { iplayer.cast::<u8>().sub(PWN3_LAYOUT.iplayer_base) };
        unsafe { Self::from_raw(player.cast(), methods) }
    }

    #[inline]
    fn this(&self) -> *mut c_void {
        self.player.as_ptr().cast()
    }

    /// # Safety
    /// `offset` must be the offset of an `f32` field of `Player`.
    #[inline]
    unsafe fn write_f32(&mut self, offset: usize, value: f32) {
        unsafe { self.player.as_ptr().add(offset).cast::<f32>().write(value) }
    }
}

impl PlayerView for PlayerHandle<'_> {
    fn set_walk_speed(&mut self, speed: f32) {
        // SAFETY: layout contract.
        unsafe { self.write_f32(PWN3_LAYOUT.walking_speed, speed) }
    }

    fn set_jump_speed(&mut self, speed: f32) {
        // SAFETY: layout contract.
        unsafe { self.write_f32(PWN3_LAYOUT.jump_speed, speed) }
    }

    fn position(&self) -> Vector3 {
        // SAFETY: `Player` starts with its `Actor` base, so `this` is a valid
        // `Actor*` for the host method.
        unsafe { (self.methods.get_position)(self.this()) }
    }

    fn set_position(&mut self, position: Vector3) {
        // SAFETY: as above; the host copies the vector before returning.
        unsafe { (self.methods.set_position)(self.this(), &position) }
    }

    fn name(&self) -> String {
        // SAFETY: the host returns null or a NUL-terminated string it owns.
        unsafe {
            let name = (self.methods.player_name)(self.this());
            if name.is_null() {
                return String::new();
            }
            CStr::from_ptr(name).to_string_lossy().into_owned()
        }
    }
}
