//! Host Symbol Resolution
//!
//! Two kinds of lookup:
//!
//! - **Next-module lookup** for `GameWorld`. This library is preloaded in
//!   front of the game logic library, so the same name may resolve to us in
//!   our own module; `dlsym(RTLD_NEXT, ..)` skips it and finds the host's
//!   definition. Done on every tick.
//! - **Global lookup** for the host methods the hooks call (`GetPosition`,
//!   `SetPosition`, `GetPlayerName`). These are code addresses that never move,
//!   so they are resolved once through `libloading` and kept in
//!   [`HostMethods::global`].

use anyhow::{Context, Result};
use libloading::os::unix::Library;
use pwn3_core::{HostError, Vector3};
use std::ffi::{c_char, c_void, CStr};
use std::ptr::NonNull;
use std::sync::OnceLock;

/// `ClientWorld* GameWorld`, exported by the game logic library.
pub const GAME_WORLD: &CStr = c"GameWorld";

/// `Vector3 Actor::GetPosition()`
pub const ACTOR_GET_POSITION: &[u8] = b"_ZN5Actor11GetPositionEv\0";
/// `void Actor::SetPosition(const Vector3&)`
pub const ACTOR_SET_POSITION: &[u8] = b"_ZN5Actor11SetPositionERK7Vector3\0";
/// `const char* Player::GetPlayerName()`
pub const PLAYER_GET_NAME: &[u8] = b"_ZN6Player13GetPlayerNameEv\0";

pub type GetPositionFn = unsafe extern "C" fn(this: *mut c_void) -> Vector3;
pub type SetPositionFn = unsafe extern "C" fn(this: *mut c_void, position: *const Vector3);
pub type GetPlayerNameFn = unsafe extern "C" fn(this: *mut c_void) -> *const c_char;

/// Resolve `name` in the modules after this one in the linker's search order.
pub fn next_symbol(name: &CStr) -> Result<NonNull<c_void>, HostError> {
    // SAFETY: `name` is NUL-terminated and RTLD_NEXT is a valid pseudo-handle.
    let address = unsafe { libc::dlsym(libc::RTLD_NEXT, name.as_ptr()) };
    NonNull::new(address).ok_or_else(|| HostError::SymbolMissing {
        symbol: name.to_string_lossy().into_owned(),
    })
}

/// Host methods the hooks call on a player.
pub struct HostMethods {
    pub(crate) get_position: GetPositionFn,
    pub(crate) set_position: SetPositionFn,
    pub(crate) player_name: GetPlayerNameFn,
    /// Keeps the global-scope handle the symbols came from open.
    _library: Option<Library>,
}

static HOST_METHODS: OnceLock<HostMethods> = OnceLock::new();

impl HostMethods {
    /// Resolve every host method through the process's global scope.
    pub fn resolve() -> Result<Self> {
        let library = Library::this();

        // SAFETY: the signatures match the host's declarations for the
        // supported build; see the layout contract in `abi`.
        unsafe {
            let get_position: GetPositionFn = *library
                .get::<GetPositionFn>(ACTOR_GET_POSITION)
                .context("Host does not export Actor::GetPosition")?;
            let set_position: SetPositionFn = *library
                .get::<SetPositionFn>(ACTOR_SET_POSITION)
                .context("Host does not export Actor::SetPosition")?;
            let player_name: GetPlayerNameFn = *library
                .get::<GetPlayerNameFn>(PLAYER_GET_NAME)
                .context("Host does not export Player::GetPlayerName")?;

            Ok(Self {
                get_position,
                set_position,
                player_name,
                _library: Some(library),
            })
        }
    }

    /// Build from explicit function pointers instead of host symbols.
    pub fn from_fns(
        get_position: GetPositionFn,
        set_position: SetPositionFn,
        player_name: GetPlayerNameFn,
    ) -> Self {
        Self {
            get_position,
            set_position,
            player_name,
            _library: None,
        }
    }

    /// Process-wide methods, resolved on first use.
    pub fn global() -> Result<&'static HostMethods> {
        if let Some(methods) = HOST_METHODS.get() {
            return Ok(methods);
        }
        let resolved = Self::resolve()?;
        log::debug!("Resolved host player methods");
        Ok(HOST_METHODS.get_or_init(|| resolved))
    }
}

impl std::fmt::Debug for HostMethods {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostMethods")
            .field("get_position", &(self.get_position as *const c_void))
            .field("set_position", &(self.set_position as *const c_void))
            .field("player_name", &(self.player_name as *const c_void))
            .finish()
    }
}
