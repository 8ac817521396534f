//! Host-facing overrides.
//!
//! These carry the Itanium-mangled names of the host methods they replace.
//! With this library preloaded, the dynamic linker binds the host's calls to
//! them instead of the originals. The original implementations are never
//! called back into.
//!
//! | Symbol | Replaces | Body |
//! |--------|----------|------|
//! | `_ZN5World4TickEf` | `World::Tick(float)` | tick hook |
//! | `_ZN6Player4ChatEPKc` | `Player::Chat(const char*)` | chat hook |
//! | `_ZN6Player7CanJumpEv` | `Player::CanJump()` | always `true` |

use crate::abi::{HostMethods, PlayerHandle, WorldHandle};
use crate::logging;
use crate::shield::HookSite;
use pwn3_core::commands::ChatCommand;
use pwn3_core::{hooks, tunables, PlayerView};
use std::ffi::{c_char, c_void, CStr};
use std::io::{self, Write};

static TICK: HookSite = HookSite::new("World::Tick");
static CHAT: HookSite = HookSite::new("Player::Chat");

/// `void World::Tick(float)`
///
/// Runs once per host simulation step. `this` and `delta_time` are unused:
/// the world is re-resolved from `GameWorld` every time.
///
/// # Safety
/// Called by the host on its main thread.
#[export_name = "_ZN5World4TickEf"]
pub unsafe extern "C" fn world_tick(_this: *mut c_void, _delta_time: f32) {
    logging::init();
    TICK.run(|| {
        let methods = HostMethods::global()?;
        let mut world = WorldHandle::resolve(methods)?;
        let snapshot = tunables::snapshot();
        hooks::on_tick(&mut world, &snapshot)?;
        Ok(())
    });
}

/// `void Player::Chat(const char*)`
///
/// # Safety
/// `this` must be null or a live `Player`; `message` null or NUL-terminated.
#[export_name = "_ZN6Player4ChatEPKc"]
pub unsafe extern "C" fn player_chat(this: *mut c_void, message: *const c_char) {
    logging::init();
    CHAT.run(|| {
        if this.is_null() {
            return Err(pwn3_core::HostError::NullPlayer.into());
        }
        if message.is_null() {
            return Ok(());
        }
        // SAFETY: the host passes a NUL-terminated chat line.
        let message = unsafe { CStr::from_ptr(message) }.to_bytes();

        let methods = HostMethods::global()?;
        // SAFETY: the host calls Chat on a live Player.
        let mut player = unsafe { PlayerHandle::from_raw(this, methods) }?;

        apply_chat(&mut player, message, &mut io::stdout().lock());
        Ok(())
    });
}

/// Run the chat hook against the stored tunables and store the result back.
///
/// Works on a copy so no lock is held while calling into the host.
pub fn apply_chat<P, O>(player: &mut P, message: &[u8], out: &mut O) -> Option<ChatCommand>
where
    P: PlayerView + ?Sized,
    O: Write + ?Sized,
{
    let mut updated = tunables::snapshot();
    let command = hooks::on_chat(player, message, &mut updated, out);
    tunables::update(|current| *current = updated);
    command
}

/// `bool Player::CanJump()`, neutralising the host's grounded check.
///
/// # Safety
/// Never dereferences `this`.
#[export_name = "_ZN6Player7CanJumpEv"]
pub unsafe extern "C" fn player_can_jump(_this: *mut c_void) -> bool {
    true
}
