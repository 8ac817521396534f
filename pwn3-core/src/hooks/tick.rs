//! Tick Hook
//!
//! Replaces the host's world tick. The host's own per-tick writes to the
//! speed fields have already happened by the time this runs, so whatever is
//! written here is what the host sees for the rest of the tick. Physics
//! (gravity, input integration) runs elsewhere and is not delegated to.

use crate::error::HostError;
use crate::host::{PlayerView, WorldView};
use crate::tunables::Tunables;

/// Push `tunables` into the world's active player.
///
/// # Arguments
/// * `world` - Freshly resolved world; never cached across ticks
/// * `tunables` - Snapshot of the tunables for this tick
///
/// # Errors
/// [`HostError::NoActivePlayer`] if nobody is in game. Nothing is written in
/// that case.
pub fn on_tick<W: WorldView>(world: &mut W, tunables: &Tunables) -> Result<(), HostError> {
    let mut player = world.active_player().ok_or(HostError::NoActivePlayer)?;

    player.set_walk_speed(tunables.walk_speed());
    player.set_jump_speed(tunables.jump_speed());

    if let Some(target) = tunables.freeze_target() {
        player.set_position(target);
    }

    Ok(())
}
