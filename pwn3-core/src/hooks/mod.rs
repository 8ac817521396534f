//! Hook Logic
//!
//! The bodies of the two callbacks the host drives. Both are synchronous,
//! bounded by a handful of field accesses, and called on the host's main
//! thread only, never interleaved.
//!
//! - [`tick::on_tick`] runs as the host's per-tick world update and pushes the
//!   tunables into the active player.
//! - [`chat::on_chat`] runs for every chat line the local player submits and
//!   updates the tunables.

pub mod chat;
pub mod tick;

pub use chat::on_chat;
pub use tick::on_tick;
