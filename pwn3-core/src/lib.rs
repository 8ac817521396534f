//! Pwn Adventure 3 Trainer Core
//!
//! Host-agnostic half of the trainer. Everything in here works against the
//! [`host::PlayerView`] and [`host::WorldView`] capability traits, so the same
//! logic drives both the real client (through `pwn3-hook`) and the host
//! simulator used in tests.
//!
//! # Data Flow
//!
//! - The host calls the chat hook, which parses a [`commands::ChatCommand`]
//!   and mutates the [`tunables::Tunables`].
//! - The host calls the tick hook, which reads the tunables and writes them
//!   into the active player.
//!
//! There is no other flow between the module and the host.

pub mod commands;
pub mod error;
pub mod hooks;
pub mod host;
pub mod math;
pub mod tunables;

pub use error::HostError;
pub use host::{PlayerView, WorldView};
pub use math::Vector3;
pub use tunables::Tunables;
