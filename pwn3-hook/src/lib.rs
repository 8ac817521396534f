//! Pwn Adventure 3 Trainer Preload Library
//!
//! Shared object that is preloaded into the game client and overrides three
//! host methods by symbol interposition:
//!
//! - `World::Tick` pushes the tunables into the active player every tick.
//! - `Player::Chat` turns chat lines into trainer commands.
//! - `Player::CanJump` always allows jumping.
//!
//! # Usage
//!
//! ```bash
//! cargo build --release -p pwn3-hook
//! LD_PRELOAD=target/release/libpwn3_hook.so ./PwnAdventure3-Linux-Shipping
//! ```
//!
//! Then type commands into the in-game chat:
//!
//! ```text
//! ws 2000      walk speed
//! js 800       jump speed
//! tp x y z     teleport
//! tz 500       move up (negative: down)
//! !            toggle freeze at the current position
//! gp           print the current position to stdout
//! ```
//!
//! Set `PWN3_TRAINER_LOG=debug` to see what the trainer is doing on stderr.
//!
//! # Limitations
//!
//! - Only the client build whose layout is in [`abi::PWN3_LAYOUT`] is
//!   supported. Any other build is undefined behaviour.
//! - The replaced `World::Tick` does not delegate to the original.

#![warn(unsafe_op_in_unsafe_fn)]

pub mod abi;
pub mod exports;
pub mod logging;
pub mod shield;
