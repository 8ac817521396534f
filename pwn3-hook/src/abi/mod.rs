//! Host ABI
//!
//! Concrete implementation of the Host ABI View over the memory of one
//! specific client build (x86-64 Linux, Itanium C++ ABI).
//!
//! # Layout Contract
//!
//! Every offset in [`PWN3_LAYOUT`] is a compile-time contract with that build.
//! A mismatched client means undefined behaviour, most likely a crash inside
//! the host; matching versions is the user's responsibility.
//!
//! ```text
//! ClientWorld                     Player
//! +0x00  vptr                     +0x000 Actor (vptr, refs, ...)
//! ...                             +0x0A8 IPlayer sub-object (vptr)
//! +0xD8  m_activePlayer ------->  ...
//!        (IPlayer*)               +0x2E0 m_walkingSpeed: f32
//!                                 +0x2E4 m_jumpSpeed:    f32
//! ```
//!
//! `m_activePlayer` holds an `IPlayer*`, which points at the `IPlayer`
//! sub-object, not at the start of the `Player`.

pub mod player;
pub mod symbols;
pub mod world;

pub use player::PlayerHandle;
pub use symbols::HostMethods;
pub use world::WorldHandle;

/// Byte offsets into host objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostLayout {
    /// `ClientWorld::m_activePlayer.m_object` within the world.
    pub active_player: usize,
    /// `IPlayer` base within `Player`.
    pub iplayer_base: usize,
    /// `Player::m_walkingSpeed`.
    pub walking_speed: usize,
    /// `Player::m_jumpSpeed`.
    pub jump_speed: usize,
}

/// Layout of the supported client build.
pub const PWN3_LAYOUT: HostLayout = HostLayout {
    active_player: 0xD8,
    iplayer_base: 0xA8,
    walking_speed: 0x2E0,
    jump_speed: 0x2E4,
};
