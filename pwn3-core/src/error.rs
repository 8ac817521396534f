//! Host Access Errors
//!
//! Failures that can occur while reaching into the host's object graph. None
//! of these ever travel back into the host: the hooks log them and return.

use thiserror::Error;

/// Reasons the host's world or player could not be reached.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// A symbol the module depends on is not exported by any later module.
    ///
    /// Happens when the module is loaded into something other than the game
    /// client, or before the game logic library is mapped.
    #[error("host symbol `{symbol}` not found")]
    SymbolMissing { symbol: String },

    /// `GameWorld` exists but does not point at a world yet.
    #[error("host world pointer is null")]
    NullWorld,

    /// The world exists but nobody is controlling a player.
    #[error("world has no active player")]
    NoActivePlayer,

    /// The host invoked a player callback with a null `this`.
    #[error("player pointer is null")]
    NullPlayer,
}

impl HostError {
    /// Whether this error is the ordinary state of a client that is not in
    /// game yet (main menu, loading screen), as opposed to a broken host.
    pub fn is_transient(&self) -> bool {
        matches!(self, HostError::NullWorld | HostError::NoActivePlayer)
    }
}
