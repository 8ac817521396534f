//! Test Utilities
//!
//! A host simulator implementing the Host ABI View traits, plus helpers for
//! driving it the way the real client drives the module.

#![allow(dead_code)]

use pwn3_core::hooks::{on_chat, on_tick};
use pwn3_core::tunables::GRAVITY_COMPENSATION;
use pwn3_core::{PlayerView, Tunables, Vector3, WorldView};

/// Simulated player with the same mutable surface as the host's.
#[derive(Debug, Clone, PartialEq)]
pub struct SimPlayer {
    pub name: String,
    pub walking_speed: f32,
    pub jump_speed: f32,
    pub position: Vector3,
    /// Number of calls to `set_position`.
    pub moves: usize,
}

impl PlayerView for SimPlayer {
    fn set_walk_speed(&mut self, speed: f32) {
        self.walking_speed = speed;
    }

    fn set_jump_speed(&mut self, speed: f32) {
        self.jump_speed = speed;
    }

    fn position(&self) -> Vector3 {
        self.position
    }

    fn set_position(&mut self, position: Vector3) {
        self.position = position;
        self.moves += 1;
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

/// Simulated world. Gravity pulls an airborne player down by exactly one
/// compensation step per frame.
#[derive(Debug, Clone)]
pub struct SimWorld {
    pub player: Option<SimPlayer>,
    pub gravity: f32,
}

impl WorldView for SimWorld {
    type Player<'a> = &'a mut SimPlayer;

    fn active_player(&mut self) -> Option<Self::Player<'_>> {
        self.player.as_mut()
    }
}

impl SimWorld {
    /// Host's own physics step, run between our tick and the next one.
    pub fn physics(&mut self) {
        if let Some(player) = self.player.as_mut() {
            player.position.z -= self.gravity;
        }
    }

    /// Host's per-tick writes to the speed fields, which land before ours.
    pub fn host_writes(&mut self, walking_speed: f32, jump_speed: f32) {
        if let Some(player) = self.player.as_mut() {
            player.walking_speed = walking_speed;
            player.jump_speed = jump_speed;
        }
    }

    /// One full frame: host writes, then our tick.
    pub fn frame(&mut self, tunables: &Tunables, host_walk: f32, host_jump: f32) {
        self.host_writes(host_walk, host_jump);
        let _ = on_tick(self, tunables);
    }

    pub fn player(&self) -> &SimPlayer {
        self.player.as_ref().expect("simulated world has a player")
    }

    pub fn player_mut(&mut self) -> &mut SimPlayer {
        self.player.as_mut().expect("simulated world has a player")
    }
}

/// Stub world from the end-to-end scenarios: player `"A"` at the origin with
/// both speeds at 1.
pub fn mock_world() -> SimWorld {
    SimWorld {
        player: Some(SimPlayer {
            name: "A".to_string(),
            walking_speed: 1.0,
            jump_speed: 1.0,
            position: Vector3::ZERO,
            moves: 0,
        }),
        gravity: GRAVITY_COMPENSATION,
    }
}

/// World with no active player.
pub fn mock_empty_world() -> SimWorld {
    SimWorld {
        player: None,
        gravity: GRAVITY_COMPENSATION,
    }
}

/// Send a chat line from the world's player, returning what was written to
/// standard output.
pub fn chat(world: &mut SimWorld, tunables: &mut Tunables, message: &str) -> String {
    String::from_utf8(chat_bytes(world, tunables, message.as_bytes()))
        .expect("chat output is UTF-8")
}

/// Like [`chat`], for lines that are not valid UTF-8.
pub fn chat_bytes(world: &mut SimWorld, tunables: &mut Tunables, message: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    on_chat(world.player_mut(), message, tunables, &mut out);
    out
}

/// Standard output that has gone away, e.g. a closed pipe.
pub struct BrokenPipe;

impl std::io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Err(std::io::ErrorKind::BrokenPipe.into())
    }
}
