//! Chat Hook
//!
//! Echoes every chat line to standard output and applies any command it
//! carries. Malformed arguments and unknown commands are silently ignored
//! after the echo. Output failures are logged and never stop a command from
//! being applied.

use crate::commands::{teleport_target, ChatCommand};
use crate::host::PlayerView;
use crate::tunables::Tunables;
use std::io::{self, Write};

/// Handle one chat line from the local player.
///
/// # Arguments
/// * `player` - The player that sent the line
/// * `message` - The line as typed, in the host's bytes
/// * `tunables` - Tunables to update
/// * `out` - Where the echo and `gp` output go (standard output in the host)
///
/// # Returns
/// The command that was applied, if the line was one.
pub fn on_chat<P, O>(
    player: &mut P,
    message: &[u8],
    tunables: &mut Tunables,
    out: &mut O,
) -> Option<ChatCommand>
where
    P: PlayerView + ?Sized,
    O: Write + ?Sized,
{
    log_output(echo(out, &player.name(), message));

    // Prefixes are ASCII, so lossy decoding never changes which command matches.
    let text = String::from_utf8_lossy(message);
    let Some(command) = ChatCommand::parse(&text) else {
        log_output(out.flush());
        return None;
    };

    if !command.is_complete() {
        log::debug!("Incomplete arguments in chat command {:?}", text);
    }

    match command {
        ChatCommand::Teleport(coords) => {
            if let Some(target) = teleport_target(coords, player.position()) {
                player.set_position(target);
            }
        }
        ChatCommand::RaiseZ(Some(dz)) => {
            let position = player.position().raised(dz);
            player.set_position(position);
        }
        ChatCommand::ToggleFreeze => {
            let frozen = tunables.toggle_freeze(player.position());
            log::info!(
                "Freeze {} at {}",
                if frozen { "on" } else { "off" },
                tunables.frozen_position()
            );
        }
        ChatCommand::SetJumpSpeed(Some(speed)) => tunables.set_jump_speed(speed),
        ChatCommand::SetWalkSpeed(Some(speed)) => tunables.set_walk_speed(speed),
        ChatCommand::PrintPosition => {
            log_output(writeln!(out, "<Position> {}", player.position()));
        }
        ChatCommand::RaiseZ(None)
        | ChatCommand::SetJumpSpeed(None)
        | ChatCommand::SetWalkSpeed(None) => {}
    }

    log::debug!("Tunables after {:?}: {}", command, tunables.to_json());
    log_output(out.flush());
    Some(command)
}

/// `[name] -> "message"` with the message bytes written as received.
fn echo<O: Write + ?Sized>(out: &mut O, name: &str, message: &[u8]) -> io::Result<()> {
    write!(out, "[{}] -> \"", name)?;
    out.write_all(message)?;
    out.write_all(b"\"\n")
}

fn log_output(result: io::Result<()>) {
    if let Err(err) = result {
        log::debug!("Chat output failed: {}", err);
    }
}
