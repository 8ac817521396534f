//! Chat Command Parser
//!
//! Turns a line typed into the in-game chat into a [`ChatCommand`].
//!
//! # Matching
//!
//! Commands match on an exact byte prefix: no trimming, no case folding. The
//! table is tested top to bottom and the first hit wins, so `"!js 5"` is a
//! freeze toggle and `"tpX 1 2 3"` is nothing at all.
//!
//! | Prefix | Arguments | Command |
//! |--------|-----------|---------|
//! | `tp `  | `x y z`   | [`ChatCommand::Teleport`] |
//! | `tz `  | `dz`      | [`ChatCommand::RaiseZ`] |
//! | `!`    | ignored   | [`ChatCommand::ToggleFreeze`] |
//! | `js `  | `speed`   | [`ChatCommand::SetJumpSpeed`] |
//! | `ws `  | `speed`   | [`ChatCommand::SetWalkSpeed`] |
//! | `gp`   | ignored   | [`ChatCommand::PrintPosition`] |
//!
//! # Arguments
//!
//! Numbers are scanned like C `%f`: leading whitespace skipped, the longest
//! prefix that is a valid float consumed, scanning stops at the first
//! argument that is not a number. Hexadecimal floats such as `0x10` or
//! `0x1.8p1` are accepted too. An argument that could not be scanned is
//! `None` and the command leaves the corresponding value alone.

use crate::math::Vector3;

/// A recognised chat command with its scanned arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChatCommand {
    /// Absolute teleport. Components past the first unscannable one are `None`.
    Teleport([Option<f32>; 3]),
    /// Relative vertical move.
    RaiseZ(Option<f32>),
    ToggleFreeze,
    SetJumpSpeed(Option<f32>),
    SetWalkSpeed(Option<f32>),
    PrintPosition,
}

impl ChatCommand {
    /// Parse a chat line. `None` means the line is not a command.
    pub fn parse(message: &str) -> Option<ChatCommand> {
        if let Some(args) = message.strip_prefix("tp ") {
            let mut scanner = FloatScanner::new(args);
            let x = scanner.next_float();
            let y = x.and_then(|_| scanner.next_float());
            let z = y.and_then(|_| scanner.next_float());
            Some(ChatCommand::Teleport([x, y, z]))
        } else if let Some(args) = message.strip_prefix("tz ") {
            Some(ChatCommand::RaiseZ(FloatScanner::new(args).next_float()))
        } else if message.starts_with('!') {
            Some(ChatCommand::ToggleFreeze)
        } else if let Some(args) = message.strip_prefix("js ") {
            Some(ChatCommand::SetJumpSpeed(FloatScanner::new(args).next_float()))
        } else if let Some(args) = message.strip_prefix("ws ") {
            Some(ChatCommand::SetWalkSpeed(FloatScanner::new(args).next_float()))
        } else if message.starts_with("gp") {
            Some(ChatCommand::PrintPosition)
        } else {
            None
        }
    }

    /// Whether every argument the command takes was scanned.
    pub fn is_complete(&self) -> bool {
        match self {
            ChatCommand::Teleport(coords) => coords.iter().all(Option::is_some),
            ChatCommand::RaiseZ(v) | ChatCommand::SetJumpSpeed(v) | ChatCommand::SetWalkSpeed(v) => {
                v.is_some()
            }
            ChatCommand::ToggleFreeze | ChatCommand::PrintPosition => true,
        }
    }
}

/// Teleport destination from scanned components, keeping `current` for the
/// ones that were not scanned. `None` when nothing was scanned.
pub fn teleport_target(coords: [Option<f32>; 3], current: Vector3) -> Option<Vector3> {
    if coords.iter().all(Option::is_none) {
        return None;
    }
    Some(Vector3::new(
        coords[0].unwrap_or(current.x),
        coords[1].unwrap_or(current.y),
        coords[2].unwrap_or(current.z),
    ))
}

/// Sequential `%f`-style float scanner over a string.
#[derive(Debug, Clone)]
pub struct FloatScanner<'a> {
    rest: &'a str,
}

impl<'a> FloatScanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    /// Scan the next float, or `None` if the input at the cursor does not
    /// start with one. A failed scan does not advance, so every later call
    /// fails too.
    pub fn next_float(&mut self) -> Option<f32> {
        let trimmed = self.rest.trim_start();
        let token_end = trimmed
            .find(char::is_whitespace)
            .unwrap_or(trimmed.len());
        let token = &trimmed[..token_end];

        if let Some((value, end)) = scan_hex_float(token) {
            self.rest = &trimmed[end..];
            return Some(value);
        }
        for end in (1..=token.len()).rev() {
            if !token.is_char_boundary(end) {
                continue;
            }
            if let Ok(value) = token[..end].parse::<f32>() {
                self.rest = &trimmed[end..];
                return Some(value);
            }
        }
        None
    }
}

/// Hexadecimal float at the start of `token`, with the number of bytes it
/// spans. `0x` with no hex digit after it is not one.
fn scan_hex_float(token: &str) -> Option<(f32, usize)> {
    let bytes = token.as_bytes();
    let mut pos = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };
    if !matches!(bytes.get(pos..pos + 2), Some([b'0', b'x' | b'X'])) {
        return None;
    }
    pos += 2;

    let mut mantissa = 0f64;
    let mut exponent = 0i32;
    let mut digits = 0;
    let mut seen_point = false;
    while let Some(&byte) = bytes.get(pos) {
        if byte == b'.' && !seen_point {
            seen_point = true;
        } else if let Some(digit) = char::from(byte).to_digit(16) {
            mantissa = mantissa * 16.0 + f64::from(digit);
            if seen_point {
                exponent = exponent.saturating_sub(4);
            }
            digits += 1;
        } else {
            break;
        }
        pos += 1;
    }
    if digits == 0 {
        return None;
    }

    // Binary exponent, only taken when at least one digit follows.
    if let Some(b'p' | b'P') = bytes.get(pos) {
        let mut end = pos + 1;
        let exp_negative = match bytes.get(end) {
            Some(b'-') => {
                end += 1;
                true
            }
            Some(b'+') => {
                end += 1;
                false
            }
            _ => false,
        };
        let start = end;
        let mut power = 0i32;
        while let Some(&digit) = bytes.get(end).filter(|b| b.is_ascii_digit()) {
            power = power.saturating_mul(10).saturating_add(i32::from(digit - b'0'));
            end += 1;
        }
        if end > start {
            let power = if exp_negative { -power } else { power };
            exponent = exponent.saturating_add(power);
            pos = end;
        }
    }

    let value = mantissa * 2f64.powi(exponent);
    let value = if negative { -value } else { value };
    Some((value as f32, pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_table() {
        assert_eq!(
            ChatCommand::parse("tp 1 2 3"),
            Some(ChatCommand::Teleport([Some(1.0), Some(2.0), Some(3.0)]))
        );
        assert_eq!(ChatCommand::parse("tz -4.5"), Some(ChatCommand::RaiseZ(Some(-4.5))));
        assert_eq!(ChatCommand::parse("!"), Some(ChatCommand::ToggleFreeze));
        assert_eq!(ChatCommand::parse("!anything"), Some(ChatCommand::ToggleFreeze));
        assert_eq!(ChatCommand::parse("js 7"), Some(ChatCommand::SetJumpSpeed(Some(7.0))));
        assert_eq!(ChatCommand::parse("ws 5"), Some(ChatCommand::SetWalkSpeed(Some(5.0))));
        assert_eq!(ChatCommand::parse("gp"), Some(ChatCommand::PrintPosition));
        assert_eq!(ChatCommand::parse("gpx"), Some(ChatCommand::PrintPosition));
    }

    #[test]
    fn test_prefix_is_exact() {
        assert_eq!(ChatCommand::parse("tpX 1 2 3"), None);
        assert_eq!(ChatCommand::parse("tp"), None);
        assert_eq!(ChatCommand::parse(" tp 1 2 3"), None);
        assert_eq!(ChatCommand::parse("TP 1 2 3"), None);
        assert_eq!(ChatCommand::parse("g"), None);
        assert_eq!(ChatCommand::parse(""), None);
        assert_eq!(ChatCommand::parse("hello"), None);
    }

    #[test]
    fn test_scanner_is_permissive() {
        assert_eq!(ChatCommand::parse("ws 5abc"), Some(ChatCommand::SetWalkSpeed(Some(5.0))));
        assert_eq!(ChatCommand::parse("ws   12"), Some(ChatCommand::SetWalkSpeed(Some(12.0))));
        assert_eq!(ChatCommand::parse("ws 1e3"), Some(ChatCommand::SetWalkSpeed(Some(1000.0))));
        assert_eq!(ChatCommand::parse("ws 1e"), Some(ChatCommand::SetWalkSpeed(Some(1.0))));
        assert_eq!(ChatCommand::parse("ws abc"), Some(ChatCommand::SetWalkSpeed(None)));
        assert_eq!(ChatCommand::parse("ws "), Some(ChatCommand::SetWalkSpeed(None)));
        assert_eq!(ChatCommand::parse("js 3 9 9"), Some(ChatCommand::SetJumpSpeed(Some(3.0))));
    }

    #[test]
    fn test_teleport_stops_at_first_bad_component() {
        assert_eq!(
            ChatCommand::parse("tp 1 x 3"),
            Some(ChatCommand::Teleport([Some(1.0), None, None]))
        );
        assert_eq!(
            ChatCommand::parse("tp 1 2"),
            Some(ChatCommand::Teleport([Some(1.0), Some(2.0), None]))
        );
        assert!(!ChatCommand::parse("tp 1 2").unwrap().is_complete());
        assert!(ChatCommand::parse("tp 1 2 3 4").unwrap().is_complete());
    }

    #[test]
    fn test_scanner_sticky_failure() {
        let mut scanner = FloatScanner::new("1.5 nope 2");
        assert_eq!(scanner.next_float(), Some(1.5));
        assert_eq!(scanner.next_float(), None);
        assert_eq!(scanner.next_float(), None);
    }

    #[test]
    fn test_scanner_reads_hex_floats() {
        assert_eq!(ChatCommand::parse("ws 0x10"), Some(ChatCommand::SetWalkSpeed(Some(16.0))));
        assert_eq!(ChatCommand::parse("js 0X1.8p1"), Some(ChatCommand::SetJumpSpeed(Some(3.0))));
        assert_eq!(ChatCommand::parse("tz -0x.8"), Some(ChatCommand::RaiseZ(Some(-0.5))));
        assert_eq!(ChatCommand::parse("ws 0x1p-2"), Some(ChatCommand::SetWalkSpeed(Some(0.25))));
        assert_eq!(
            ChatCommand::parse("tp 0x10 0x20p0 0xff"),
            Some(ChatCommand::Teleport([Some(16.0), Some(32.0), Some(255.0)]))
        );
    }

    #[test]
    fn test_hex_float_edges() {
        // No hex digit: only the leading zero is a number.
        assert_eq!(ChatCommand::parse("ws 0x"), Some(ChatCommand::SetWalkSpeed(Some(0.0))));
        assert_eq!(ChatCommand::parse("ws 0xg"), Some(ChatCommand::SetWalkSpeed(Some(0.0))));
        // Exponent marker without digits is left unscanned.
        assert_eq!(ChatCommand::parse("ws 0x2p"), Some(ChatCommand::SetWalkSpeed(Some(2.0))));
        assert_eq!(ChatCommand::parse("ws 0x2pz"), Some(ChatCommand::SetWalkSpeed(Some(2.0))));

        let mut scanner = FloatScanner::new("0x1p4q 7");
        assert_eq!(scanner.next_float(), Some(16.0));
        assert_eq!(scanner.next_float(), None);
    }

    #[test]
    fn test_teleport_target_keeps_unscanned() {
        let current = Vector3::new(7.0, 8.0, 9.0);
        assert_eq!(teleport_target([None, None, None], current), None);
        assert_eq!(
            teleport_target([Some(1.0), None, None], current),
            Some(Vector3::new(1.0, 8.0, 9.0))
        );
        assert_eq!(
            teleport_target([Some(1.0), Some(2.0), Some(3.0)], current),
            Some(Vector3::new(1.0, 2.0, 3.0))
        );
    }
}
