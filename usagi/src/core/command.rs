//! Slash-command parsing.
//!
//! Parsing is pure: it turns one input line into a [`Command`] without touching
//! the list or the terminal. Execution lives in `dispatch`.

/// Leading character that marks a line as a command.
pub const COMMAND_MARKER: char = '/';

/// A parsed slash-command. Arguments are kept as raw tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Bare marker with nothing after it. Handled as a no-op.
    Empty,
    View,
    Remove { index: Option<String> },
    Save { path: Option<String> },
    Load { path: Option<String> },
    Clear,
    Help,
    Quit,
    Unknown { name: String },
}

/// Returns true if `line` starts with [`COMMAND_MARKER`].
pub fn is_command(line: &str) -> bool {
    line.starts_with(COMMAND_MARKER)
}

/// Parse a command line.
///
/// Returns `None` when the line is not marked. The first whitespace-delimited
/// token (marker included, case-sensitive) selects the command; later tokens
/// are positional arguments and extras are ignored.
pub fn parse_command(line: &str) -> Option<Command> {
    if !is_command(line) {
        return None;
    }
    if line[COMMAND_MARKER.len_utf8()..].trim().is_empty() {
        return Some(Command::Empty);
    }
    let mut tokens = line.split([' ', '\t']).filter(|token| !token.is_empty());
    let name = tokens.next()?;
    let mut arg = || tokens.next().map(str::to_string);
    let command = match name {
        "/view" => Command::View,
        "/remove" => Command::Remove { index: arg() },
        "/save" => Command::Save { path: arg() },
        "/load" => Command::Load { path: arg() },
        "/clear" => Command::Clear,
        "/help" => Command::Help,
        "/quit" => Command::Quit,
        other => Command::Unknown {
            name: other.to_string(),
        },
    };
    Some(command)
}

/// Parse the longest leading integer of `input`.
///
/// Skips leading whitespace, accepts one optional sign, then consumes digits
/// until the first non-digit. No digits yields 0. Out-of-range values saturate.
pub fn parse_leading_int(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let mut value: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(byte - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}
