//! Decoder for the leading fields of a `/proc/<pid>/stat` record.
//!
//! Only `pid`, the process name, the state code and `ppid` are decoded. The
//! caller hands over a bounded prefix of the record, which also caps how long
//! an accepted name can be.

use crate::error::StatError;
use crate::process::ProcessRecord;

/// Bytes of the stat record read per process. Enough for the first four fields.
pub const STAT_PREFIX_LEN: usize = 256;

/// Decodes `pid name state ppid` from the start of a stat record.
///
/// A name that opens with `(` runs to the last `)` in the buffer, since kernel
/// process names may themselves contain spaces and parentheses; the enclosing
/// parentheses are dropped, so `1 (systemd) S 0` prints as `[1]systemd`
/// rather than the raw `[1](systemd)` token. Any other name is taken as a
/// single token.
pub fn parse(buf: &str) -> Result<ProcessRecord, StatError> {
    let (pid_field, rest) = split_token(buf).ok_or(StatError::MissingField("pid"))?;
    let pid = parse_number("pid", pid_field)?;

    let rest = rest.trim_start();
    let (name, rest) = match rest.strip_prefix('(') {
        Some(inner) => {
            let end = inner.rfind(')').ok_or(StatError::UnterminatedName)?;
            (&inner[..end], &inner[end + 1..])
        }
        None => split_token(rest).ok_or(StatError::MissingField("name"))?,
    };

    let mut fields = rest.split_whitespace();

    let state_field = fields.next().ok_or(StatError::MissingField("state"))?;
    let mut chars = state_field.chars();
    let state = match (chars.next(), chars.next()) {
        (Some(state), None) => state,
        _ => {
            return Err(StatError::InvalidField {
                field: "state",
                value: state_field.to_string(),
            });
        }
    };

    let ppid_field = fields.next().ok_or(StatError::MissingField("ppid"))?;
    let parent_pid = parse_number("ppid", ppid_field)?;

    Ok(ProcessRecord::new(pid, parent_pid, name).with_state(state))
}

fn split_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(end) => Some((&s[..end], &s[end..])),
        None => Some((s, "")),
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<u32, StatError> {
    value.parse().map_err(|_| StatError::InvalidField {
        field,
        value: value.to_string(),
    })
}
