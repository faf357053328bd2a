//! Input Validation
//!
//! Normalizes or rejects untrusted input before it reaches domain objects.
//! Identifiers and keys are rejected outright when malformed; numeric
//! stats and pagination values are clamped into range instead.

use serde_json::Value;

use crate::domain::{DomainError, Stats, DEFAULT_LEVEL, MAX_LEVEL, MIN_LEVEL};

pub const EXTERNAL_ID_MAX_LEN: usize = 64;
pub const NICKNAME_MAX_LEN: usize = 255;

pub const DEFAULT_PAGE_LIMIT: i64 = 50;
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Every SteamID64 for an individual account starts with this prefix
const STEAM_ID_PREFIX: &str = "7656119";
const STEAM_ID_LEN: usize = 17;

/// Strip markup, escape HTML-reserved characters and truncate to
/// `max_length` characters. Never fails.
///
/// Truncation counts characters of the escaped text, so an entity that
/// straddles the limit is cut (`"&amp;"` may end up as a bare `"&"`).
pub fn sanitize_string(value: &str, max_length: usize) -> String {
    let escaped = escape_html(&strip_tags(value.trim()));
    truncate_chars(escaped, max_length)
}

pub fn validate_external_id(external_id: &str) -> Result<String, DomainError> {
    let external_id = external_id.trim();

    if external_id.is_empty() {
        return Err(DomainError::invalid_input("External ID cannot be empty"));
    }

    if external_id.chars().count() > EXTERNAL_ID_MAX_LEN {
        return Err(DomainError::invalid_input(format!(
            "External ID is too long (max {EXTERNAL_ID_MAX_LEN} characters)"
        )));
    }

    if !external_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(DomainError::invalid_input(
            "External ID contains invalid characters",
        ));
    }

    Ok(external_id.to_string())
}

pub fn validate_nickname(nickname: &str) -> Result<String, DomainError> {
    let nickname = nickname.trim();

    if nickname.is_empty() {
        return Err(DomainError::invalid_input("Nickname cannot be empty"));
    }

    if nickname.chars().count() > NICKNAME_MAX_LEN {
        return Err(DomainError::invalid_input(format!(
            "Nickname is too long (max {NICKNAME_MAX_LEN} characters)"
        )));
    }

    let sanitized = sanitize_string(nickname, NICKNAME_MAX_LEN);

    // Pure markup such as "<b></b>" sanitizes down to nothing
    if sanitized.is_empty() {
        return Err(DomainError::invalid_input("Nickname cannot be empty"));
    }

    Ok(sanitized)
}

/// Accepts JSON numbers and numeric strings; fractions are truncated.
pub fn validate_profile_id(id: &Value) -> Result<i64, DomainError> {
    let id = as_integer(id)
        .ok_or_else(|| DomainError::invalid_input("Profile ID must be a number"))?;

    if id <= 0 {
        return Err(DomainError::invalid_input("Profile ID must be positive"));
    }

    Ok(id)
}

/// Clamp each stats field into range. Absent, null or non-numeric fields
/// take their default. Never fails.
pub fn validate_stats(stats: &Value) -> Stats {
    let field = |key: &str| stats.get(key).filter(|v| !v.is_null());

    Stats::new(
        clamp_int(field("level"), MIN_LEVEL, MAX_LEVEL, DEFAULT_LEVEL),
        clamp_int(field("experience"), 0, i64::MAX, 0),
        clamp_int(field("wins"), 0, i64::MAX, 0),
        clamp_int(field("losses"), 0, i64::MAX, 0),
    )
}

pub fn validate_steam_api_key(api_key: &str) -> Result<String, DomainError> {
    let api_key = api_key.trim();

    if api_key.is_empty() {
        return Err(DomainError::invalid_input("Steam API key cannot be empty"));
    }

    if !api_key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(DomainError::invalid_input("Invalid Steam API key format"));
    }

    Ok(api_key.to_string())
}

pub fn validate_steam_id(steam_id: &str) -> Result<String, DomainError> {
    let steam_id = steam_id.trim();

    if steam_id.is_empty() {
        return Err(DomainError::invalid_input("Steam ID cannot be empty"));
    }

    let well_formed = steam_id.len() == STEAM_ID_LEN
        && steam_id.starts_with(STEAM_ID_PREFIX)
        && steam_id.bytes().all(|b| b.is_ascii_digit());

    if !well_formed {
        return Err(DomainError::invalid_input(
            "Invalid Steam ID format. Expected SteamID64 (e.g., 76561198012345678)",
        ));
    }

    Ok(steam_id.to_string())
}

/// Returns `(limit, offset)`, limit in [1, 100] defaulting to 50 and
/// offset in [0, i64::MAX] defaulting to 0. Never fails.
pub fn validate_pagination_params(limit: &Value, offset: &Value) -> (i64, i64) {
    (
        clamp_int(Some(limit), 1, MAX_PAGE_LIMIT, DEFAULT_PAGE_LIMIT),
        clamp_int(Some(offset), 0, i64::MAX, 0),
    )
}

fn clamp_int(value: Option<&Value>, min: i64, max: i64, default: i64) -> i64 {
    value
        .and_then(as_integer)
        .map_or(default, |v| v.clamp(min, max))
}

/// Integer reading of a raw value, `None` when it is not numeric
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(truncate)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(truncate)
            })
        }
        _ => None,
    }
}

// Saturates at the i64 bounds
fn truncate(f: f64) -> i64 {
    f.trunc() as i64
}

/// Remove `<...>` tags. A `<` followed by whitespace or ending the input is
/// literal text; an unterminated tag swallows the rest of the input.
fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '<' {
            out.push(c);
            continue;
        }

        match chars.peek() {
            Some(next) if !next.is_whitespace() => {
                let mut quote: Option<char> = None;
                for c in chars.by_ref() {
                    match (quote, c) {
                        (None, '>') => break,
                        (None, '"' | '\'') => quote = Some(c),
                        (Some(q), c) if c == q => quote = None,
                        _ => {}
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

fn truncate_chars(value: String, max_length: usize) -> String {
    match value.char_indices().nth(max_length) {
        Some((byte_idx, _)) => value[..byte_idx].to_string(),
        None => value,
    }
}
