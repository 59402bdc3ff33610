//! Date string parsers.
//!
//! Hearing and publication dates reach the engine either in ISO form (from
//! HTML date inputs and the persistence layer) or in the Italian
//! `DD/MM/YYYY` form (from CSV imports).  These helpers only split and
//! convert the fields; calendar validity is checked by the caller.

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let mut parts = s.trim().split('-');
    let year = parse_field(parts.next()?, 4)?;
    let month = parse_field(parts.next()?, 2)?;
    let day = parse_field(parts.next()?, 2)?;
    if parts.next().is_some() {
        return None;
    }
    Some((year, u8::try_from(month).ok()?, u8::try_from(day).ok()?))
}

/// Parse a date string in `DD/MM/YYYY` format.
///
/// Returns `(year, month, day)` on success.
pub fn parse_date_slash(s: &str) -> Option<(u16, u8, u8)> {
    let mut parts = s.trim().split('/');
    let day = parse_field(parts.next()?, 2)?;
    let month = parse_field(parts.next()?, 2)?;
    let year = parse_field(parts.next()?, 4)?;
    if parts.next().is_some() {
        return None;
    }
    Some((year, u8::try_from(month).ok()?, u8::try_from(day).ok()?))
}

/// Parse either of the two accepted forms.
pub fn parse_date(s: &str) -> Option<(u16, u8, u8)> {
    if s.contains('/') {
        parse_date_slash(s)
    } else {
        parse_iso_date(s)
    }
}

/// Parse a numeric field of at most `max_len` ASCII digits.
fn parse_field(field: &str, max_len: usize) -> Option<u16> {
    if field.is_empty() || field.len() > max_len || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
