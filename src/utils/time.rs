//! Time parsing helpers.

/// Parse an `HH:MM` string into minutes since midnight.
/// Returns None for anything with non-numeric parts.
pub fn hhmm_to_minutes(s: &str) -> Option<i64> {
    let mut it = s.split(':');
    let h = it.next()?.trim().parse::<i64>().ok()?;
    let m = it.next()?.trim().parse::<i64>().ok()?;
    if it.next().is_some() {
        return None;
    }
    Some(h * 60 + m)
}
