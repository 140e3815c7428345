//! Display formatting for feed and profile fields.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Shown when a news item has no author name.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Render a service timestamp as `DD.MM.YYYY, HH:MM`.
///
/// Accepts `YYYY-MM-DD HH:MM:SS[.ffffff]` and the ISO `T` separator. Input
/// that does not match is returned unchanged. No timezone conversion.
pub fn format_timestamp(raw: &str) -> String {
    let Some((date, time)) = split_timestamp(raw) else {
        return raw.to_owned();
    };
    let Some(date) = format_date_part(date) else {
        return raw.to_owned();
    };
    match time.get(..5).filter(|hm| is_hour_minute(hm)) {
        Some(hm) => format!("{date}, {hm}"),
        None => date,
    }
}

/// Render the date portion of a service timestamp as `DD.MM.YYYY`.
pub fn format_date(raw: &str) -> String {
    let date = split_timestamp(raw).map_or(raw.trim(), |(d, _)| d);
    format_date_part(date).unwrap_or_else(|| raw.to_owned())
}

/// First character of `name` for the avatar fallback.
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_string())
}

pub fn author_label(author: Option<&str>) -> &str {
    author
        .filter(|a| !a.trim().is_empty())
        .unwrap_or(ANONYMOUS_AUTHOR)
}

fn split_timestamp(raw: &str) -> Option<(&str, &str)> {
    raw.trim().split_once(['T', ' '])
}

fn format_date_part(date: &str) -> Option<String> {
    let mut parts = date.split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let numeric = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());
    if !(numeric(year, 4) && numeric(month, 2) && numeric(day, 2)) {
        return None;
    }
    Some(format!("{day}.{month}.{year}"))
}

fn is_hour_minute(hm: &str) -> bool {
    let bytes = hm.as_bytes();
    bytes.len() == 5
        && bytes[2] == b':'
        && bytes[..2].iter().all(u8::is_ascii_digit)
        && bytes[3..].iter().all(u8::is_ascii_digit)
}
