//! Display formatting for dates and long text.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// `"1965-08-01"` or `"1965-08-01T10:00:00Z"` -> `"Aug 1, 1965"`.
/// Anything unparseable is returned unchanged.
pub fn format_date(raw: &str) -> String {
    let date = raw.split('T').next().unwrap_or(raw);
    parse_ymd(date)
        .and_then(|(year, month, day)| {
            let name = MONTHS.get(month.checked_sub(1)?)?;
            Some(format!("{name} {day}, {year}"))
        })
        .unwrap_or_else(|| raw.to_owned())
}

fn parse_ymd(date: &str) -> Option<(u32, usize, u32)> {
    let mut parts = date.splitn(3, '-');
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    Some((year, month, day))
}

/// Optional server timestamp, formatted or empty.
pub fn format_optional_date(raw: Option<&str>) -> String {
    raw.map(format_date).unwrap_or_default()
}

/// Cut `text` to at most `max_chars` characters, adding an ellipsis when
/// anything was removed.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_owned();
    }
    let cut: String = trimmed.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

/// Pages with unit, or nothing when unknown.
pub fn page_count(pages: Option<u32>) -> Option<String> {
    pages.map(|pages| if pages == 1 { "1 page".to_owned() } else { format!("{pages} pages") })
}

/// "0 books", "1 book", "12 books".
pub fn book_count(count: usize) -> String {
    if count == 1 { "1 book".to_owned() } else { format!("{count} books") }
}
