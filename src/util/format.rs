//! Display formatting for backend date strings.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Render a backend date (`YYYY-MM-DD`, optionally with a `T HH:MM...`
/// suffix) as e.g. `"Sep 15, 2026"` or `"Sep 15, 2026 at 14:30"`.
/// Strings that do not match the expected shape pass through unchanged.
pub fn format_date_time(raw: &str) -> String {
    let (date, time) = match raw.split_once('T') {
        Some((d, t)) => (d, Some(t)),
        None => (raw, None),
    };

    let mut parts = date.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return raw.to_owned();
    };
    let Ok(month_idx) = month.parse::<usize>() else {
        return raw.to_owned();
    };
    if !(1..=12).contains(&month_idx) || year.len() != 4 {
        return raw.to_owned();
    }
    let Ok(day_num) = day.parse::<u32>() else {
        return raw.to_owned();
    };

    let formatted = format!("{} {}, {}", MONTHS[month_idx - 1], day_num, year);
    match time.and_then(clock) {
        Some(clock) => format!("{formatted} at {clock}"),
        None => formatted,
    }
}

/// Extract `HH:MM` from a time suffix; midnight is treated as date-only.
fn clock(time: &str) -> Option<String> {
    let hhmm = time.get(..5)?;
    let (h, m) = hhmm.split_once(':')?;
    if h.parse::<u32>().is_err() || m.parse::<u32>().is_err() {
        return None;
    }
    if h == "00" && m == "00" {
        return None;
    }
    Some(hhmm.to_owned())
}

/// Uppercase initial used for the photo-less avatar circle.
pub fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}
