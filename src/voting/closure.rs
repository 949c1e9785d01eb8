use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Whether a poll should be treated as closed right now.
///
/// Reads the wall clock once. See [`is_closed_at`] for the rules.
pub fn is_closed(end_date: Option<&str>, max_vote: Option<u32>, total_vote: Option<u32>) -> bool {
    is_closed_at(end_date, max_vote, total_vote, Utc::now())
}

/// A poll is closed once a non-zero vote cap has been reached, or once its end
/// date is at or before `now`. No end date and no cap means it never closes;
/// an end date that cannot be parsed leaves the poll open.
pub fn is_closed_at(
    end_date: Option<&str>,
    max_vote: Option<u32>,
    total_vote: Option<u32>,
    now: DateTime<Utc>,
) -> bool {
    if let (Some(max), Some(total)) = (max_vote, total_vote) {
        if max > 0 && total > 0 && total >= max {
            return true;
        }
    }

    match end_date.and_then(parse_end_date) {
        Some(end) => end <= now,
        None => false,
    }
}

/// Parse the date formats poll records carry. Offset-less values are read as UTC.
pub fn parse_end_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
