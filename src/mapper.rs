use crate::errors::MapError;
use crate::models::{DisplayClick, RawClick, Timezone};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Asia::Seoul;
use tracing::debug;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Timestamp problems only blank the affected row's date and time. A record
/// that is not a JSON object fails the whole batch.
pub fn map_clicks(raw: &[RawClick], tz: Timezone) -> Result<Vec<DisplayClick>, MapError> {
    let mut rows = Vec::with_capacity(raw.len());
    for (index, click) in raw.iter().enumerate() {
        if !click.is_object() {
            return Err(MapError::NotAnObject { index });
        }
        rows.push(map_click(click, tz));
    }

    sort_by_recency(&mut rows);
    Ok(rows)
}

pub fn map_click(click: &RawClick, tz: Timezone) -> DisplayClick {
    let link = click.text("url").unwrap_or_default();
    let (date, time) = click_timestamp(click, tz).unwrap_or_default();
    let path = click
        .non_empty_text("path")
        .or_else(|| click.non_empty_text("lcpath"))
        .unwrap_or_default();
    // country is never substituted for a missing city
    let city = click.text("city").unwrap_or_default();

    DisplayClick {
        link,
        date,
        time,
        path,
        city,
    }
}

pub fn sort_by_recency(rows: &mut [DisplayClick]) {
    rows.sort_by_cached_key(|row| std::cmp::Reverse(row.sort_key()));
}

fn click_timestamp(click: &RawClick, tz: Timezone) -> Option<(String, String)> {
    let raw = click.get("dt")?.as_str()?;
    if raw.is_empty() {
        return None;
    }

    match parse_timestamp(raw) {
        Some(instant) => Some(format_instant(instant, tz)),
        None => {
            debug!(dt = raw, "skipping unparseable click timestamp");
            None
        }
    }
}

const OFFSET_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
    "%Y%m%dT%H%M%S%z",
];
const NAIVE_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S",
];

// Forms without an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    let normalized = match raw.strip_suffix('Z').or_else(|| raw.strip_suffix('z')) {
        Some(head) => format!("{head}+00:00"),
        None => raw.to_string(),
    };

    let candidates = [Some(normalized.clone()), hour_only_with_minutes(&normalized)];
    for candidate in candidates.iter().flatten() {
        if let Some(instant) = parse_candidate(candidate) {
            return Some(instant);
        }
    }

    NaiveDate::parse_from_str(&normalized, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn parse_candidate(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

// `2020-05-20T06+00:00` -> `2020-05-20T06:00+00:00`; chrono needs the minutes.
fn hour_only_with_minutes(value: &str) -> Option<String> {
    let (head, rest) = value.split_at_checked(13)?;
    let bytes = head.as_bytes();
    let hour_only = matches!(bytes[10], b'T' | b' ')
        && bytes[11..].iter().all(u8::is_ascii_digit)
        && (rest.is_empty() || rest.starts_with(['+', '-']));
    hour_only.then(|| format!("{head}:00{rest}"))
}

fn format_instant(instant: DateTime<Utc>, tz: Timezone) -> (String, String) {
    match tz {
        Timezone::Utc => (
            instant.format(DATE_FORMAT).to_string(),
            instant.format(TIME_FORMAT).to_string(),
        ),
        Timezone::AsiaSeoul => {
            let local = instant.with_timezone(&Seoul);
            (
                local.format(DATE_FORMAT).to_string(),
                local.format(TIME_FORMAT).to_string(),
            )
        }
    }
}
