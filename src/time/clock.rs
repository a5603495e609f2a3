use crate::time::error::TimeError;
use crate::time::zones::{time_zones, INVALID_TIMEZONE};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use log::debug;
use serde::Serialize;

/// "January 5, 2025 at 03:04:05 PM"
const ZONE_FORMAT: &str = "%B %-d, %Y at %I:%M:%S %p";

/// One row of the world clock
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneTime {
    pub zone: &'static str,
    pub label: &'static str,
    pub formatted: String,
}

/// One row of the format table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeFormat {
    pub label: &'static str,
    pub value: String,
}

/// Large clock display: 24-hour time and a long date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockFace {
    pub time: String,
    pub date: String,
}

/// Everything the time converter shows for one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeReport {
    pub clock: ClockFace,
    pub zones: Vec<ZoneTime>,
    pub formats: Vec<TimeFormat>,
}

fn parse_zone(zone: &str) -> Result<Tz, TimeError> {
    zone.parse::<Tz>()
        .map_err(|_| TimeError::UnknownZone(zone.to_string()))
}

/// Render `instant` as wall-clock time in an IANA zone.
/// Unknown zone names yield "Invalid timezone" rather than an error.
pub fn format_in_zone(instant: DateTime<Utc>, zone: &str) -> String {
    match parse_zone(zone) {
        Ok(tz) => instant.with_timezone(&tz).format(ZONE_FORMAT).to_string(),
        Err(e) => {
            debug!("{}", e);
            INVALID_TIMEZONE.to_string()
        }
    }
}

/// The instant in every zone of the world clock, in display order
pub fn zone_times(instant: DateTime<Utc>) -> Vec<ZoneTime> {
    time_zones()
        .iter()
        .map(|tz| ZoneTime {
            zone: tz.value,
            label: tz.label,
            formatted: format_in_zone(instant, tz.value),
        })
        .collect()
}

/// ISO 8601, Unix seconds and milliseconds, and the HTTP-date style UTC string
pub fn common_formats(instant: DateTime<Utc>) -> Vec<TimeFormat> {
    vec![
        TimeFormat {
            label: "ISO 8601",
            value: instant.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
        },
        TimeFormat {
            label: "Unix Timestamp",
            value: instant.timestamp().to_string(),
        },
        TimeFormat {
            label: "Unix Timestamp (ms)",
            value: instant.timestamp_millis().to_string(),
        },
        TimeFormat {
            label: "UTC String",
            value: instant.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
        },
    ]
}

/// Clock display for `instant` as seen from `zone`
pub fn clock_face(instant: DateTime<Utc>, zone: &str) -> Result<ClockFace, TimeError> {
    let local = instant.with_timezone(&parse_zone(zone)?);
    Ok(ClockFace {
        time: local.format("%H:%M:%S").to_string(),
        date: local.format("%A, %B %-d, %Y").to_string(),
    })
}

/// Interpret a date ("YYYY-MM-DD") and time ("HH:MM" or "HH:MM:SS") as wall-clock time in `zone`.
///
/// A repeated hour at a fall-back transition resolves to its earlier occurrence.
/// A skipped hour at a spring-forward transition is an error.
pub fn custom_instant(date: &str, time: &str, zone: &str) -> Result<DateTime<Utc>, TimeError> {
    let tz = parse_zone(zone)?;
    let day = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| TimeError::InvalidDate(date.to_string()))?;
    let clock = NaiveTime::parse_from_str(time.trim(), "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time.trim(), "%H:%M"))
        .map_err(|_| TimeError::InvalidTime(time.to_string()))?;

    tz.from_local_datetime(&NaiveDateTime::new(day, clock))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| TimeError::NonexistentLocalTime {
            date: date.to_string(),
            time: time.to_string(),
            zone: zone.to_string(),
        })
}

/// The custom instant when both date and time are filled in, otherwise `now`
pub fn resolve_instant(
    date: Option<&str>,
    time: Option<&str>,
    zone: &str,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, TimeError> {
    match (date, time) {
        (Some(d), Some(t)) if !d.trim().is_empty() && !t.trim().is_empty() => {
            custom_instant(d, t, zone)
        }
        _ => Ok(now),
    }
}

/// Clock, world clock rows and format rows for one instant; `zone` is the viewer's zone
pub fn report(instant: DateTime<Utc>, zone: &str) -> Result<TimeReport, TimeError> {
    Ok(TimeReport {
        clock: clock_face(instant, zone)?,
        zones: zone_times(instant),
        formats: common_formats(instant),
    })
}
