use serde::Serialize;

/// Shown in place of a formatted time when the zone name is not in the database
pub const INVALID_TIMEZONE: &str = "Invalid timezone";

/// A zone offered by the world clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeZoneInfo {
    /// IANA zone name
    pub value: &'static str,
    pub label: &'static str,
    /// Nominal standard offset in hours, for display only; formatting uses the zone rules
    pub offset: i8,
}

const fn zone(value: &'static str, label: &'static str, offset: i8) -> TimeZoneInfo {
    TimeZoneInfo {
        value,
        label,
        offset,
    }
}

static TIME_ZONES: [TimeZoneInfo; 10] = [
    zone("UTC", "UTC", 0),
    zone("America/New_York", "Eastern Time (ET)", -5),
    zone("America/Chicago", "Central Time (CT)", -6),
    zone("America/Denver", "Mountain Time (MT)", -7),
    zone("America/Los_Angeles", "Pacific Time (PT)", -8),
    zone("Europe/London", "London (GMT)", 0),
    zone("Europe/Paris", "Paris (CET)", 1),
    zone("Asia/Tokyo", "Tokyo (JST)", 9),
    zone("Asia/Shanghai", "Shanghai (CST)", 8),
    zone("Australia/Sydney", "Sydney (AEDT)", 11),
];

/// Zones in display order
pub fn time_zones() -> &'static [TimeZoneInfo] {
    &TIME_ZONES
}
