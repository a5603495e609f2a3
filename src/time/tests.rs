#[cfg(test)]
mod tests {
    use super::super::clock::{
        clock_face, common_formats, custom_instant, format_in_zone, report, resolve_instant,
        zone_times,
    };
    use super::super::error::TimeError;
    use super::super::zones::{time_zones, INVALID_TIMEZONE};
    use chrono::{DateTime, TimeZone, Utc};

    // Sunday 2025-01-05 15:04:05 UTC
    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 5, 15, 4, 5).unwrap()
    }

    #[test]
    fn test_zone_table() {
        let zones = time_zones();
        assert_eq!(zones.len(), 10);
        assert_eq!(zones[0].value, "UTC");
        assert_eq!(zones[1].label, "Eastern Time (ET)");
        assert_eq!(zones[1].offset, -5);
        assert_eq!(zones[9].value, "Australia/Sydney");
        assert_eq!(zones[9].offset, 11);
    }

    #[test]
    fn test_format_in_zone() {
        assert_eq!(format_in_zone(instant(), "UTC"), "January 5, 2025 at 03:04:05 PM");
        assert_eq!(
            format_in_zone(instant(), "America/New_York"),
            "January 5, 2025 at 10:04:05 AM"
        );
        assert_eq!(
            format_in_zone(instant(), "Europe/Paris"),
            "January 5, 2025 at 04:04:05 PM"
        );
        // Past midnight local time rolls the date
        assert_eq!(
            format_in_zone(instant(), "Asia/Tokyo"),
            "January 6, 2025 at 12:04:05 AM"
        );
        assert_eq!(
            format_in_zone(instant(), "Australia/Sydney"),
            "January 6, 2025 at 02:04:05 AM"
        );
    }

    #[test]
    fn test_format_follows_daylight_saving() {
        let summer = Utc.with_ymd_and_hms(2025, 7, 1, 13, 30, 0).unwrap();
        assert_eq!(
            format_in_zone(summer, "America/New_York"),
            "July 1, 2025 at 09:30:00 AM"
        );
        assert_eq!(
            format_in_zone(summer, "Europe/London"),
            "July 1, 2025 at 02:30:00 PM"
        );
    }

    #[test]
    fn test_invalid_timezone() {
        assert_eq!(format_in_zone(instant(), "Mars/Olympus_Mons"), INVALID_TIMEZONE);
        assert_eq!(format_in_zone(instant(), ""), "Invalid timezone");
    }

    #[test]
    fn test_zone_times_cover_every_zone() {
        let rows = zone_times(instant());
        assert_eq!(rows.len(), time_zones().len());
        assert!(rows.iter().all(|r| r.formatted != INVALID_TIMEZONE));
        assert_eq!(rows[8].label, "Shanghai (CST)");
        assert_eq!(rows[8].formatted, "January 5, 2025 at 11:04:05 PM");
    }

    #[test]
    fn test_common_formats() {
        let formats = common_formats(instant());
        let values: Vec<_> = formats.iter().map(|f| (f.label, f.value.as_str())).collect();
        assert_eq!(
            values,
            vec![
                ("ISO 8601", "2025-01-05T15:04:05.000Z"),
                ("Unix Timestamp", "1736089445"),
                ("Unix Timestamp (ms)", "1736089445000"),
                ("UTC String", "Sun, 05 Jan 2025 15:04:05 GMT"),
            ]
        );
    }

    #[test]
    fn test_clock_face() {
        let face = clock_face(instant(), "UTC").unwrap();
        assert_eq!(face.time, "15:04:05");
        assert_eq!(face.date, "Sunday, January 5, 2025");

        let face = clock_face(instant(), "Asia/Tokyo").unwrap();
        assert_eq!(face.time, "00:04:05");
        assert_eq!(face.date, "Monday, January 6, 2025");

        assert_eq!(
            clock_face(instant(), "Nowhere"),
            Err(TimeError::UnknownZone("Nowhere".to_string()))
        );
    }

    #[test]
    fn test_custom_instant() {
        let dt = custom_instant("2025-07-01", "09:30", "America/New_York").unwrap();
        assert_eq!(dt.timestamp(), 1751376600);

        let dt = custom_instant("2025-01-05", "15:04:05", "UTC").unwrap();
        assert_eq!(dt, instant());
    }

    #[test]
    fn test_custom_instant_at_transitions() {
        // 02:30 is skipped when New York springs forward
        assert_eq!(
            custom_instant("2025-03-09", "02:30", "America/New_York"),
            Err(TimeError::NonexistentLocalTime {
                date: "2025-03-09".to_string(),
                time: "02:30".to_string(),
                zone: "America/New_York".to_string(),
            })
        );
        // 01:30 happens twice when it falls back; the daylight one wins
        let dt = custom_instant("2025-11-02", "01:30", "America/New_York").unwrap();
        assert_eq!(dt.timestamp(), 1762061400);
    }

    #[test]
    fn test_custom_instant_rejects_bad_input() {
        assert_eq!(
            custom_instant("2025-13-01", "10:00", "UTC"),
            Err(TimeError::InvalidDate("2025-13-01".to_string()))
        );
        assert_eq!(
            custom_instant("2025-01-01", "25:00", "UTC"),
            Err(TimeError::InvalidTime("25:00".to_string()))
        );
        assert_eq!(
            custom_instant("2025-01-01", "10:00", "Atlantis/Capital"),
            Err(TimeError::UnknownZone("Atlantis/Capital".to_string()))
        );
    }

    #[test]
    fn test_resolve_instant_needs_both_fields() {
        let now = instant();
        assert_eq!(resolve_instant(None, None, "UTC", now), Ok(now));
        assert_eq!(resolve_instant(Some("2025-07-01"), None, "UTC", now), Ok(now));
        assert_eq!(resolve_instant(Some("2025-07-01"), Some(""), "UTC", now), Ok(now));

        let custom = resolve_instant(Some("2025-07-01"), Some("13:30"), "UTC", now).unwrap();
        assert_eq!(custom.timestamp(), 1751376600);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let value = serde_json::to_value(report(instant(), "UTC").unwrap()).unwrap();
        assert_eq!(value["clock"]["time"], "15:04:05");
        assert_eq!(value["zones"][1]["zone"], "America/New_York");
        assert_eq!(value["zones"][1]["formatted"], "January 5, 2025 at 10:04:05 AM");
        assert_eq!(value["formats"][1]["value"], "1736089445");
    }
}
