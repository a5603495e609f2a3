// World clock: one instant rendered across a fixed set of time zones

pub mod clock;
pub mod error;
pub mod zones;

#[cfg(test)]
mod tests;

pub use clock::{
    clock_face, common_formats, custom_instant, format_in_zone, report, resolve_instant,
    zone_times, ClockFace, TimeFormat, TimeReport, ZoneTime,
};
pub use error::TimeError;
pub use zones::{time_zones, TimeZoneInfo, INVALID_TIMEZONE};
