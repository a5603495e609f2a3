use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time '{0}' (expected HH:MM or HH:MM:SS)")]
    InvalidTime(String),

    #[error("Unknown time zone '{0}'")]
    UnknownZone(String),

    #[error("{date} {time} does not exist in {zone}")]
    NonexistentLocalTime {
        date: String,
        time: String,
        zone: String,
    },
}
