use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::consts::TIMESTAMP_FORMAT;
use crate::error::AppError;

/// Timezone used to stamp log entries
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) enum Timezone {
    #[default]
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let name = raw.trim();
        if name.is_empty() || name.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if name.eq_ignore_ascii_case("utc") || name.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(name)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: name.to_string(),
            })
    }

    /// Render an instant as a log timestamp in this timezone
    pub(crate) fn format(self, at: DateTime<Utc>) -> String {
        match self {
            Timezone::Local => at.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string(),
            Timezone::Named(tz) => at.with_timezone(&tz).format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    pub(crate) fn now(self) -> String {
        self.format(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_missing_or_blank_is_local() {
        assert_eq!(Timezone::parse(None).unwrap(), Timezone::Local);
        assert_eq!(Timezone::parse(Some("  ")).unwrap(), Timezone::Local);
        assert_eq!(Timezone::parse(Some("LOCAL")).unwrap(), Timezone::Local);
    }

    #[test]
    fn parse_utc_aliases() {
        for raw in ["utc", "UTC", "z", " Z "] {
            assert_eq!(
                Timezone::parse(Some(raw)).unwrap(),
                Timezone::Named(chrono_tz::UTC)
            );
        }
    }

    #[test]
    fn parse_named_timezone() {
        assert_eq!(
            Timezone::parse(Some("Europe/Berlin")).unwrap(),
            Timezone::Named(chrono_tz::Europe::Berlin)
        );
    }

    #[test]
    fn parse_invalid_timezone_returns_error() {
        let err = Timezone::parse(Some("Mars/Olympus")).unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn format_uses_log_timestamp_layout() {
        let at = "2026-02-12T10:00:05Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(
            Timezone::Named(chrono_tz::UTC).format(at),
            "2026-02-12 10:00:05"
        );
    }

    #[test]
    fn format_shifts_into_named_zone() {
        let at = "2026-06-15T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let tz = Timezone::parse(Some("America/New_York")).unwrap();
        // EDT is UTC-4 in June
        assert_eq!(tz.format(at), "2026-06-15 08:00:00");
    }
}
