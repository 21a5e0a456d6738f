//! Injectable time source for freshness timestamps.
//!
//! Write-direction conversions stamp `updated_at` / `captured_at` /
//! `created_at` from a [`Clock`] instead of reading system time directly, so
//! a [`FixedClock`] makes every conversion deterministic in tests.

use chrono::{SecondsFormat, Utc};

use crate::types::Timestamp;

/// A source of the current UTC time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Format a timestamp the way browsers' `Date.toISOString()` does:
/// millisecond precision with a `Z` suffix, e.g. `2026-03-04T13:05:09.120Z`.
pub fn iso8601(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter writing [`Timestamp`] fields with [`iso8601`].
///
/// Deserialization accepts any RFC 3339 string.
pub mod iso_millis {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::types::Timestamp;

    pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::iso8601(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let raw = String::deserialize(deserializer)?;
        chrono::DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&chrono::Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn iso8601_uses_millis_and_z_suffix() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 4, 13, 5, 9).unwrap()
            + chrono::Duration::milliseconds(120);
        assert_eq!(iso8601(&ts), "2026-03-04T13:05:09.120Z");
    }

    #[test]
    fn iso8601_pads_zero_millis() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(iso8601(&ts), "2026-01-01T00:00:00.000Z");
    }

    #[test]
    fn fixed_clock_is_stable() {
        let ts = Utc.with_ymd_and_hms(2026, 5, 6, 7, 8, 9).unwrap();
        let clock = FixedClock(ts);
        assert_eq!(clock.now(), ts);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn clock_reference_delegates() {
        let ts = Utc.with_ymd_and_hms(2026, 5, 6, 7, 8, 9).unwrap();
        let clock = FixedClock(ts);
        let by_ref: &dyn Clock = &clock;
        assert_eq!((&by_ref).now(), ts);
    }
}
