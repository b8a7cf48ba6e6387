use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Milliseconds in one civil day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// MJD of the Unix epoch (1970-01-01 00:00:00 UTC).
const MJD_UNIX_EPOCH: f64 = 40587.0;

/// Modified Julian Date representation.
/// MJD 0 = 1858-11-17 00:00:00 UTC
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ModifiedJulianDate(qtty::Days);

impl ModifiedJulianDate {
    /// Create a new MJD value.
    pub fn new<V: Into<qtty::Days>>(v: V) -> Self {
        Self(v.into())
    }

    /// Raw MJD value as f64.
    pub fn value(&self) -> f64 {
        self.0.value()
    }

    /// Convert to Unix timestamp (seconds since 1970-01-01 00:00:00 UTC).
    pub fn to_unix_timestamp(&self) -> f64 {
        (self.value() - MJD_UNIX_EPOCH) * 86400.0
    }

    /// Create from Unix timestamp (seconds since 1970-01-01 00:00:00 UTC).
    pub fn from_unix_timestamp(timestamp: f64) -> Self {
        Self::new(timestamp / 86400.0 + MJD_UNIX_EPOCH)
    }

    /// Convert to chrono DateTime<Utc>, rounded to whole milliseconds.
    ///
    /// `None` for non-finite values and values outside chrono's range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let millis = ((self.value() - MJD_UNIX_EPOCH) * MILLIS_PER_DAY as f64).round();
        if !millis.is_finite() || millis < i64::MIN as f64 || millis >= i64::MAX as f64 {
            return None;
        }
        DateTime::from_timestamp_millis(millis as i64)
    }

    /// Create from chrono DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self::new(dt.timestamp_millis() as f64 / MILLIS_PER_DAY as f64 + MJD_UNIX_EPOCH)
    }
}

impl From<f64> for ModifiedJulianDate {
    fn from(v: f64) -> Self {
        ModifiedJulianDate::new(v)
    }
}

impl From<DateTime<Utc>> for ModifiedJulianDate {
    fn from(dt: DateTime<Utc>) -> Self {
        ModifiedJulianDate::from_datetime(dt)
    }
}

/// Convert a fractional day count to whole milliseconds.
pub fn days_to_millis(days: f64) -> i64 {
    (days * MILLIS_PER_DAY as f64).round() as i64
}

/// Convert milliseconds to a fractional day count.
pub fn millis_to_days(millis: i64) -> f64 {
    millis as f64 / MILLIS_PER_DAY as f64
}
