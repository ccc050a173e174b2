use chrono::{DateTime, Utc};

/// Single sample on the time axis: `x` is the timestamp, `y` the payload.
///
/// Numeric and string series share this shape; only the payload type differs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<V = f64> {
    pub x: f64,
    pub y: V,
}

impl<V> Point<V> {
    #[must_use]
    pub fn new(x: f64, y: V) -> Self {
        Self { x, y }
    }
}

impl Point {
    /// Bridges wall-clock producers to the `f64` time axis.
    #[must_use]
    pub fn from_datetime(time: DateTime<Utc>, y: f64) -> Self {
        Self {
            x: datetime_to_unix_seconds(time),
            y,
        }
    }
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}
