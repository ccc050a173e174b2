use crate::core::{NumSeries, Point};
use crate::error::{FlowError, FlowResult};
use crate::transform::siso::SisoKernel;

/// Counts samples per fixed time interval.
///
/// Emits one point per closed interval, timestamped at the interval boundary.
/// The interval still in progress emits nothing until a later sample crosses
/// its boundary; an emission stamped past the newest input sample would become
/// the engine's resume point and make it skip everything older. A sample is
/// counted at most once across calls (`last_seen_x` guard), and the watermark
/// replay returns the cached emission so repeated or per-sample `calculate`
/// calls produce the same output as one batch pass.
#[derive(Debug, Clone, Copy)]
pub struct SamplesCount {
    /// Interval length in seconds.
    pub interval: f64,
    interval_end: f64,
    count: u64,
    last_seen_x: f64,
    last_emit: Option<Point>,
}

impl Default for SamplesCount {
    fn default() -> Self {
        Self {
            interval: 1.0,
            interval_end: 0.0,
            count: 0,
            last_seen_x: f64::NEG_INFINITY,
            last_emit: None,
        }
    }
}

impl SamplesCount {
    #[must_use]
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            ..Self::default()
        }
    }
}

impl SisoKernel for SamplesCount {
    fn name(&self) -> &'static str {
        "samples_count"
    }

    fn calculate_next_point(&mut self, input: &NumSeries, index: usize) -> Option<Point> {
        let point = *input.at(index);
        if index == 0 && self.last_seen_x == f64::NEG_INFINITY {
            self.interval_end = point.x + self.interval;
            self.count = 0;
        }
        if point.x <= self.last_seen_x {
            // Already counted; replay the cached emission, if any.
            return self.last_emit;
        }
        self.last_seen_x = point.x;
        self.count += 1;

        if point.x > self.interval_end {
            let out = Point::new(self.interval_end, self.count as f64);
            while point.x > self.interval_end {
                self.interval_end += self.interval;
            }
            self.count = 0;
            self.last_emit = Some(out);
            return Some(out);
        }
        None
    }

    fn reset(&mut self) {
        let interval = self.interval;
        *self = Self::new(interval);
    }

    fn save_state(&self) -> serde_json::Value {
        serde_json::json!({ "interval": self.interval })
    }

    fn load_state(&mut self, state: &serde_json::Value) -> FlowResult<()> {
        let interval = state
            .get("interval")
            .and_then(serde_json::Value::as_f64)
            .ok_or_else(|| FlowError::InvalidState("missing 'interval'".to_owned()))?;
        *self = Self::new(interval);
        Ok(())
    }
}
