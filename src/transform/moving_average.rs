use serde::{Deserialize, Serialize};

use crate::core::{NumSeries, Point};
use crate::error::{FlowError, FlowResult};
use crate::transform::siso::SisoKernel;

/// Arithmetic mean over a sample-count window ending at the current index.
///
/// Windows shorter than `window` at the head of the series average whatever
/// is available, so the output starts at the first input sample. Pure
/// function of the input window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MovingAverage {
    pub window: usize,
}

impl Default for MovingAverage {
    fn default() -> Self {
        Self { window: 10 }
    }
}

impl SisoKernel for MovingAverage {
    fn name(&self) -> &'static str {
        "moving_average"
    }

    fn calculate_next_point(&mut self, input: &NumSeries, index: usize) -> Option<Point> {
        if self.window == 0 {
            return None;
        }
        let start = index.saturating_sub(self.window - 1);
        let count = index - start + 1;
        let sum: f64 = (start..=index).map(|i| input.at(i).y).sum();
        Some(Point::new(input.at(index).x, sum / count as f64))
    }

    fn save_state(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    fn load_state(&mut self, state: &serde_json::Value) -> FlowResult<()> {
        *self = serde_json::from_value(state.clone())
            .map_err(|err| FlowError::InvalidState(err.to_string()))?;
        Ok(())
    }
}
