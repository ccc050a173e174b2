use serde::{Deserialize, Serialize};

use crate::core::{NumSeries, Point};
use crate::error::{FlowError, FlowResult};
use crate::transform::siso::SisoKernel;

/// Affine map `y' = scale * y + offset`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScaleOffset {
    pub scale: f64,
    pub offset: f64,
}

impl Default for ScaleOffset {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: 0.0,
        }
    }
}

impl SisoKernel for ScaleOffset {
    fn name(&self) -> &'static str {
        "scale_offset"
    }

    fn calculate_next_point(&mut self, input: &NumSeries, index: usize) -> Option<Point> {
        let point = input.at(index);
        Some(Point::new(point.x, self.scale * point.y + self.offset))
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
