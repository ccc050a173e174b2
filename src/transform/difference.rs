use smallvec::SmallVec;
use tracing::trace;

use crate::core::{NumSeriesRef, Point};
use crate::error::{FlowError, FlowResult};
use crate::transform::function::{TransformFunction, check_arity};
use crate::transform::siso::walk_incremental;

/// Two-input transform: `out(x) = a(x) - b(nearest x)`.
///
/// Exercises the generic N-input protocol directly instead of going through
/// [`Siso`](crate::transform::Siso). The walk follows the same watermark
/// discipline as the SISO engine, driven by the first input's timestamps; the
/// second input is sampled at the nearest index to each of them.
#[derive(Debug)]
pub struct Difference {
    inputs: SmallVec<[NumSeriesRef; 2]>,
    last_timestamp: f64,
}

impl Default for Difference {
    fn default() -> Self {
        Self {
            inputs: SmallVec::new(),
            last_timestamp: f64::NEG_INFINITY,
        }
    }
}

impl TransformFunction for Difference {
    fn name(&self) -> &'static str {
        "difference"
    }

    fn num_inputs(&self) -> usize {
        2
    }

    fn num_outputs(&self) -> usize {
        1
    }

    fn set_data_source(&mut self, inputs: &[NumSeriesRef]) -> FlowResult<()> {
        check_arity("input", 2, inputs.len())?;
        self.inputs = inputs.iter().cloned().collect();
        Ok(())
    }

    fn calculate(&mut self, outputs: &[NumSeriesRef]) -> FlowResult<()> {
        check_arity("output", 1, outputs.len())?;
        if self.inputs.len() != 2 {
            return Err(FlowError::NotConfigured);
        }
        let a = self.inputs[0].borrow();
        let b = self.inputs[1].borrow();
        if a.is_empty() || b.is_empty() {
            return Ok(());
        }

        let mut output = outputs[0].borrow_mut();
        let (start, emitted) =
            walk_incremental(&a, &mut output, &mut self.last_timestamp, |index| {
                let point = *a.at(index);
                b.y_from_x(point.x)
                    .map(|other| Point::new(point.x, point.y - other))
            });
        trace!(
            start,
            emitted,
            watermark = self.last_timestamp,
            "pairwise difference pass"
        );
        Ok(())
    }

    fn reset(&mut self) {
        self.last_timestamp = f64::NEG_INFINITY;
    }
}
