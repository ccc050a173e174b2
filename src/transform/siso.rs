use tracing::trace;

use crate::core::{NumSeries, NumSeriesRef, Point};
use crate::error::{FlowError, FlowResult};
use crate::transform::function::{TransformFunction, check_arity};

/// Per-point recomputation hook for single-input single-output transforms.
///
/// The kernel sees the whole input series plus the index of the sample under
/// consideration and may yield zero or one output point. Kernels that keep
/// accumulators must tolerate being re-invoked for the sample sitting exactly
/// at the watermark: `calculate` reconsiders that sample on every call so a
/// revised final value propagates, and the replayed invocation must reproduce
/// the previously emitted point instead of accumulating twice.
pub trait SisoKernel: Default {
    /// Stable name the enclosing transform registers under.
    fn name(&self) -> &'static str;

    fn calculate_next_point(&mut self, input: &NumSeries, index: usize) -> Option<Point>;

    fn reset(&mut self) {}

    fn save_state(&self) -> serde_json::Value {
        serde_json::Value::Null
    }

    fn load_state(&mut self, _state: &serde_json::Value) -> FlowResult<()> {
        Ok(())
    }
}

/// One incremental pass of the watermark walk shared by [`Siso`] and the
/// multi-input transforms: inherit the driving input's retention window,
/// resync the watermark from whatever the output already holds, resume at
/// the nearest input index, and feed every sample at or past the watermark
/// to `next_point`, appending emissions through [`NumSeries::update`] so a
/// replayed watermark sample revises its point in place.
///
/// Returns `(start_index, emitted)` for the caller's trace event.
pub(crate) fn walk_incremental(
    input: &NumSeries,
    output: &mut NumSeries,
    watermark: &mut f64,
    mut next_point: impl FnMut(usize) -> Option<Point>,
) -> (usize, usize) {
    output.set_maximum_range_x(input.maximum_range_x());
    if let Some(last) = output.back() {
        *watermark = last.x;
    }

    let start = input.index_from_x(*watermark).unwrap_or(0);
    let mut emitted = 0_usize;
    for index in start..input.len() {
        let in_x = input.at(index).x;
        if in_x >= *watermark {
            if let Some(point) = next_point(index) {
                output.update(point);
                emitted += 1;
            }
            *watermark = in_x;
        }
    }
    (start, emitted)
}

/// Watermark-driven incremental engine wrapping a [`SisoKernel`].
///
/// Each `calculate` call resumes from the last processed timestamp instead of
/// rescanning the whole input: the starting index is the nearest index to the
/// watermark, so a streaming producer can push samples continuously and call
/// `calculate` repeatedly at O(new points) cost. The output series inherits
/// the input's retention window so derived data is trimmed consistently with
/// its source.
#[derive(Debug)]
pub struct Siso<K> {
    kernel: K,
    input: Option<NumSeriesRef>,
    last_timestamp: f64,
}

impl<K: Default> Default for Siso<K> {
    fn default() -> Self {
        Self::new(K::default())
    }
}

impl<K> Siso<K> {
    #[must_use]
    pub fn new(kernel: K) -> Self {
        Self {
            kernel,
            input: None,
            last_timestamp: f64::NEG_INFINITY,
        }
    }

    #[must_use]
    pub fn kernel(&self) -> &K {
        &self.kernel
    }
}

impl<K: SisoKernel + std::fmt::Debug> TransformFunction for Siso<K> {
    fn name(&self) -> &'static str {
        self.kernel.name()
    }

    fn num_inputs(&self) -> usize {
        1
    }

    fn num_outputs(&self) -> usize {
        1
    }

    fn set_data_source(&mut self, inputs: &[NumSeriesRef]) -> FlowResult<()> {
        check_arity("input", 1, inputs.len())?;
        self.input = Some(inputs[0].clone());
        Ok(())
    }

    fn calculate(&mut self, outputs: &[NumSeriesRef]) -> FlowResult<()> {
        check_arity("output", 1, outputs.len())?;
        let input_ref = self.input.clone().ok_or(FlowError::NotConfigured)?;
        let input = input_ref.borrow();
        if input.is_empty() {
            return Ok(());
        }

        let mut output = outputs[0].borrow_mut();
        let (start, emitted) =
            walk_incremental(&input, &mut output, &mut self.last_timestamp, |index| {
                self.kernel.calculate_next_point(&input, index)
            });
        trace!(
            transform = self.kernel.name(),
            start,
            emitted,
            watermark = self.last_timestamp,
            "incremental calculate pass"
        );
        Ok(())
    }

    fn reset(&mut self) {
        self.last_timestamp = f64::NEG_INFINITY;
        self.kernel.reset();
    }

    fn save_state(&self) -> serde_json::Value {
        self.kernel.save_state()
    }

    fn load_state(&mut self, state: &serde_json::Value) -> FlowResult<()> {
        self.kernel.load_state(state)
    }
}
