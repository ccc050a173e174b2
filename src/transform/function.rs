use crate::core::NumSeriesRef;
use crate::error::{FlowError, FlowResult};

/// Contract for a transform with fixed input/output arity that derives output
/// series from input series incrementally.
///
/// Lifecycle: an instance starts unconfigured; `set_data_source` binds the
/// declared number of input handles, after which `calculate` may be invoked
/// repeatedly as new samples arrive. `calculate` mutates the bound output
/// series in place and must never reallocate them, so readers holding the same
/// handles observe the derived data directly.
///
/// Inputs and outputs must be distinct series. Aliasing an output to one of
/// the inputs is a caller bug and fails loudly (the shared-handle borrow
/// panics) rather than corrupting data.
pub trait TransformFunction: std::fmt::Debug {
    /// Stable name used as the factory registry key.
    fn name(&self) -> &'static str;

    fn num_inputs(&self) -> usize;

    fn num_outputs(&self) -> usize;

    /// Binds input series. Fails with [`FlowError::ArityMismatch`] when the
    /// number of handles differs from `num_inputs()`.
    fn set_data_source(&mut self, inputs: &[NumSeriesRef]) -> FlowResult<()>;

    /// Incrementally (re)populates the output series.
    ///
    /// Fails with [`FlowError::ArityMismatch`] when the number of handles
    /// differs from `num_outputs()`, and with [`FlowError::NotConfigured`]
    /// before a data source is bound. An empty input is a benign no-op.
    fn calculate(&mut self, outputs: &[NumSeriesRef]) -> FlowResult<()>;

    /// Reinitializes watermark and accumulator state without touching the
    /// bound configuration.
    fn reset(&mut self) {}

    /// Opaque parameter blob sufficient to reconstruct this transform via
    /// `load_state`. Stateless transforms return `Value::Null`.
    fn save_state(&self) -> serde_json::Value {
        serde_json::Value::Null
    }

    fn load_state(&mut self, _state: &serde_json::Value) -> FlowResult<()> {
        Ok(())
    }
}

pub(crate) fn check_arity(role: &'static str, expected: usize, actual: usize) -> FlowResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(FlowError::ArityMismatch {
            role,
            expected,
            actual,
        })
    }
}
