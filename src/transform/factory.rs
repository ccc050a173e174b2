use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::{FlowError, FlowResult};
use crate::transform::function::TransformFunction;
use crate::transform::siso::Siso;
use crate::transform::{
    Absolute, Derivative, Difference, Integral, MovingAverage, SamplesCount, ScaleOffset,
};

type Constructor = Box<dyn Fn() -> Box<dyn TransformFunction>>;

/// Maps transform names to constructors.
///
/// One factory is constructed per session by the host application and passed
/// explicitly to whatever needs to create transforms; there is no process-wide
/// singleton. Registration reads the name from a throwaway default instance,
/// so a transform's `name()` is the single source of truth for its key.
///
/// Duplicate registration policy: last registration wins, with a warning.
#[derive(Default)]
pub struct TransformFactory {
    creators: BTreeMap<String, Constructor>,
}

impl TransformFactory {
    /// Empty factory; register transforms explicitly.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory pre-loaded with every built-in transform.
    #[must_use]
    pub fn with_builtin_transforms() -> Self {
        let mut factory = Self::new();
        factory.register::<Siso<Absolute>>();
        factory.register::<Siso<Derivative>>();
        factory.register::<Siso<Integral>>();
        factory.register::<Siso<MovingAverage>>();
        factory.register::<Siso<SamplesCount>>();
        factory.register::<Siso<ScaleOffset>>();
        factory.register::<Difference>();
        factory
    }

    pub fn register<T: TransformFunction + Default + 'static>(&mut self) {
        let name = T::default().name().to_owned();
        let replaced = self
            .creators
            .insert(name.clone(), Box::new(|| Box::new(T::default())))
            .is_some();
        if replaced {
            warn!(transform = %name, "replacing previously registered transform");
        } else {
            debug!(transform = %name, "registered transform");
        }
    }

    /// Instantiates the transform registered under `name`.
    pub fn create(&self, name: &str) -> FlowResult<Box<dyn TransformFunction>> {
        self.creators
            .get(name)
            .map(|constructor| constructor())
            .ok_or_else(|| FlowError::UnregisteredTransform(name.to_owned()))
    }

    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.creators.contains_key(name)
    }

    /// All registered names, sorted.
    #[must_use]
    pub fn registered_transforms(&self) -> Vec<&str> {
        self.creators.keys().map(String::as_str).collect()
    }
}
