//! plotflow: incremental time-series storage and transform engine.
//!
//! This crate provides the storage-plus-dataflow core used by streaming
//! plotting frontends: named, timestamp-ordered series containers with
//! bounded retention, and a pluggable transform protocol that recomputes
//! derived series incrementally as new samples arrive.

pub mod core;
pub mod error;
pub mod telemetry;
pub mod transform;

pub use crate::core::{NumSeries, NumSeriesRef, Point, SeriesRegistry, StringSeries, Timeseries};
pub use crate::error::{FlowError, FlowResult};
pub use crate::transform::{TransformFactory, TransformFunction};
