pub mod registry;
pub mod timeseries;
pub mod types;

pub use registry::{NumSeriesRef, SeriesRegistry, StringSeriesRef};
pub use timeseries::{NumSeries, StringSeries, Timeseries};
pub use types::Point;
