pub mod absolute;
pub mod derivative;
pub mod difference;
pub mod factory;
pub mod function;
pub mod integral;
pub mod moving_average;
pub mod samples_count;
pub mod scale_offset;
pub mod siso;

pub use absolute::Absolute;
pub use derivative::Derivative;
pub use difference::Difference;
pub use factory::TransformFactory;
pub use function::TransformFunction;
pub use integral::Integral;
pub use moving_average::MovingAverage;
pub use samples_count::SamplesCount;
pub use scale_offset::ScaleOffset;
pub use siso::{Siso, SisoKernel};
