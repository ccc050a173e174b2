use crate::core::{NumSeries, Point};
use crate::transform::siso::SisoKernel;

/// Maps every sample to its absolute value. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct Absolute;

impl SisoKernel for Absolute {
    fn name(&self) -> &'static str {
        "absolute"
    }

    fn calculate_next_point(&mut self, input: &NumSeries, index: usize) -> Option<Point> {
        let point = input.at(index);
        Some(Point::new(point.x, point.y.abs()))
    }
}
