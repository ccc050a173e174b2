use crate::core::{NumSeries, Point};
use crate::transform::siso::SisoKernel;

/// First-order finite difference against the previous sample.
///
/// Pure function of the input window, so replaying the sample at the
/// watermark re-emits the identical point. Nothing is emitted for the first
/// sample or across a non-increasing time step.
#[derive(Debug, Clone, Copy, Default)]
pub struct Derivative;

impl SisoKernel for Derivative {
    fn name(&self) -> &'static str {
        "derivative"
    }

    fn calculate_next_point(&mut self, input: &NumSeries, index: usize) -> Option<Point> {
        if index == 0 {
            return None;
        }
        let current = input.at(index);
        let previous = input.at(index - 1);
        let dx = current.x - previous.x;
        if dx <= 0.0 {
            return None;
        }
        Some(Point::new(current.x, (current.y - previous.y) / dx))
    }
}
