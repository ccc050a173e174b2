use crate::core::{NumSeries, Point};
use crate::transform::siso::SisoKernel;

/// Cumulative trapezoidal integral of the input.
///
/// Keeps a running sum, so the watermark replay contract matters: when the
/// same sample is reconsidered, the cached last emission is returned instead
/// of accumulating the final trapezoid a second time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integral {
    accumulated: f64,
    prev: Option<(f64, f64)>,
    last_emit: Option<Point>,
}

impl SisoKernel for Integral {
    fn name(&self) -> &'static str {
        "integral"
    }

    fn calculate_next_point(&mut self, input: &NumSeries, index: usize) -> Option<Point> {
        let point = *input.at(index);
        match self.prev {
            None => {
                self.prev = Some((point.x, point.y));
                None
            }
            Some((prev_x, prev_y)) => {
                if point.x > prev_x {
                    self.accumulated += 0.5 * (point.y + prev_y) * (point.x - prev_x);
                    self.prev = Some((point.x, point.y));
                    let out = Point::new(point.x, self.accumulated);
                    self.last_emit = Some(out);
                    Some(out)
                } else {
                    // Watermark replay of the previous sample.
                    self.last_emit
                }
            }
        }
    }

    fn reset(&mut self) {
        self.accumulated = 0.0;
        self.prev = None;
        self.last_emit = None;
    }
}
