use std::cmp::Ordering;
use std::collections::VecDeque;
use std::ops::Index;

use tracing::trace;

use crate::core::types::Point;

/// Sentinel for `latest_time` while the series holds no points.
const UNSET_LATEST_TIME: f64 = f64::NEG_INFINITY;

/// Named, timestamp-ordered sequence of points with a sliding retention window.
///
/// Appends are O(1) as long as timestamps arrive in order; a late sample is
/// repaired with an upper-bound ordered insert so readers always observe the
/// points sorted ascending by `x`. When `maximum_range_x` is set, the oldest
/// points are evicted after every insertion until the span
/// `back().x - front().x` fits again (at least 2 points are always retained).
#[derive(Debug, Clone)]
pub struct Timeseries<V = f64> {
    name: String,
    points: VecDeque<Point<V>>,
    max_range_x: f64,
    latest_time: f64,
}

pub type NumSeries = Timeseries<f64>;
pub type StringSeries = Timeseries<String>;

impl<V> Timeseries<V> {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: VecDeque::new(),
            max_range_x: f64::MAX,
            latest_time: UNSET_LATEST_TIME,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inserts a sample, keeping the series sorted ascending by `x`.
    ///
    /// In-order samples (`x >= latest_time`) append at the back; anything older
    /// is placed with an upper-bound search so equal timestamps keep arrival
    /// order. The retention window is enforced afterwards.
    pub fn push_back(&mut self, point: Point<V>) {
        if point.x < self.latest_time {
            let pos = self.points.partition_point(|p| p.x <= point.x);
            self.points.insert(pos, point);
            self.latest_time = self.points[self.points.len() - 1].x;
        } else {
            self.latest_time = point.x;
            self.points.push_back(point);
        }
        self.trim_range();
    }

    /// Inserts with realtime-update semantics: a sample whose `x` equals the
    /// latest timestamp replaces the back sample instead of duplicating it;
    /// anything else defers to [`push_back`](Self::push_back).
    ///
    /// This is the append discipline used by transform outputs, so that
    /// re-deriving the point at the watermark revises it in place.
    pub fn update(&mut self, point: Point<V>) {
        let replaces_back = self
            .points
            .back()
            .is_some_and(|back| point.x.total_cmp(&back.x) == Ordering::Equal);
        if replaces_back {
            if let Some(back) = self.points.back_mut() {
                *back = point;
            }
        } else {
            self.push_back(point);
        }
    }

    /// Index of the point whose `x` is nearest to the query, `None` when empty.
    ///
    /// Tie-break: the lower-bound (later) candidate wins unless its predecessor
    /// is strictly closer.
    #[must_use]
    pub fn index_from_x(&self, x: f64) -> Option<usize> {
        if self.points.is_empty() {
            return None;
        }
        let lower = self.points.partition_point(|p| p.x < x);
        let mut index = lower.min(self.points.len() - 1);
        if index > 0 && (self.points[index - 1].x - x).abs() < (self.points[index].x - x).abs() {
            index -= 1;
        }
        Some(index)
    }

    /// Removes the oldest point. `latest_time` resets once the series drains.
    pub fn pop_front(&mut self) -> Option<Point<V>> {
        let point = self.points.pop_front();
        if self.points.is_empty() {
            self.latest_time = UNSET_LATEST_TIME;
        }
        point
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.latest_time = UNSET_LATEST_TIME;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Unchecked random access; panics when `index` is out of bounds.
    ///
    /// An out-of-range index signals a caller bug in index bookkeeping (for
    /// example a stale watermark), so this fails loudly instead of returning
    /// incorrect data. Use [`get`](Self::get) for the checked variant.
    #[must_use]
    pub fn at(&self, index: usize) -> &Point<V> {
        &self.points[index]
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point<V>> {
        self.points.get(index)
    }

    #[must_use]
    pub fn front(&self) -> Option<&Point<V>> {
        self.points.front()
    }

    #[must_use]
    pub fn back(&self) -> Option<&Point<V>> {
        self.points.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point<V>> {
        self.points.iter()
    }

    /// Timestamp of the newest sample, `NEG_INFINITY` while the series is empty.
    #[must_use]
    pub fn latest_time(&self) -> f64 {
        self.latest_time
    }

    /// `(front.x, back.x)` of the retained span, `None` when empty.
    #[must_use]
    pub fn range_x(&self) -> Option<(f64, f64)> {
        match (self.points.front(), self.points.back()) {
            (Some(front), Some(back)) => Some((front.x, back.x)),
            _ => None,
        }
    }

    /// Bounds the span `back().x - front().x`; tightening trims immediately.
    pub fn set_maximum_range_x(&mut self, max_range: f64) {
        self.max_range_x = max_range;
        self.trim_range();
    }

    #[must_use]
    pub fn maximum_range_x(&self) -> f64 {
        self.max_range_x
    }

    fn trim_range(&mut self) {
        if self.max_range_x >= f64::MAX {
            return;
        }
        let mut evicted = 0_usize;
        while self.points.len() > 2 {
            let span = self.points[self.points.len() - 1].x - self.points[0].x;
            if span <= self.max_range_x {
                break;
            }
            self.points.pop_front();
            evicted += 1;
        }
        if evicted > 0 {
            trace!(
                series = %self.name,
                evicted,
                retained = self.points.len(),
                "trimmed retention window"
            );
        }
    }
}

impl<V: Clone> Timeseries<V> {
    /// Value at the nearest index to `x`, `None` when the series is empty.
    #[must_use]
    pub fn y_from_x(&self, x: f64) -> Option<V> {
        self.index_from_x(x).map(|index| self.points[index].y.clone())
    }
}

impl<V> Index<usize> for Timeseries<V> {
    type Output = Point<V>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}
