use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::debug;

use crate::core::timeseries::{NumSeries, StringSeries};

/// Shared handle to a numeric series.
///
/// The registry is the logical owner of every series for the lifetime of a
/// session; transforms and readers hold clones of these handles only while
/// they are configured against the series. The engine is single-threaded
/// cooperative, which `Rc<RefCell<_>>` makes explicit in the types — producers
/// on other threads must funnel through one external lock around the registry.
pub type NumSeriesRef = Rc<RefCell<NumSeries>>;
pub type StringSeriesRef = Rc<RefCell<StringSeries>>;

/// Maps channel names to series, with separate numeric and string namespaces.
///
/// Series are created lazily on first reference and live until the registry is
/// cleared or dropped. Insertion order of channels is preserved so enumeration
/// is stable for consumers such as a channel-selection UI.
#[derive(Debug, Default)]
pub struct SeriesRegistry {
    numeric: IndexMap<String, NumSeriesRef>,
    strings: IndexMap<String, StringSeriesRef>,
}

impl SeriesRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the numeric series under `name`, creating it if missing.
    pub fn get_or_create(&mut self, name: &str) -> NumSeriesRef {
        if let Some(series) = self.numeric.get(name) {
            return Rc::clone(series);
        }
        debug!(channel = name, "created numeric series");
        let series = Rc::new(RefCell::new(NumSeries::new(name)));
        self.numeric.insert(name.to_owned(), Rc::clone(&series));
        series
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<NumSeriesRef> {
        self.numeric.get(name).map(Rc::clone)
    }

    /// Returns the string series under `name`, creating it if missing.
    pub fn get_or_create_strings(&mut self, name: &str) -> StringSeriesRef {
        if let Some(series) = self.strings.get(name) {
            return Rc::clone(series);
        }
        debug!(channel = name, "created string series");
        let series = Rc::new(RefCell::new(StringSeries::new(name)));
        self.strings.insert(name.to_owned(), Rc::clone(&series));
        series
    }

    #[must_use]
    pub fn get_strings(&self, name: &str) -> Option<StringSeriesRef> {
        self.strings.get(name).map(Rc::clone)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.numeric.contains_key(name)
    }

    pub fn numeric_names(&self) -> impl Iterator<Item = &str> {
        self.numeric.keys().map(String::as_str)
    }

    pub fn string_names(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }

    #[must_use]
    pub fn num_series(&self) -> usize {
        self.numeric.len() + self.strings.len()
    }

    /// Removes a numeric channel entirely. Outstanding handles stay valid but
    /// are no longer reachable by name.
    pub fn remove(&mut self, name: &str) -> bool {
        self.numeric.shift_remove(name).is_some()
    }

    pub fn remove_strings(&mut self, name: &str) -> bool {
        self.strings.shift_remove(name).is_some()
    }

    /// Empties every series while keeping the channels registered; used when a
    /// session reloads data into the same channel layout.
    pub fn clear_points(&mut self) {
        for series in self.numeric.values() {
            series.borrow_mut().clear();
        }
        for series in self.strings.values() {
            series.borrow_mut().clear();
        }
        debug!(channels = self.num_series(), "cleared all series points");
    }

    /// Drops every channel.
    pub fn clear(&mut self) {
        self.numeric.clear();
        self.strings.clear();
    }
}
