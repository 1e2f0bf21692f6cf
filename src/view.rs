use crate::dataset::Dataset;
use crate::filter::{FilterMode, FilteredRow, resolve_filter};

/// What the viewer should currently show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewState<'a> {
    /// No filter value has been entered.
    NoFilterSelected,
    /// A value was entered but nothing matched it.
    NoResults,
    Showing(&'a [FilteredRow]),
}

/// A dataset plus the active filter, recomputing matches on every change.
#[derive(Debug, Clone)]
pub struct ScheduleView {
    dataset: Dataset,
    mode: FilterMode,
    value: Option<String>,
    rows: Option<Vec<FilteredRow>>,
}

impl ScheduleView {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            mode: FilterMode::Block,
            value: None,
            rows: None,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn rows(&self) -> Option<&[FilteredRow]> {
        self.rows.as_deref()
    }

    /// Switching to a different mode discards the current filter. Setting
    /// the mode that is already active keeps it.
    pub fn set_mode(&mut self, mode: FilterMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.value = None;
        self.rows = None;
    }

    /// Applies a filter value under the current mode. Blank input clears
    /// the filter instead.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            self.clear_value();
            return;
        }
        self.rows = resolve_filter(&self.dataset, self.mode, &value);
        self.value = Some(value);
    }

    pub fn clear_value(&mut self) {
        self.value = None;
        self.rows = None;
    }

    /// Replaces the dataset and clears the filter.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.clear_value();
    }

    pub fn state(&self) -> ViewState<'_> {
        match (&self.value, &self.rows) {
            (None, _) => ViewState::NoFilterSelected,
            (Some(_), None) => ViewState::NoResults,
            (Some(_), Some(rows)) => ViewState::Showing(rows),
        }
    }
}
