pub mod catalog;
pub mod dataset;
pub mod display;
pub mod filter;
pub mod grid;
pub mod render;
pub mod view;

pub use catalog::{BlockGroup, VenueGroup, block_groups, instructors, venue_groups};
pub use dataset::{
    CourseEntry, CourseSession, Dataset, DatasetError, DatasetResult, TimePeriod,
    load_dataset_from_json, save_dataset_to_json, validate_dataset,
};
pub use display::{COURSE_NAME_NOT_FOUND, DESIGNATOR_NOT_FOUND, CellColor, class_color};
pub use filter::{FilterMode, FilteredRow, resolve_filter};
pub use grid::{CellState, GridGeometry, day_range, layout, time_slots};
pub use render::{NO_FILTER_BANNER, NO_RESULTS_BANNER, render_grid, render_view};
pub use view::{ScheduleView, ViewState};
