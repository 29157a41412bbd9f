mod grid_view;
mod hull_view;
mod sort_view;

pub use grid_view::{GridState, GridView};
pub use hull_view::{HullState, HullView};
pub use sort_view::{SortState, SortView};
