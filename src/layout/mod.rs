//! Page geometry and layout planning.

mod geometry;
mod planner;

pub use geometry::{
    FontTier, Orientation, PageGeometry, PageSize, CONTINUED_BASELINE, MARGIN_BOTTOM, MARGIN_X,
    TITLE_BASELINE,
};
pub use planner::{
    content_top, plan, truncate_to, PageBody, PlannedPage, TableSlice, CELL_PADDING,
    ROW_NUMBER_WIDTH,
};
