//! Page structure of a configuration document.
//!
//! Lines before the first `newpage` form the preamble; each `newpage`
//! starts a page holding a `title` and the draw lines for its pads.
//! `multiplot` lines are expanded into draw lines before the final
//! segmentation.

mod attributes;
mod multiplot;
mod page;
mod segment;

pub use attributes::{auto_dim, default_title, parse_newpage, parse_title, Layout, NewpageSpec};
pub use multiplot::{expand_multiplots, MAX_MULTI, MULTIPLOT, PLACEHOLDER};
pub use page::{LogFlags, Page};
pub use segment::{segment, Segmentation, NEWPAGE, TITLE};
