//! Search query model and result selection.

mod params;
mod selection;

pub use params::{FilterField, FilterParams};
pub use selection::{select, MAX_BROWSE};
