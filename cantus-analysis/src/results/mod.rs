//! Result storage and export: the multi-axis result collection, color
//! palettes, and the plot-export driver.

mod collection;
mod export;
mod palette;

pub use collection::{ResultCollection, ResultEntry, ResultsBucket};
pub use palette::color_palette_for_unit;
