//! The four axes of the result-addressing scheme.
//!
//! Each axis is a closed enumeration mapping a semantic value to one or
//! two filesystem path stubs. Stub strings are unique within each axis
//! and stable across runs: they form a persistent addressing scheme,
//! not just display labels. Unknown raw values are rejected at
//! construction with [`UnrecognizedValue`](crate::errors::UnrecognizedValue).

mod analysis_type;
mod modal_category;
mod repertoire;
mod unit;

pub use analysis_type::AnalysisType;
pub use modal_category::{ModalCategoryKind, ModalKey};
pub use repertoire::RepertoireAndGenre;
pub use unit::Unit;
