//! Frequency and tendency statistics over note material.

mod freqs;
mod functions;
mod table;
mod tendency;

pub use freqs::{ModeDegreeFreqs, PcFreqs};
pub use functions::{feature_columns, make_feature_row};
pub use table::FeatureTable;
pub use tendency::{ApproachesProfile, TendencyProfile};
