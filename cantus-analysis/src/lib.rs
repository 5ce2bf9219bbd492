//! # cantus-analysis
//!
//! Analysis engine for the cantus chant statistics tool.
//! Loads MusicXML corpora, extracts monomodal sections, groups them by
//! modal category, computes pitch-class and mode-degree profiles,
//! clusters the profiles hierarchically, and exports dendrogram and
//! stacked-bar-chart images into the canonical output tree.

pub mod calculation;
pub mod clustering;
pub mod corpus;
pub mod grouping;
pub mod results;
pub mod stats;

pub use calculation::{calculate_results, prepare_analysis_inputs, AnalysisParams};
pub use clustering::{Dendrogram, DendrogramNode};
pub use corpus::{extract_monomodal_sections, load_pieces, FrameType, MonomodalSection, Piece};
pub use grouping::{AnalysisItem, GroupingByModalCategory, ModalCategory};
pub use results::{color_palette_for_unit, ResultCollection, ResultEntry, ResultsBucket};
pub use stats::{FeatureTable, ModeDegreeFreqs, PcFreqs};
