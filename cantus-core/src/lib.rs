//! # cantus-core
//!
//! Foundation crate for the cantus chant statistics engine.
//! Defines domain types, the result-addressing axes, errors, config,
//! and tracing setup. Every other crate in the workspace depends on this.

pub mod axes;
pub mod config;
pub mod errors;
pub mod results;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use axes::{AnalysisType, ModalCategoryKind, ModalKey, RepertoireAndGenre, Unit};
pub use config::CantusConfig;
pub use errors::{
    AnalysisError, CalculationError, ConfigError, CorpusError, ExportError, PersistError,
    ScoreError, UnrecognizedValue,
};
pub use results::{PathStubs, ResultDescriptor, FILENAME_SEPARATOR};
pub use types::{calculate_ambitus, Ambitus, ModeDegree, Note, PitchClass};
