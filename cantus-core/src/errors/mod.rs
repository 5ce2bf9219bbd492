//! Error types shared across the workspace.

mod analysis_error;
mod axis_error;
mod calculation_error;
mod config_error;
mod corpus_error;
mod export_error;
mod persist_error;
mod score_error;

pub use analysis_error::AnalysisError;
pub use axis_error::UnrecognizedValue;
pub use calculation_error::CalculationError;
pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use export_error::ExportError;
pub use persist_error::PersistError;
pub use score_error::ScoreError;
