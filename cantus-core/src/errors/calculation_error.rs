//! Umbrella error for a full calculation run.

use super::analysis_error::AnalysisError;
use super::corpus_error::CorpusError;

/// Errors that can abort a calculation run. There is no partial-bucket
/// recovery: a failure for one modal category halts the whole run.
#[derive(Debug, thiserror::Error)]
pub enum CalculationError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}
