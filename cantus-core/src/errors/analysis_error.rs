//! Analysis dispatch errors.

/// Errors raised when dispatching an analysis function.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// The requested analysis has no implementation for the given unit.
    #[error("analysis '{analysis}' is not implemented for unit '{unit}'")]
    UnsupportedCombination { analysis: String, unit: String },

    /// The feature table for a modal category ended up empty.
    #[error("no items produced a feature row for modal category '{modal_category}'")]
    EmptyTable { modal_category: String },
}
