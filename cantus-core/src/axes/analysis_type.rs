//! Analysis type axis.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::UnrecognizedValue;

/// The statistical analyses that can be run over a modal category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AnalysisType {
    /// Relative pitch-class (or mode-degree) frequencies.
    PcFreqs,
    /// Conditional probabilities of melodic continuations.
    Tendency,
    /// Distribution of notes approaching phrase finals.
    Approaches,
}

impl AnalysisType {
    pub fn raw_value(self) -> &'static str {
        match self {
            AnalysisType::PcFreqs => "pc_freqs",
            AnalysisType::Tendency => "tendency",
            AnalysisType::Approaches => "approaches",
        }
    }

    /// The canonical path fragment; identical to the raw value.
    pub fn path_stub(self) -> &'static str {
        self.raw_value()
    }
}

impl TryFrom<&str> for AnalysisType {
    type Error = UnrecognizedValue;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "pc_freqs" => Ok(AnalysisType::PcFreqs),
            "tendency" => Ok(AnalysisType::Tendency),
            "approaches" => Ok(AnalysisType::Approaches),
            other => Err(UnrecognizedValue::new("analysis type", other)),
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_value())
    }
}
