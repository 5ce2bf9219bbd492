//! Dispatch from (analysis type, unit) to the concrete feature
//! computation for one item.

use cantus_core::{AnalysisError, AnalysisType, ModeDegree, PitchClass, Unit};

use super::freqs::{ModeDegreeFreqs, PcFreqs};
use super::tendency::{ApproachesProfile, TendencyProfile};

/// The feature column labels for the given analysis and unit. Mode
/// degree columns depend on the final, so the modal category's final is
/// part of the input.
pub fn feature_columns(
    analysis: AnalysisType,
    unit: Unit,
    final_pc: PitchClass,
) -> Result<Vec<String>, AnalysisError> {
    match (analysis, unit) {
        (AnalysisType::PcFreqs, Unit::Pcs) => {
            Ok(PitchClass::ALL.iter().map(|pc| pc.to_string()).collect())
        }
        (AnalysisType::PcFreqs, Unit::ModeDegrees) => Ok(ModeDegree::all_for_final(final_pc)
            .iter()
            .map(|d| d.to_string())
            .collect()),
        (AnalysisType::Tendency, Unit::Pcs) => Ok(TendencyProfile::from_pc_phrases(&[]).columns),
        (AnalysisType::Tendency, Unit::ModeDegrees) => {
            Ok(TendencyProfile::from_mode_degree_phrases(&[], final_pc).columns)
        }
        (AnalysisType::Approaches, Unit::Pcs) => {
            Ok(ApproachesProfile::from_pc_phrases(&[]).columns)
        }
        (AnalysisType::Approaches, Unit::ModeDegrees) => {
            Err(AnalysisError::UnsupportedCombination {
                analysis: analysis.to_string(),
                unit: unit.to_string(),
            })
        }
    }
}

/// The feature row for one item, given its per-phrase pitch classes and
/// its final. The row aligns with [`feature_columns`] for the same
/// arguments.
pub fn make_feature_row(
    analysis: AnalysisType,
    unit: Unit,
    phrases: &[Vec<PitchClass>],
    final_pc: PitchClass,
) -> Result<Vec<f64>, AnalysisError> {
    match (analysis, unit) {
        (AnalysisType::PcFreqs, Unit::Pcs) => {
            let pcs = phrases.iter().flatten().copied();
            Ok(PcFreqs::from_pitch_classes(pcs).rel_freqs())
        }
        (AnalysisType::PcFreqs, Unit::ModeDegrees) => {
            let pcs = phrases.iter().flatten().copied();
            Ok(ModeDegreeFreqs::from_pitch_classes_and_final(pcs, final_pc).rel_freqs())
        }
        (AnalysisType::Tendency, Unit::Pcs) => Ok(TendencyProfile::from_pc_phrases(phrases).values),
        (AnalysisType::Tendency, Unit::ModeDegrees) => {
            Ok(TendencyProfile::from_mode_degree_phrases(phrases, final_pc).values)
        }
        (AnalysisType::Approaches, Unit::Pcs) => {
            Ok(ApproachesProfile::from_pc_phrases(phrases).values)
        }
        (AnalysisType::Approaches, Unit::ModeDegrees) => {
            Err(AnalysisError::UnsupportedCombination {
                analysis: analysis.to_string(),
                unit: unit.to_string(),
            })
        }
    }
}
