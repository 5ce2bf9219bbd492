//! The calculation driver: from corpus to result collection.

use serde::{Deserialize, Serialize};

use cantus_core::{
    AnalysisType, CalculationError, CantusConfig, CorpusError, ModalCategoryKind,
    RepertoireAndGenre, Unit,
};

use crate::clustering::Dendrogram;
use crate::corpus::{extract_monomodal_sections, load_pieces, MonomodalSection};
use crate::grouping::GroupingByModalCategory;
use crate::results::{ResultCollection, ResultEntry};

/// Tunable parameters of a calculation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisParams {
    /// Minimum number of phrases for a monomodal section to count.
    pub min_section_length: usize,
    /// Significance threshold for clusters below the cutoff.
    pub p_threshold: f64,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            min_section_length: 3,
            p_threshold: 0.7,
        }
    }
}

/// Load the corpus for a repertoire and extract the analysis items for
/// the given grouping criterion.
pub fn prepare_analysis_inputs(
    rep_and_genre: RepertoireAndGenre,
    config: &CantusConfig,
    group_by: ModalCategoryKind,
    params: &AnalysisParams,
    filename_pattern: Option<&str>,
) -> Result<Vec<MonomodalSection>, CorpusError> {
    let pieces = load_pieces(rep_and_genre, config, filename_pattern)?;
    Ok(extract_monomodal_sections(
        &pieces,
        group_by.enforce_same_ambitus(),
        params.min_section_length,
    ))
}

/// Run one analysis over one repertoire, unit, and grouping criterion,
/// inserting a `"dendrogram"` and a `"clusters"` entry per modal
/// category.
///
/// Passing an existing collection extends it, so results for different
/// axis combinations accumulate across calls (and, combined with
/// [`ResultCollection::save`], across process invocations). Passing
/// `None` starts a fresh collection. Re-running the same combination
/// overwrites its buckets in place.
pub fn calculate_results(
    existing_results: Option<ResultCollection>,
    config: &CantusConfig,
    rep_and_genre: RepertoireAndGenre,
    analysis: AnalysisType,
    unit: Unit,
    group_by: ModalCategoryKind,
    params: &AnalysisParams,
) -> Result<ResultCollection, CalculationError> {
    let mut results = existing_results.unwrap_or_default();

    let inputs = prepare_analysis_inputs(rep_and_genre, config, group_by, params, None)?;
    let grouping = GroupingByModalCategory::new(inputs, group_by);
    tracing::debug!("calculating results for {grouping}");

    let keys = grouping.keys();
    let num_keys = keys.len();
    for (i, key) in keys.into_iter().enumerate() {
        tracing::info!(
            modal_category = %key,
            progress = format!("{}/{}", i + 1, num_keys),
            "calculating modal category"
        );

        let modal_category = &grouping[&key];
        let table = modal_category.make_results_table(analysis, unit)?;
        let dendrogram = Dendrogram::new(&table, params.p_threshold);
        let clusters: Vec<_> = dendrogram.nodes_below_cutoff().cloned().collect();

        results.insert_results(
            rep_and_genre,
            analysis,
            unit,
            &key,
            "dendrogram",
            ResultEntry::Dendrogram(dendrogram),
        );
        results.insert_results(
            rep_and_genre,
            analysis,
            unit,
            &key,
            "clusters",
            ResultEntry::Clusters(clusters),
        );
    }

    Ok(results)
}
