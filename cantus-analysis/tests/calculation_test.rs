//! End-to-end tests: corpus on disk, calculation, accumulation, export.

mod common;

use std::fs;

use cantus_core::{
    AnalysisType, CantusConfig, CorpusError, ModalCategoryKind, ModalKey, PathStubs, PitchClass,
    RepertoireAndGenre, Unit,
};

use cantus_analysis::{calculate_results, load_pieces, AnalysisParams, ResultCollection};

use common::monomodal_musicxml;

/// Write a small corpus: two pieces ending on G, one ending on D.
fn write_corpus(dir: &std::path::Path) {
    let corpus_dir = dir.join("plainchant_sequences");
    fs::create_dir_all(&corpus_dir).unwrap();
    fs::write(corpus_dir.join("piece_one.xml"), monomodal_musicxml("G", 4)).unwrap();
    fs::write(corpus_dir.join("piece_two.xml"), monomodal_musicxml("G", 3)).unwrap();
    fs::write(corpus_dir.join("piece_three.xml"), monomodal_musicxml("D", 3)).unwrap();
}

#[test]
fn test_load_pieces_from_corpus_dir() {
    let tmp = tempfile::tempdir().unwrap();
    write_corpus(tmp.path());
    let config = CantusConfig::with_root(tmp.path());

    let pieces = load_pieces(RepertoireAndGenre::PlainchantSequences, &config, None).unwrap();
    assert_eq!(pieces.len(), 3);
    // Filenames load in sorted order.
    assert_eq!(pieces[0].name, "piece one");
    assert_eq!(pieces[1].name, "piece three");
    assert_eq!(pieces[2].name, "piece two");
}

#[test]
fn test_load_pieces_respects_pattern() {
    let tmp = tempfile::tempdir().unwrap();
    write_corpus(tmp.path());
    let config = CantusConfig::with_root(tmp.path());

    let pieces =
        load_pieces(RepertoireAndGenre::PlainchantSequences, &config, Some("piece_t*.xml"))
            .unwrap();
    assert_eq!(pieces.len(), 2);
}

#[test]
fn test_unsupported_repertoire_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let config = CantusConfig::with_root(tmp.path());
    let err = load_pieces(RepertoireAndGenre::ResponsorialChants, &config, None).unwrap_err();
    assert!(matches!(err, CorpusError::UnsupportedRepertoire { .. }));
}

#[test]
fn test_calculate_results_fills_buckets() {
    let tmp = tempfile::tempdir().unwrap();
    write_corpus(tmp.path());
    let config = CantusConfig::with_root(tmp.path());

    let results = calculate_results(
        None,
        &config,
        RepertoireAndGenre::PlainchantSequences,
        AnalysisType::PcFreqs,
        Unit::Pcs,
        ModalCategoryKind::Final,
        &AnalysisParams::default(),
    )
    .unwrap();

    // One bucket per modal category present in the corpus (G and D).
    assert_eq!(results.len(), 2);
    let stubs = PathStubs::new(
        RepertoireAndGenre::PlainchantSequences,
        AnalysisType::PcFreqs,
        Unit::Pcs,
        &ModalKey::Final(PitchClass::G),
    );
    let bucket = &results[&stubs];
    assert!(bucket.contains_key("dendrogram"));
    assert!(bucket.contains_key("clusters"));
}

#[test]
fn test_results_accumulate_across_runs() {
    let tmp = tempfile::tempdir().unwrap();
    write_corpus(tmp.path());
    let config = CantusConfig::with_root(tmp.path());

    let results = calculate_results(
        None,
        &config,
        RepertoireAndGenre::PlainchantSequences,
        AnalysisType::PcFreqs,
        Unit::Pcs,
        ModalCategoryKind::Final,
        &AnalysisParams::default(),
    )
    .unwrap();
    let first_len = results.len();

    // A second run with a different unit extends the same collection.
    let results = calculate_results(
        Some(results),
        &config,
        RepertoireAndGenre::PlainchantSequences,
        AnalysisType::PcFreqs,
        Unit::ModeDegrees,
        ModalCategoryKind::Final,
        &AnalysisParams::default(),
    )
    .unwrap();
    assert_eq!(results.len(), first_len * 2);

    // Re-running an existing combination changes nothing structurally.
    let results = calculate_results(
        Some(results),
        &config,
        RepertoireAndGenre::PlainchantSequences,
        AnalysisType::PcFreqs,
        Unit::Pcs,
        ModalCategoryKind::Final,
        &AnalysisParams::default(),
    )
    .unwrap();
    assert_eq!(results.len(), first_len * 2);
}

#[test]
fn test_calculate_persist_reload_export() {
    let tmp = tempfile::tempdir().unwrap();
    write_corpus(tmp.path());
    let config = CantusConfig::with_root(tmp.path());

    let results = calculate_results(
        None,
        &config,
        RepertoireAndGenre::PlainchantSequences,
        AnalysisType::PcFreqs,
        Unit::Pcs,
        ModalCategoryKind::Final,
        &AnalysisParams::default(),
    )
    .unwrap();

    // Persist and reload, as an incremental run across processes would.
    let blob = tmp.path().join("results.bin");
    results.save(&blob, false).unwrap();
    let reloaded = ResultCollection::load(&blob).unwrap();
    assert_eq!(reloaded.to_dict(), results.to_dict());

    // Export the reloaded collection.
    let output_root = tmp.path().join("output");
    reloaded.export_plots(&output_root, false).unwrap();
    for stub2 in ["final_G", "final_D"] {
        let dir = output_root.join(format!("chant/pc_freqs/sequences/pcs/final/{stub2}"));
        assert!(dir.join("dendrogram.png").is_file());
        assert!(dir.join("stacked_bar_chart.png").is_file());
    }
}
