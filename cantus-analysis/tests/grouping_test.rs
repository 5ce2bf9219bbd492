//! Tests for grouping items into modal categories.

mod common;

use cantus_core::{Ambitus, AnalysisType, ModalCategoryKind, ModalKey, PitchClass, Unit};

use cantus_analysis::GroupingByModalCategory;

use common::{make_dummy_items, DummyItem};

/// The fixed corpus of dummy items used across these tests.
fn dummy_items() -> Vec<DummyItem> {
    let mut items = Vec::new();
    items.extend(make_dummy_items(1, 5, PitchClass::C, Ambitus::Authentic));
    items.extend(make_dummy_items(6, 10, PitchClass::D, Ambitus::Authentic));
    items.extend(make_dummy_items(16, 12, PitchClass::D, Ambitus::Plagal));
    items.extend(make_dummy_items(28, 20, PitchClass::G, Ambitus::Authentic));
    items.extend(make_dummy_items(48, 18, PitchClass::G, Ambitus::Plagal));
    items
}

#[test]
fn test_grouping_by_final() {
    let grouping = GroupingByModalCategory::new(dummy_items(), ModalCategoryKind::Final);

    assert_eq!(
        grouping.keys(),
        vec![
            ModalKey::Final(PitchClass::C),
            ModalKey::Final(PitchClass::D),
            ModalKey::Final(PitchClass::G),
        ]
    );
    assert_eq!(grouping[&ModalKey::Final(PitchClass::C)].items.len(), 5);
    assert_eq!(grouping[&ModalKey::Final(PitchClass::D)].items.len(), 22);
    assert_eq!(grouping[&ModalKey::Final(PitchClass::G)].items.len(), 38);
}

#[test]
fn test_grouping_by_final_and_ambitus() {
    let grouping =
        GroupingByModalCategory::new(dummy_items(), ModalCategoryKind::FinalAndAmbitus);

    assert_eq!(grouping.len(), 5);
    assert_eq!(
        grouping[&ModalKey::FinalAndAmbitus(PitchClass::D, Ambitus::Plagal)]
            .items
            .len(),
        12
    );
    assert_eq!(
        grouping[&ModalKey::FinalAndAmbitus(PitchClass::G, Ambitus::Authentic)]
            .items
            .len(),
        20
    );
}

#[test]
fn test_undefined_ambitus_excluded_only_when_grouping_by_ambitus() {
    let mut items = make_dummy_items(1, 4, PitchClass::G, Ambitus::Authentic);
    items.extend(make_dummy_items(5, 3, PitchClass::G, Ambitus::Undefined));

    let by_final = GroupingByModalCategory::new(
        make_items_again(&items),
        ModalCategoryKind::Final,
    );
    assert_eq!(by_final[&ModalKey::Final(PitchClass::G)].items.len(), 7);

    let by_final_and_ambitus =
        GroupingByModalCategory::new(items, ModalCategoryKind::FinalAndAmbitus);
    assert_eq!(by_final_and_ambitus.len(), 1);
    assert_eq!(
        by_final_and_ambitus[&ModalKey::FinalAndAmbitus(PitchClass::G, Ambitus::Authentic)]
            .items
            .len(),
        4
    );
}

fn make_items_again(items: &[DummyItem]) -> Vec<DummyItem> {
    items
        .iter()
        .map(|i| DummyItem::new(i.index, i.final_pc, i.ambitus))
        .collect()
}

#[test]
fn test_results_table_has_one_row_per_item() {
    let grouping = GroupingByModalCategory::new(dummy_items(), ModalCategoryKind::Final);
    let category = &grouping[&ModalKey::Final(PitchClass::G)];

    let table = category
        .make_results_table(AnalysisType::PcFreqs, Unit::Pcs)
        .unwrap();
    assert_eq!(table.num_rows(), 38);
    assert_eq!(table.columns().len(), 8);
    for row in table.rows() {
        let sum: f64 = row.values.iter().sum();
        assert!((sum - 100.0).abs() < 1e-9, "row '{}'", row.label);
    }
}

#[test]
fn test_unsupported_analysis_unit_combination_fails_fast() {
    let grouping = GroupingByModalCategory::new(dummy_items(), ModalCategoryKind::Final);
    let category = &grouping[&ModalKey::Final(PitchClass::C)];
    assert!(category
        .make_results_table(AnalysisType::Approaches, Unit::ModeDegrees)
        .is_err());
}
