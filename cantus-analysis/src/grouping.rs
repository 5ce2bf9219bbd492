//! Grouping of analysis items into modal categories.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

use cantus_core::{Ambitus, AnalysisError, AnalysisType, ModalCategoryKind, ModalKey, PitchClass, Unit};

use crate::stats::{feature_columns, make_feature_row, FeatureTable};

/// The view of an item the grouping and analysis layers need: a label,
/// a modal final, an ambitus, and per-phrase pitch-class material.
pub trait AnalysisItem {
    fn descr(&self) -> String;
    fn final_pc(&self) -> PitchClass;
    fn ambitus(&self) -> Ambitus;
    fn phrase_pitch_classes(&self) -> Vec<Vec<PitchClass>>;
}

/// One modal category: a key plus the items grouped under it.
#[derive(Debug, Clone)]
pub struct ModalCategory<T> {
    pub key: ModalKey,
    pub items: Vec<T>,
}

impl<T: AnalysisItem> ModalCategory<T> {
    pub fn descr(&self) -> String {
        format!("{} ({} items)", self.key.descr(), self.items.len())
    }

    /// The numeric feature table for this category: one labelled row
    /// per item, columns determined by the analysis and unit.
    pub fn make_results_table(
        &self,
        analysis: AnalysisType,
        unit: Unit,
    ) -> Result<FeatureTable, AnalysisError> {
        let columns = feature_columns(analysis, unit, self.key.final_pc())?;
        let mut table = FeatureTable::new(columns);
        for item in &self.items {
            let row = make_feature_row(
                analysis,
                unit,
                &item.phrase_pitch_classes(),
                self.key.final_pc(),
            )?;
            table.push_row(item.descr(), row);
        }
        if table.is_empty() {
            return Err(AnalysisError::EmptyTable {
                modal_category: self.key.descr(),
            });
        }
        Ok(table)
    }
}

/// Items grouped by modal category.
///
/// Keys iterate in their natural order, so repeated runs over the same
/// corpus visit the categories in the same order.
pub struct GroupingByModalCategory<T> {
    pub group_by: ModalCategoryKind,
    groups: BTreeMap<ModalKey, ModalCategory<T>>,
}

impl<T: AnalysisItem> GroupingByModalCategory<T> {
    /// Group items by the given criterion. When grouping by final and
    /// ambitus, items with an undefined ambitus are excluded (they have
    /// no well-defined category).
    pub fn new(items: Vec<T>, group_by: ModalCategoryKind) -> Self {
        let mut groups: BTreeMap<ModalKey, ModalCategory<T>> = BTreeMap::new();
        let mut num_excluded = 0usize;

        for item in items {
            let key = match group_by {
                ModalCategoryKind::Final => ModalKey::Final(item.final_pc()),
                ModalCategoryKind::FinalAndAmbitus => {
                    if item.ambitus() == Ambitus::Undefined {
                        num_excluded += 1;
                        continue;
                    }
                    ModalKey::FinalAndAmbitus(item.final_pc(), item.ambitus())
                }
            };
            groups
                .entry(key)
                .or_insert_with(|| ModalCategory {
                    key,
                    items: Vec::new(),
                })
                .items
                .push(item);
        }

        if num_excluded > 0 {
            tracing::debug!(
                num_excluded,
                "excluded items with undefined ambitus from grouping"
            );
        }
        Self { group_by, groups }
    }

    /// The modal-category keys present in the data, in natural order.
    pub fn keys(&self) -> Vec<ModalKey> {
        self.groups.keys().copied().collect()
    }

    pub fn get(&self, key: &ModalKey) -> Option<&ModalCategory<T>> {
        self.groups.get(key)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<T: AnalysisItem> Index<&ModalKey> for GroupingByModalCategory<T> {
    type Output = ModalCategory<T>;

    fn index(&self, key: &ModalKey) -> &Self::Output {
        self.groups
            .get(key)
            .unwrap_or_else(|| panic!("no modal category for key '{key}'"))
    }
}

impl<T> fmt::Display for GroupingByModalCategory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num_items: usize = self.groups.values().map(|g| g.items.len()).sum();
        write!(
            f,
            "<Grouping by '{}': {} categories, {} items>",
            self.group_by.raw_value(),
            self.groups.len(),
            num_items
        )
    }
}
