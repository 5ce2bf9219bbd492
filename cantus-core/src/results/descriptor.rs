//! Canonical output paths for one analysis result.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::axes::{AnalysisType, ModalKey, RepertoireAndGenre, Unit};
use crate::errors::UnrecognizedValue;

use super::path_stubs::PathStubs;

/// Separator between the modal-category stub and the filename suffix in
/// exported filenames. Not a legal path separator on any supported
/// platform, so the filename alone still identifies its bucket after
/// being moved out of its directory. Axis stubs are compile-time
/// constants that never contain this character.
pub const FILENAME_SEPARATOR: char = '|';

/// Computes the canonical directory and per-artifact filenames for one
/// (repertoire/genre, analysis, unit, modal category) combination.
///
/// Pure path computation: no side effects, callable once per artifact
/// type for the same bucket. The calculation driver and the bulk export
/// walk both derive their locations from this, so the two addressing
/// schemes always agree on the directory layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultDescriptor {
    pub rep_and_genre: RepertoireAndGenre,
    pub analysis: AnalysisType,
    pub unit: Unit,
    pub modal_category: ModalKey,
}

impl ResultDescriptor {
    pub fn new(
        rep_and_genre: RepertoireAndGenre,
        analysis: AnalysisType,
        unit: Unit,
        modal_category: ModalKey,
    ) -> Self {
        Self {
            rep_and_genre,
            analysis,
            unit,
            modal_category,
        }
    }

    /// Build a descriptor from raw axis values, failing fast on any
    /// value outside its closed set.
    pub fn parse(
        rep_and_genre: &str,
        analysis: &str,
        unit: &str,
        modal_category: ModalKey,
    ) -> Result<Self, UnrecognizedValue> {
        Ok(Self::new(
            RepertoireAndGenre::try_from(rep_and_genre)?,
            AnalysisType::try_from(analysis)?,
            Unit::try_from(unit)?,
            modal_category,
        ))
    }

    /// The canonical four-segment directory name:
    /// `<repertoire>/<analysis>/<genre>/<unit>`.
    pub fn output_dirname(&self) -> PathBuf {
        [
            self.rep_and_genre.path_stub_1(),
            self.analysis.path_stub(),
            self.rep_and_genre.path_stub_2(),
            self.unit.path_stub(),
        ]
        .iter()
        .collect()
    }

    /// The output directory under `output_root_dir`. Extra path stubs
    /// (for example a cutoff-parameter tag) are inserted before the
    /// canonical dirname, so parallel result trees for different run
    /// parameters coexist without touching the descriptor logic.
    pub fn output_dir(&self, output_root_dir: &Path, extra_path_stubs: &[&str]) -> PathBuf {
        let mut dir = output_root_dir.to_path_buf();
        for stub in extra_path_stubs {
            dir.push(stub);
        }
        dir.push(self.output_dirname());
        dir
    }

    /// Full path for a named artifact. The filename is
    /// `<modal category stub>|<suffix>`, so it identifies its bucket
    /// even outside its directory.
    pub fn full_output_path(
        &self,
        output_root_dir: &Path,
        filename_suffix: &str,
        extra_path_stubs: &[&str],
    ) -> PathBuf {
        let filename = format!(
            "{}{}{}",
            self.modal_category.path_stub_2(),
            FILENAME_SEPARATOR,
            filename_suffix
        );
        self.output_dir(output_root_dir, extra_path_stubs)
            .join(filename)
    }

    /// The 6-tuple addressing this descriptor's bucket.
    pub fn path_stubs(&self) -> PathStubs {
        PathStubs::new(
            self.rep_and_genre,
            self.analysis,
            self.unit,
            &self.modal_category,
        )
    }
}
