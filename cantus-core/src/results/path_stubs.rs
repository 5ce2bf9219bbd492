//! The 6-tuple of path stubs that uniquely addresses a results bucket.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::axes::{AnalysisType, ModalKey, RepertoireAndGenre, Unit};

/// An ordered 6-tuple of path stubs uniquely addressing one results
/// bucket.
///
/// The stub order interleaves the repertoire/genre pair with the other
/// axes so that the nested output tree groups first by repertoire, then
/// by analysis, then by genre, then by unit, then by modal category.
/// Two insertions with equal stubs address the same bucket; distinct
/// stubs never collide in the output tree.
///
/// `PathStubs` is `Ord` (lexicographic over the six fragments), so maps
/// keyed by it iterate in a deterministic order across processes.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PathStubs {
    pub rep_and_genre_1: String,
    pub analysis: String,
    pub rep_and_genre_2: String,
    pub unit: String,
    pub modal_category_1: String,
    pub modal_category_2: String,
}

impl PathStubs {
    /// Build the stub tuple from typed axis values. This is the only
    /// constructor: stubs never originate from unvalidated strings.
    pub fn new(
        rep_and_genre: RepertoireAndGenre,
        analysis: AnalysisType,
        unit: Unit,
        modal_category: &ModalKey,
    ) -> Self {
        Self {
            rep_and_genre_1: rep_and_genre.path_stub_1().to_owned(),
            analysis: analysis.path_stub().to_owned(),
            rep_and_genre_2: rep_and_genre.path_stub_2().to_owned(),
            unit: unit.path_stub().to_owned(),
            modal_category_1: modal_category.path_stub_1().to_owned(),
            modal_category_2: modal_category.path_stub_2(),
        }
    }

    /// The six fragments in path order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [
            self.rep_and_genre_1.as_str(),
            self.analysis.as_str(),
            self.rep_and_genre_2.as_str(),
            self.unit.as_str(),
            self.modal_category_1.as_str(),
            self.modal_category_2.as_str(),
        ]
        .into_iter()
    }
}

impl fmt::Display for PathStubs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for stub in self.iter() {
            if !first {
                f.write_str("/")?;
            }
            f.write_str(stub)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PitchClass;

    #[test]
    fn test_stub_order() {
        let stubs = PathStubs::new(
            RepertoireAndGenre::PlainchantSequences,
            AnalysisType::PcFreqs,
            Unit::Pcs,
            &ModalKey::Final(PitchClass::G),
        );
        let fragments: Vec<&str> = stubs.iter().collect();
        assert_eq!(
            fragments,
            ["chant", "pc_freqs", "sequences", "pcs", "final", "final_G"]
        );
        assert_eq!(stubs.to_string(), "chant/pc_freqs/sequences/pcs/final/final_G");
    }

    #[test]
    fn test_distinct_modal_keys_give_distinct_stubs() {
        let a = PathStubs::new(
            RepertoireAndGenre::PlainchantSequences,
            AnalysisType::PcFreqs,
            Unit::Pcs,
            &ModalKey::Final(PitchClass::G),
        );
        let b = PathStubs::new(
            RepertoireAndGenre::PlainchantSequences,
            AnalysisType::PcFreqs,
            Unit::Pcs,
            &ModalKey::Final(PitchClass::C),
        );
        assert_ne!(a, b);
    }
}
