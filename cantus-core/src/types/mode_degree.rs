//! Mode degrees: scale positions relative to a final.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::pitch_class::PitchClass;

/// A scale degree (1..=7) relative to a final pitch class, with a flat
/// marker for B flat.
///
/// The degree is the diatonic letter distance from the final, so for a
/// final of G the pitch class A is degree 2 and B (or B flat) degree 3.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ModeDegree {
    pub degree: u8,
    pub flat: bool,
}

impl ModeDegree {
    pub fn new(degree: u8, flat: bool) -> Self {
        debug_assert!((1..=7).contains(&degree));
        Self { degree, flat }
    }

    /// The mode degree of `pc` relative to `final_pc`.
    pub fn from_pc_and_final(pc: PitchClass, final_pc: PitchClass) -> Self {
        let degree = (pc.letter_index() + 7 - final_pc.letter_index()) % 7 + 1;
        Self {
            degree,
            flat: pc == PitchClass::BFlat,
        }
    }

    /// All mode degrees that can occur for the given final, in canonical
    /// column order. There are always eight: the seven naturals plus the
    /// flat variant of whichever degree the letter B falls on.
    pub fn all_for_final(final_pc: PitchClass) -> Vec<ModeDegree> {
        let mut degrees = Vec::with_capacity(8);
        for degree in 1..=7 {
            let letter = (final_pc.letter_index() + degree - 1) % 7;
            if letter == PitchClass::B.letter_index() {
                // Flat variant sorts just before its natural.
                degrees.push(ModeDegree::new(degree, true));
            }
            degrees.push(ModeDegree::new(degree, false));
        }
        degrees
    }
}

impl fmt::Display for ModeDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.flat {
            write!(f, "b{}", self.degree)
        } else {
            write!(f, "{}", self.degree)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_relative_to_final_g() {
        let d = |pc| ModeDegree::from_pc_and_final(pc, PitchClass::G);
        assert_eq!(d(PitchClass::G), ModeDegree::new(1, false));
        assert_eq!(d(PitchClass::A), ModeDegree::new(2, false));
        assert_eq!(d(PitchClass::B), ModeDegree::new(3, false));
        assert_eq!(d(PitchClass::BFlat), ModeDegree::new(3, true));
        assert_eq!(d(PitchClass::F), ModeDegree::new(7, false));
    }

    #[test]
    fn test_degree_relative_to_final_c() {
        let d = |pc| ModeDegree::from_pc_and_final(pc, PitchClass::C);
        assert_eq!(d(PitchClass::C), ModeDegree::new(1, false));
        assert_eq!(d(PitchClass::BFlat), ModeDegree::new(7, true));
        assert_eq!(d(PitchClass::B), ModeDegree::new(7, false));
    }

    #[test]
    fn test_all_for_final_has_eight_columns() {
        for final_pc in PitchClass::ALL {
            let degrees = ModeDegree::all_for_final(final_pc);
            assert_eq!(degrees.len(), 8, "final {}", final_pc);
            assert_eq!(degrees.iter().filter(|d| d.flat).count(), 1);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ModeDegree::new(3, false).to_string(), "3");
        assert_eq!(ModeDegree::new(7, true).to_string(), "b7");
    }
}
