//! Pitch classes of the chant gamut.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::UnrecognizedValue;

/// The eight pitch classes that occur in the repertoire: the seven
/// naturals plus B flat, written `B-`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PitchClass {
    A,
    BFlat,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl PitchClass {
    /// All pitch classes in canonical column order. This ordering is part
    /// of the persistent addressing scheme: feature tables, JSON exports
    /// and chart legends all use it.
    pub const ALL: [PitchClass; 8] = [
        PitchClass::A,
        PitchClass::BFlat,
        PitchClass::B,
        PitchClass::C,
        PitchClass::D,
        PitchClass::E,
        PitchClass::F,
        PitchClass::G,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PitchClass::A => "A",
            PitchClass::BFlat => "B-",
            PitchClass::B => "B",
            PitchClass::C => "C",
            PitchClass::D => "D",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::G => "G",
        }
    }

    /// Diatonic letter index (A = 0 .. G = 6). B flat shares the B letter.
    pub fn letter_index(self) -> u8 {
        match self {
            PitchClass::A => 0,
            PitchClass::BFlat | PitchClass::B => 1,
            PitchClass::C => 2,
            PitchClass::D => 3,
            PitchClass::E => 4,
            PitchClass::F => 5,
            PitchClass::G => 6,
        }
    }

    /// Semitone offset within the octave, C = 0.
    pub fn semitone(self) -> u8 {
        match self {
            PitchClass::C => 0,
            PitchClass::D => 2,
            PitchClass::E => 4,
            PitchClass::F => 5,
            PitchClass::G => 7,
            PitchClass::A => 9,
            PitchClass::BFlat => 10,
            PitchClass::B => 11,
        }
    }
}

impl TryFrom<&str> for PitchClass {
    type Error = UnrecognizedValue;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "A" => Ok(PitchClass::A),
            "B-" => Ok(PitchClass::BFlat),
            "B" => Ok(PitchClass::B),
            "C" => Ok(PitchClass::C),
            "D" => Ok(PitchClass::D),
            "E" => Ok(PitchClass::E),
            "F" => Ok(PitchClass::F),
            "G" => Ok(PitchClass::G),
            other => Err(UnrecognizedValue::new("pitch class", other)),
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
