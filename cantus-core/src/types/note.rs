//! A concrete note: pitch class plus octave.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::pitch_class::PitchClass;

/// A note in scientific pitch notation (octave 4 starts at middle C).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub pitch_class: PitchClass,
    pub octave: i8,
}

impl Note {
    pub fn new(pitch_class: PitchClass, octave: i8) -> Self {
        Self {
            pitch_class,
            octave,
        }
    }

    /// MIDI note number (C4 = 60). Used for interval arithmetic.
    pub fn midi_number(&self) -> i16 {
        (i16::from(self.octave) + 1) * 12 + i16::from(self.pitch_class.semitone())
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class, self.octave)
    }
}
