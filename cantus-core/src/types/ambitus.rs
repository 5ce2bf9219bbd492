//! Ambitus classification: where a melodic range sits relative to its final.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::note::Note;

/// Possible ambitus types for pieces, monomodal sections, and phrases.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Ambitus {
    Authentic,
    Plagal,
    Undefined,
}

impl Ambitus {
    pub fn as_str(self) -> &'static str {
        match self {
            Ambitus::Authentic => "authentic",
            Ambitus::Plagal => "plagal",
            Ambitus::Undefined => "undefined",
        }
    }
}

impl fmt::Display for Ambitus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calculate the ambitus of an item from its lowest note and the note
/// of its final.
///
/// The lowest note is expected to lie at most an octave below the final:
/// up to a third below counts as authentic, anything deeper down to the
/// octave as plagal. An item without a well-defined final has an
/// undefined ambitus.
pub fn calculate_ambitus(lowest_note: &Note, note_of_final: Option<&Note>) -> Ambitus {
    let Some(note_of_final) = note_of_final else {
        return Ambitus::Undefined;
    };

    let semitones = lowest_note.midi_number() - note_of_final.midi_number();
    if (-4..=0).contains(&semitones) {
        Ambitus::Authentic
    } else if (-12..=-5).contains(&semitones) {
        // The full octave below the final counts as plagal.
        Ambitus::Plagal
    } else {
        tracing::warn!(
            lowest_note = %lowest_note,
            note_of_final = %note_of_final,
            "check the logic in the ambitus calculation: we expect the lowest note \
             to be an octave or less below the main final; returning ambitus 'undefined'"
        );
        Ambitus::Undefined
    }
}
