//! Monomodal sections: maximal runs of phrases sharing a final.

use serde::{Deserialize, Serialize};

use cantus_core::{calculate_ambitus, Ambitus, Note, PitchClass};

use crate::grouping::AnalysisItem;

use super::piece::{Phrase, Piece};

/// A maximal run of consecutive phrases within one piece that share a
/// phrase-final (and, optionally, an ambitus). These are the items over
/// which the modal-category statistics are computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonomodalSection {
    pub piece_name: String,
    /// First and last phrase number of the run, inclusive.
    pub phrase_range: (usize, usize),
    pub final_pc: PitchClass,
    pub ambitus: Ambitus,
    phrases: Vec<Phrase>,
}

impl MonomodalSection {
    pub fn num_phrases(&self) -> usize {
        self.phrases.len()
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    /// All notes of the section, in order.
    pub fn notes(&self) -> Vec<Note> {
        self.phrases.iter().flat_map(|p| p.notes.clone()).collect()
    }
}

impl AnalysisItem for MonomodalSection {
    fn descr(&self) -> String {
        format!(
            "{}: phrases {}-{}",
            self.piece_name, self.phrase_range.0, self.phrase_range.1
        )
    }

    fn final_pc(&self) -> PitchClass {
        self.final_pc
    }

    fn ambitus(&self) -> Ambitus {
        self.ambitus
    }

    fn phrase_pitch_classes(&self) -> Vec<Vec<PitchClass>> {
        self.phrases.iter().map(|p| p.pitch_classes()).collect()
    }
}

/// Extract all monomodal sections of at least `min_length` phrases from
/// the given pieces.
///
/// A section boundary falls wherever the phrase-final changes, and
/// additionally wherever the phrase ambitus changes when
/// `enforce_same_ambitus` is set.
pub fn extract_monomodal_sections(
    pieces: &[Piece],
    enforce_same_ambitus: bool,
    min_length: usize,
) -> Vec<MonomodalSection> {
    let mut sections = Vec::new();
    for piece in pieces {
        extract_from_piece(piece, enforce_same_ambitus, min_length, &mut sections);
    }
    tracing::debug!(
        num_sections = sections.len(),
        enforce_same_ambitus,
        min_length,
        "extracted monomodal sections"
    );
    sections
}

fn phrase_ambitus(phrase: &Phrase) -> Ambitus {
    calculate_ambitus(&phrase.lowest_note(), Some(&phrase.note_of_final()))
}

fn extract_from_piece(
    piece: &Piece,
    enforce_same_ambitus: bool,
    min_length: usize,
    sections: &mut Vec<MonomodalSection>,
) {
    let mut run: Vec<&Phrase> = Vec::new();

    let mut flush = |run: &mut Vec<&Phrase>| {
        if run.len() >= min_length {
            let first = run[0];
            let last = run[run.len() - 1];
            let final_pc = first.phrase_final();

            let phrases: Vec<Phrase> = run.iter().map(|p| (*p).clone()).collect();
            let lowest = phrases
                .iter()
                .map(|p| p.lowest_note())
                .min_by_key(|n| n.midi_number())
                .unwrap_or_else(|| first.lowest_note());
            let ambitus = calculate_ambitus(&lowest, Some(&last.note_of_final()));

            sections.push(MonomodalSection {
                piece_name: piece.name.clone(),
                phrase_range: (first.number, last.number),
                final_pc,
                ambitus,
                phrases,
            });
        }
        run.clear();
    };

    for phrase in &piece.phrases {
        let breaks_run = match run.last() {
            None => false,
            Some(prev) => {
                prev.phrase_final() != phrase.phrase_final()
                    || (enforce_same_ambitus && phrase_ambitus(prev) != phrase_ambitus(phrase))
            }
        };
        if breaks_run {
            flush(&mut run);
        }
        run.push(phrase);
    }
    flush(&mut run);
}
