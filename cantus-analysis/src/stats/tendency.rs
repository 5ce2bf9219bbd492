//! Melodic tendency profiles: conditional continuation probabilities
//! and approaches to phrase finals.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use cantus_core::{ModeDegree, PitchClass};

/// Conditional probabilities of melodic continuations, flattened into a
/// feature vector.
///
/// For every ordered pair of states (pitch classes or mode degrees) the
/// profile holds P(next = b | current = a) in percent, computed from
/// note-to-note transitions within phrases. Transitions never cross a
/// phrase boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TendencyProfile {
    pub columns: Vec<String>,
    pub values: Vec<f64>,
}

impl TendencyProfile {
    pub fn from_pc_phrases(phrases: &[Vec<PitchClass>]) -> Self {
        let states: Vec<String> = PitchClass::ALL.iter().map(|pc| pc.to_string()).collect();
        let index_seqs = phrases.iter().map(|phrase| {
            phrase
                .iter()
                .map(|pc| PitchClass::ALL.iter().position(|p| p == pc).unwrap_or(0))
                .collect()
        });
        let (columns, values) = condprob_matrix(&states, index_seqs);
        Self { columns, values }
    }

    pub fn from_mode_degree_phrases(phrases: &[Vec<PitchClass>], final_pc: PitchClass) -> Self {
        let degrees = ModeDegree::all_for_final(final_pc);
        let states: Vec<String> = degrees.iter().map(|d| d.to_string()).collect();
        let index_seqs = phrases.iter().map(|phrase| {
            phrase
                .iter()
                .map(|pc| {
                    let degree = ModeDegree::from_pc_and_final(*pc, final_pc);
                    degrees.iter().position(|d| *d == degree).unwrap_or(0)
                })
                .collect()
        });
        let (columns, values) = condprob_matrix(&states, index_seqs);
        Self { columns, values }
    }
}

/// Build the flattened conditional-probability matrix over the given
/// states from state-index sequences. Rows with no outgoing transitions
/// contribute zeros.
fn condprob_matrix<I>(states: &[String], index_seqs: I) -> (Vec<String>, Vec<f64>)
where
    I: Iterator<Item = Vec<usize>>,
{
    let mut transitions: FxHashMap<(usize, usize), u32> = FxHashMap::default();
    let mut outgoing = vec![0u32; states.len()];

    for seq in index_seqs {
        for window in seq.windows(2) {
            let (from, to) = (window[0], window[1]);
            *transitions.entry((from, to)).or_insert(0) += 1;
            outgoing[from] += 1;
        }
    }

    let mut columns = Vec::with_capacity(states.len() * states.len());
    let mut values = Vec::with_capacity(states.len() * states.len());
    for (from, from_label) in states.iter().enumerate() {
        for (to, to_label) in states.iter().enumerate() {
            columns.push(format!("{from_label}->{to_label}"));
            let count = transitions.get(&(from, to)).copied().unwrap_or(0);
            let value = if outgoing[from] == 0 {
                0.0
            } else {
                f64::from(count) / f64::from(outgoing[from]) * 100.0
            };
            values.push(value);
        }
    }
    (columns, values)
}

/// Distribution of the pitch classes that immediately precede phrase
/// finals, in percent over the canonical column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproachesProfile {
    pub columns: Vec<String>,
    pub values: Vec<f64>,
}

impl ApproachesProfile {
    pub fn from_pc_phrases(phrases: &[Vec<PitchClass>]) -> Self {
        let approaches = phrases.iter().filter_map(|phrase| {
            // The note before the phrase-final; single-note phrases have
            // no approach.
            (phrase.len() >= 2).then(|| phrase[phrase.len() - 2])
        });
        let freqs = super::freqs::PcFreqs::from_pitch_classes(approaches);
        Self {
            columns: PitchClass::ALL.iter().map(|pc| pc.to_string()).collect(),
            values: freqs.rel_freqs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tendency_rows_sum_to_hundred_or_zero() {
        let phrases = vec![
            vec![PitchClass::G, PitchClass::A, PitchClass::G],
            vec![PitchClass::G, PitchClass::F, PitchClass::G],
        ];
        let profile = TendencyProfile::from_pc_phrases(&phrases);
        assert_eq!(profile.values.len(), 64);

        // Each "from" row sums to 100 (if the state occurs) or 0.
        for from in 0..8 {
            let row_sum: f64 = profile.values[from * 8..(from + 1) * 8].iter().sum();
            assert!(
                (row_sum - 100.0).abs() < 1e-9 || row_sum == 0.0,
                "row {from} sums to {row_sum}"
            );
        }
    }

    #[test]
    fn test_tendency_does_not_cross_phrase_boundaries() {
        // G ends phrase 1, A starts phrase 2: no G->A transition.
        let phrases = vec![
            vec![PitchClass::F, PitchClass::G],
            vec![PitchClass::A, PitchClass::B],
        ];
        let profile = TendencyProfile::from_pc_phrases(&phrases);
        let g = 7; // index of G in canonical order
        let a = 0; // index of A
        assert_eq!(profile.values[g * 8 + a], 0.0);
    }

    #[test]
    fn test_approaches_counts_penultimate_notes() {
        let phrases = vec![
            vec![PitchClass::A, PitchClass::F, PitchClass::G],
            vec![PitchClass::A, PitchClass::F, PitchClass::G],
            vec![PitchClass::G],
        ];
        let profile = ApproachesProfile::from_pc_phrases(&phrases);
        let f = PitchClass::ALL
            .iter()
            .position(|p| *p == PitchClass::F)
            .unwrap();
        assert!((profile.values[f] - 100.0).abs() < 1e-9);
    }
}
