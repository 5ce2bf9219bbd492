//! Absolute and relative frequencies of pitch classes and mode degrees.

use std::ops::Add;

use serde::{Deserialize, Serialize};

use cantus_core::{ModeDegree, PitchClass};

/// Absolute pitch-class counts over the canonical column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PcFreqs {
    counts: [u32; 8],
}

impl PcFreqs {
    /// The additive identity, used when summing frequencies over phrases.
    pub const ZERO: PcFreqs = PcFreqs { counts: [0; 8] };

    pub fn from_pitch_classes<I>(pitch_classes: I) -> Self
    where
        I: IntoIterator<Item = PitchClass>,
    {
        let mut counts = [0u32; 8];
        for pc in pitch_classes {
            let idx = PitchClass::ALL.iter().position(|p| *p == pc).unwrap_or(0);
            counts[idx] += 1;
        }
        Self { counts }
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Absolute counts paired with their pitch classes, in column order.
    pub fn abs_freqs(&self) -> impl Iterator<Item = (PitchClass, u32)> + '_ {
        PitchClass::ALL.into_iter().zip(self.counts)
    }

    /// Relative frequencies in percent, in column order. All zeros for
    /// empty input.
    pub fn rel_freqs(&self) -> Vec<f64> {
        let total = self.total();
        if total == 0 {
            return vec![0.0; 8];
        }
        self.counts
            .iter()
            .map(|&c| f64::from(c) / f64::from(total) * 100.0)
            .collect()
    }
}

impl Add for PcFreqs {
    type Output = PcFreqs;

    fn add(self, rhs: PcFreqs) -> PcFreqs {
        let mut counts = self.counts;
        for (c, r) in counts.iter_mut().zip(rhs.counts) {
            *c += r;
        }
        PcFreqs { counts }
    }
}

/// Absolute mode-degree counts relative to a given final.
///
/// The column set depends on the final (the flat degree follows the
/// letter B), so the final is part of the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeDegreeFreqs {
    final_pc: PitchClass,
    columns: Vec<ModeDegree>,
    counts: Vec<u32>,
}

impl ModeDegreeFreqs {
    pub fn from_pitch_classes_and_final<I>(pitch_classes: I, final_pc: PitchClass) -> Self
    where
        I: IntoIterator<Item = PitchClass>,
    {
        let columns = ModeDegree::all_for_final(final_pc);
        let mut counts = vec![0u32; columns.len()];
        for pc in pitch_classes {
            let degree = ModeDegree::from_pc_and_final(pc, final_pc);
            if let Some(idx) = columns.iter().position(|d| *d == degree) {
                counts[idx] += 1;
            }
        }
        Self {
            final_pc,
            columns,
            counts,
        }
    }

    pub fn final_pc(&self) -> PitchClass {
        self.final_pc
    }

    pub fn columns(&self) -> &[ModeDegree] {
        &self.columns
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Relative frequencies in percent, in column order.
    pub fn rel_freqs(&self) -> Vec<f64> {
        let total = self.total();
        if total == 0 {
            return vec![0.0; self.columns.len()];
        }
        self.counts
            .iter()
            .map(|&c| f64::from(c) / f64::from(total) * 100.0)
            .collect()
    }
}
