//! Shared test fixtures: deterministic dummy items, small feature
//! tables, and MusicXML snippets.

#![allow(dead_code)]

use cantus_core::{Ambitus, PitchClass};

use cantus_analysis::{AnalysisItem, Dendrogram, FeatureTable};

/// A synthetic analysis item with deterministic pitch content.
pub struct DummyItem {
    pub index: usize,
    pub final_pc: PitchClass,
    pub ambitus: Ambitus,
    pub pitch_classes: Vec<PitchClass>,
}

impl DummyItem {
    pub fn new(index: usize, final_pc: PitchClass, ambitus: Ambitus) -> Self {
        const NATURALS: [PitchClass; 7] = [
            PitchClass::A,
            PitchClass::B,
            PitchClass::C,
            PitchClass::D,
            PitchClass::E,
            PitchClass::F,
            PitchClass::G,
        ];

        // Simple LCG keyed by the item index keeps content reproducible.
        let mut state = index as u64;
        let mut pitch_classes = Vec::with_capacity(100);
        for _ in 0..100 {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let pick = ((state >> 33) as usize) % NATURALS.len();
            pitch_classes.push(NATURALS[pick]);
        }
        Self {
            index,
            final_pc,
            ambitus,
            pitch_classes,
        }
    }
}

impl AnalysisItem for DummyItem {
    fn descr(&self) -> String {
        format!("DummyItem #{}", self.index)
    }

    fn final_pc(&self) -> PitchClass {
        self.final_pc
    }

    fn ambitus(&self) -> Ambitus {
        self.ambitus
    }

    fn phrase_pitch_classes(&self) -> Vec<Vec<PitchClass>> {
        self.pitch_classes.chunks(10).map(|c| c.to_vec()).collect()
    }
}

/// Make `num` dummy items with consecutive indices starting at `start`.
pub fn make_dummy_items(
    start: usize,
    num: usize,
    final_pc: PitchClass,
    ambitus: Ambitus,
) -> Vec<DummyItem> {
    (start..start + num)
        .map(|i| DummyItem::new(i, final_pc, ambitus))
        .collect()
}

/// A small dendrogram over synthetic rows, for collection and export
/// tests that do not care about the clustering itself.
pub fn make_dendrogram(labels: &[&str]) -> Dendrogram {
    let mut table = FeatureTable::new(vec!["x".into(), "y".into(), "z".into()]);
    for (i, label) in labels.iter().enumerate() {
        let base = (i % 3) as f64;
        table.push_row(*label, vec![40.0 + base, 35.0 - base, 25.0]);
    }
    Dendrogram::new(&table, 0.7)
}

/// One measure of a synthetic MusicXML piece.
pub struct MeasureSpec {
    /// Notes as (pitch name, octave); `"B-"` denotes B flat.
    pub notes: Vec<(&'static str, i8)>,
    pub lyric: Option<&'static str>,
    pub time: Option<(u8, u8)>,
}

impl MeasureSpec {
    pub fn new(notes: &[(&'static str, i8)]) -> Self {
        Self {
            notes: notes.to_vec(),
            lyric: None,
            time: None,
        }
    }

    pub fn with_lyric(mut self, lyric: &'static str) -> Self {
        self.lyric = Some(lyric);
        self
    }

    pub fn with_time(mut self, beats: u8, beat_type: u8) -> Self {
        self.time = Some((beats, beat_type));
        self
    }
}

/// Render a single-part MusicXML document from measure specs.
pub fn musicxml_piece(measures: &[MeasureSpec]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<score-partwise version="3.1">
  <part-list>
    <score-part id="P1"><part-name>Tenor</part-name></score-part>
  </part-list>
  <part id="P1">
"#,
    );
    for (i, measure) in measures.iter().enumerate() {
        xml.push_str(&format!("    <measure number=\"{}\">\n", i + 1));
        if let Some((beats, beat_type)) = measure.time {
            xml.push_str(&format!(
                "      <attributes><time><beats>{beats}</beats><beat-type>{beat_type}</beat-type></time></attributes>\n"
            ));
        }
        for (j, (pitch, octave)) in measure.notes.iter().enumerate() {
            let (step, alter) = match *pitch {
                "B-" => ("B", Some(-1)),
                other => (other, None),
            };
            xml.push_str("      <note><pitch>");
            xml.push_str(&format!("<step>{step}</step>"));
            if let Some(alter) = alter {
                xml.push_str(&format!("<alter>{alter}</alter>"));
            }
            xml.push_str(&format!("<octave>{octave}</octave>"));
            xml.push_str("</pitch><duration>1</duration>");
            if j == 0 {
                if let Some(lyric) = measure.lyric {
                    xml.push_str(&format!("<lyric><text>{lyric}</text></lyric>"));
                }
            }
            xml.push_str("</note>\n");
        }
        xml.push_str("    </measure>\n");
    }
    xml.push_str("  </part>\n</score-partwise>\n");
    xml
}

/// A plain monomodal piece: `num_phrases` measures of three notes each,
/// all ending on `final_pitch`.
pub fn monomodal_musicxml(final_pitch: &'static str, num_phrases: usize) -> String {
    let measures: Vec<MeasureSpec> = (0..num_phrases)
        .map(|_| MeasureSpec::new(&[("A", 3), ("C", 4), (final_pitch, 3)]))
        .collect();
    musicxml_piece(&measures)
}
