//! A plainchant sequence piece parsed from MusicXML.

use std::fmt;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::{Deserialize, Serialize};

use cantus_core::{Note, PitchClass, ScoreError};

/// Possible frame types for pieces, derived from the relationship
/// between the first and the closing phrase-finals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameType {
    MonomodalFrame,
    HeavyPolymodalFrame1,
    HeavyPolymodalFrame2,
    LightPolymodalFrame1,
    LightPolymodalFrame2,
}

impl FrameType {
    /// Heavy polymodal pieces have no well-defined main final.
    pub fn is_heavy_polymodal(self) -> bool {
        matches!(
            self,
            FrameType::HeavyPolymodalFrame1 | FrameType::HeavyPolymodalFrame2
        )
    }
}

/// A phrase of a plainchant sequence piece. Phrases correspond to
/// measures in the MusicXML encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
    pub number: usize,
    pub notes: Vec<Note>,
    pub lyrics: Vec<String>,
    /// Time signature in effect for this phrase, as (beats, beat type).
    pub time_signature: (u8, u8),
}

impl Phrase {
    pub fn pitch_classes(&self) -> Vec<PitchClass> {
        self.notes.iter().map(|n| n.pitch_class).collect()
    }

    /// The phrase-final: the pitch class of the last note.
    pub fn phrase_final(&self) -> PitchClass {
        // Construction rejects empty phrases.
        self.notes[self.notes.len() - 1].pitch_class
    }

    /// The last note of the phrase, with octave.
    pub fn note_of_final(&self) -> Note {
        self.notes[self.notes.len() - 1]
    }

    pub fn lowest_note(&self) -> Note {
        *self
            .notes
            .iter()
            .min_by_key(|n| n.midi_number())
            .unwrap_or(&self.notes[0])
    }

    fn has_five_four_time(&self) -> bool {
        self.time_signature == (5, 4)
    }

    fn lyrics_contain_amen(&self) -> bool {
        let joined: String = self
            .lyrics
            .iter()
            .flat_map(|s| s.chars())
            .filter(|c| c.is_ascii_alphabetic())
            .collect::<String>()
            .to_ascii_lowercase();
        joined.contains("amen")
    }

    /// Whether this phrase is an amen formula: a 5/4 measure carrying
    /// the lyrics "Amen". A 5/4 phrase without amen lyrics violates an
    /// assumption about the repertoire and is reported as an error.
    pub fn is_amen_formula(&self, piece_name: &str) -> Result<bool, ScoreError> {
        let five_four = self.has_five_four_time();
        let amen = self.lyrics_contain_amen();
        if five_four && !amen {
            return Err(ScoreError::AmenFormulaSanity {
                piece: piece_name.to_owned(),
                phrase: self.number,
            });
        }
        Ok(five_four && amen)
    }
}

/// A plainchant sequence piece: a single tenor part whose measures are
/// the phrases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub name: String,
    pub filename: String,
    pub phrases: Vec<Phrase>,
    pub frame_type: FrameType,
    pub has_amen_formula: bool,
    /// The first phrase-final, unless the piece has a heavy polymodal
    /// frame (in which case there is no main final).
    pub main_final: Option<PitchClass>,
}

impl Piece {
    /// Load a piece from a MusicXML file.
    pub fn from_file(path: &Path) -> Result<Self, ScoreError> {
        let filename = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        let xml = std::fs::read_to_string(path)?;
        let mut piece = Self::from_musicxml_str(&filename, &xml)?;
        piece.filename = path.to_string_lossy().into_owned();
        Ok(piece)
    }

    /// Parse a piece from MusicXML text. The name is derived from the
    /// filename by dropping the `.xml` suffix and replacing underscores
    /// with spaces.
    pub fn from_musicxml_str(filename: &str, xml: &str) -> Result<Self, ScoreError> {
        let name = filename
            .trim_end_matches(".xml")
            .replace('_', " ")
            .trim()
            .to_owned();

        let (num_parts, phrases) = parse_musicxml(&name, xml)?;
        if num_parts == 0 {
            return Err(ScoreError::MissingPart { piece: name });
        }
        if num_parts != 1 {
            return Err(ScoreError::WrongPartCount {
                piece: name,
                found: num_parts,
            });
        }
        if phrases.len() < 3 {
            return Err(ScoreError::TooFewPhrases { piece: name });
        }

        let finals: Vec<PitchClass> = phrases.iter().map(|p| p.phrase_final()).collect();
        let has_amen_formula = phrases[phrases.len() - 1].is_amen_formula(&name)?;
        let frame_type = calculate_frame_type(&name, &finals, has_amen_formula)?;
        let main_final = if frame_type.is_heavy_polymodal() {
            None
        } else {
            Some(finals[0])
        };

        Ok(Self {
            name,
            filename: filename.to_owned(),
            phrases,
            frame_type,
            has_amen_formula,
            main_final,
        })
    }

    pub fn phrase_finals(&self) -> Vec<PitchClass> {
        self.phrases.iter().map(|p| p.phrase_final()).collect()
    }

    /// Phrases whose phrase-final matches the main final. Empty for
    /// heavy polymodal pieces.
    pub fn non_modulatory_phrases(&self) -> Vec<&Phrase> {
        match self.main_final {
            Some(main_final) => self
                .phrases
                .iter()
                .filter(|p| p.phrase_final() == main_final)
                .collect(),
            None => Vec::new(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Piece '{}'>", self.name)
    }
}

/// Decide the frame type from the sequence of phrase-finals.
fn calculate_frame_type(
    piece_name: &str,
    finals: &[PitchClass],
    has_amen_formula: bool,
) -> Result<FrameType, ScoreError> {
    let first = finals[0];
    let last = finals[finals.len() - 1];
    let penultimate = finals[finals.len() - 2];
    let antepenultimate = finals[finals.len() - 3];

    if first == last {
        // Sanity check to ensure that amen formulas don't behave weirdly.
        if has_amen_formula && first != penultimate {
            return Err(ScoreError::FrameSanity {
                piece: piece_name.to_owned(),
            });
        }
        Ok(FrameType::MonomodalFrame)
    } else if !has_amen_formula {
        Ok(FrameType::HeavyPolymodalFrame1)
    } else if first == penultimate {
        Ok(FrameType::LightPolymodalFrame1)
    } else if first == antepenultimate {
        Ok(FrameType::LightPolymodalFrame2)
    } else {
        Ok(FrameType::HeavyPolymodalFrame2)
    }
}

/// Which leaf element's text we are currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextTarget {
    Step,
    Alter,
    Octave,
    LyricText,
    Beats,
    BeatType,
}

/// Pull-parse the MusicXML document: count `<part>` elements and
/// collect one phrase per `<measure>`.
fn parse_musicxml(piece_name: &str, xml: &str) -> Result<(usize, Vec<Phrase>), ScoreError> {
    let mut reader = Reader::from_str(xml);

    let mut num_parts = 0usize;
    let mut in_part = false;
    let mut phrases: Vec<Phrase> = Vec::new();

    let mut current_time: (u8, u8) = (4, 4);
    let mut pending_beats: Option<u8> = None;
    let mut pending_beat_type: Option<u8> = None;

    let mut measure_number: Option<usize> = None;
    let mut measure_notes: Vec<Note> = Vec::new();
    let mut measure_lyrics: Vec<String> = Vec::new();

    let mut in_note = false;
    let mut is_rest = false;
    let mut step: Option<char> = None;
    let mut alter: i8 = 0;
    let mut octave: Option<i8> = None;

    let mut text_target: Option<TextTarget> = None;

    let xml_err = |e: &dyn fmt::Display| ScoreError::Xml {
        piece: piece_name.to_owned(),
        message: e.to_string(),
    };

    loop {
        match reader.read_event().map_err(|e| xml_err(&e))? {
            Event::Start(e) => match e.name().as_ref() {
                b"part" => {
                    num_parts += 1;
                    in_part = true;
                }
                b"measure" if in_part => {
                    let number = e
                        .try_get_attribute("number")
                        .ok()
                        .flatten()
                        .and_then(|a| String::from_utf8(a.value.into_owned()).ok())
                        .and_then(|s| s.parse::<usize>().ok());
                    measure_number = Some(number.unwrap_or(phrases.len() + 1));
                    measure_notes.clear();
                    measure_lyrics.clear();
                }
                b"note" if in_part => {
                    in_note = true;
                    is_rest = false;
                    step = None;
                    alter = 0;
                    octave = None;
                }
                b"step" if in_note => text_target = Some(TextTarget::Step),
                b"alter" if in_note => text_target = Some(TextTarget::Alter),
                b"octave" if in_note => text_target = Some(TextTarget::Octave),
                b"text" if in_note => text_target = Some(TextTarget::LyricText),
                b"beats" => text_target = Some(TextTarget::Beats),
                b"beat-type" => text_target = Some(TextTarget::BeatType),
                b"rest" if in_note => is_rest = true,
                _ => {}
            },
            Event::Empty(e) => {
                if in_note && e.name().as_ref() == b"rest" {
                    is_rest = true;
                }
            }
            Event::Text(t) => {
                let text = t.unescape().map_err(|e| xml_err(&e))?;
                let text = text.trim();
                if text.is_empty() {
                    continue;
                }
                match text_target {
                    Some(TextTarget::Step) => step = text.chars().next(),
                    Some(TextTarget::Alter) => {
                        alter = text.parse::<i8>().map_err(|_| ScoreError::MalformedPitch {
                            piece: piece_name.to_owned(),
                            detail: format!("unparsable alter value '{text}'"),
                        })?;
                    }
                    Some(TextTarget::Octave) => {
                        octave =
                            Some(text.parse::<i8>().map_err(|_| ScoreError::MalformedPitch {
                                piece: piece_name.to_owned(),
                                detail: format!("unparsable octave value '{text}'"),
                            })?);
                    }
                    Some(TextTarget::LyricText) => measure_lyrics.push(text.to_owned()),
                    Some(TextTarget::Beats) => pending_beats = text.parse::<u8>().ok(),
                    Some(TextTarget::BeatType) => pending_beat_type = text.parse::<u8>().ok(),
                    None => {}
                }
            }
            Event::End(e) => {
                match e.name().as_ref() {
                    b"part" => in_part = false,
                    b"time" => {
                        if let (Some(beats), Some(beat_type)) = (pending_beats, pending_beat_type) {
                            current_time = (beats, beat_type);
                        }
                        pending_beats = None;
                        pending_beat_type = None;
                    }
                    b"note" if in_note => {
                        if !is_rest {
                            let note = build_note(piece_name, step, alter, octave)?;
                            measure_notes.push(note);
                        }
                        in_note = false;
                    }
                    b"measure" if in_part => {
                        let number = measure_number.take().unwrap_or(phrases.len() + 1);
                        if measure_notes.is_empty() {
                            return Err(ScoreError::EmptyPhrase {
                                piece: piece_name.to_owned(),
                                phrase: number,
                            });
                        }
                        phrases.push(Phrase {
                            number,
                            notes: std::mem::take(&mut measure_notes),
                            lyrics: std::mem::take(&mut measure_lyrics),
                            time_signature: current_time,
                        });
                    }
                    _ => {}
                }
                // Leaf targets close with their elements.
                if matches!(
                    e.name().as_ref(),
                    b"step" | b"alter" | b"octave" | b"text" | b"beats" | b"beat-type"
                ) {
                    text_target = None;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok((num_parts, phrases))
}

/// Map a MusicXML (step, alter, octave) triple to a note. The gamut
/// admits only naturals and B flat.
fn build_note(
    piece_name: &str,
    step: Option<char>,
    alter: i8,
    octave: Option<i8>,
) -> Result<Note, ScoreError> {
    let malformed = |detail: String| ScoreError::MalformedPitch {
        piece: piece_name.to_owned(),
        detail,
    };

    let step = step.ok_or_else(|| malformed("note without a step".to_owned()))?;
    let octave = octave.ok_or_else(|| malformed("note without an octave".to_owned()))?;

    let pitch_class = match (step, alter) {
        ('A', 0) => PitchClass::A,
        ('B', -1) => PitchClass::BFlat,
        ('B', 0) => PitchClass::B,
        ('C', 0) => PitchClass::C,
        ('D', 0) => PitchClass::D,
        ('E', 0) => PitchClass::E,
        ('F', 0) => PitchClass::F,
        ('G', 0) => PitchClass::G,
        (step, alter) => {
            return Err(malformed(format!(
                "pitch '{step}' with alter {alter} is outside the gamut"
            )));
        }
    };
    Ok(Note::new(pitch_class, octave))
}
