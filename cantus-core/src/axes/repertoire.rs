//! Repertoire and genre axis.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::UnrecognizedValue;

/// The repertoire/genre combinations the engine knows about.
///
/// This axis contributes two path stubs: the repertoire forms the first
/// level of the output tree and the genre a deeper level, so results for
/// different genres of the same repertoire share a common root.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RepertoireAndGenre {
    PlainchantSequences,
    ResponsorialChants,
}

impl RepertoireAndGenre {
    /// The raw value used in configuration and at call sites.
    pub fn raw_value(self) -> &'static str {
        match self {
            RepertoireAndGenre::PlainchantSequences => "plainchant_sequences",
            RepertoireAndGenre::ResponsorialChants => "responsorial_chants",
        }
    }

    /// First path stub: the repertoire.
    pub fn path_stub_1(self) -> &'static str {
        match self {
            RepertoireAndGenre::PlainchantSequences | RepertoireAndGenre::ResponsorialChants => {
                "chant"
            }
        }
    }

    /// Second path stub: the genre.
    pub fn path_stub_2(self) -> &'static str {
        match self {
            RepertoireAndGenre::PlainchantSequences => "sequences",
            RepertoireAndGenre::ResponsorialChants => "responsorial_chants",
        }
    }
}

impl TryFrom<&str> for RepertoireAndGenre {
    type Error = UnrecognizedValue;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "plainchant_sequences" => Ok(RepertoireAndGenre::PlainchantSequences),
            "responsorial_chants" => Ok(RepertoireAndGenre::ResponsorialChants),
            other => Err(UnrecognizedValue::new("repertoire/genre", other)),
        }
    }
}

impl fmt::Display for RepertoireAndGenre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_value())
    }
}
