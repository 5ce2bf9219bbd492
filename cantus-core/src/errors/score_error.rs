//! Errors raised while loading and validating a score.

/// Errors that can occur while parsing a MusicXML score or validating
/// its musical structure.
///
/// The two sanity-check variants (`AmenFormulaSanity`, `FrameSanity`)
/// flag music-theoretic configurations assumed impossible in the
/// repertoire. They identify the offending piece or phrase and are
/// never recovered from.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("XML error in '{piece}': {message}")]
    Xml { piece: String, message: String },

    #[error("piece '{piece}' has no part")]
    MissingPart { piece: String },

    #[error("piece '{piece}' must have exactly one tenor part, found {found} parts")]
    WrongPartCount { piece: String, found: usize },

    #[error("malformed pitch in '{piece}': {detail}")]
    MalformedPitch { piece: String, detail: String },

    #[error("phrase {phrase} of piece '{piece}' contains no notes")]
    EmptyPhrase { piece: String, phrase: usize },

    #[error(
        "phrase {phrase} of piece '{piece}' has a 5/4 time signature but no amen lyrics \
         were found; this is unexpected, please investigate"
    )]
    AmenFormulaSanity { piece: String, phrase: usize },

    #[error(
        "piece '{piece}' seems to have a monomodal frame because the first and last \
         phrase-final are the same, but the last phrase is an amen formula and the \
         penultimate phrase-final is different; what should we do in this case?"
    )]
    FrameSanity { piece: String },

    #[error("piece '{piece}' has fewer than three phrases; cannot determine frame type")]
    TooFewPhrases { piece: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
