//! Loading a corpus of pieces from MusicXML files.

use std::path::PathBuf;
use std::time::Instant;

use cantus_core::{CantusConfig, CorpusError, RepertoireAndGenre};

use super::piece::Piece;

/// Load the pieces of a repertoire from MusicXML files in the
/// configured directory.
///
/// `pattern` can be used to restrict loading to a subset of files (for
/// example during testing); it defaults to `*.xml`. Filenames are
/// sorted before loading so the piece order is stable.
pub fn load_pieces(
    rep_and_genre: RepertoireAndGenre,
    config: &CantusConfig,
    pattern: Option<&str>,
) -> Result<Vec<Piece>, CorpusError> {
    match rep_and_genre {
        RepertoireAndGenre::PlainchantSequences => {}
        other => {
            return Err(CorpusError::UnsupportedRepertoire {
                repertoire: other.raw_value().to_owned(),
            });
        }
    }

    let dir = config.musicxml_dir(rep_and_genre);
    let pattern = pattern.unwrap_or("*.xml");
    let glob_pattern = dir.join(pattern).to_string_lossy().into_owned();

    let mut filenames: Vec<PathBuf> = glob::glob(&glob_pattern)
        .map_err(|e| CorpusError::InvalidPattern {
            pattern: pattern.to_owned(),
            message: e.to_string(),
        })?
        .filter_map(Result::ok)
        .collect();
    filenames.sort();

    tracing::debug!(
        num_files = filenames.len(),
        pattern,
        "found pieces matching the pattern"
    );
    tracing::debug!("loading pieces...");
    let tic = Instant::now();

    let mut pieces = Vec::with_capacity(filenames.len());
    for filename in &filenames {
        pieces.push(Piece::from_file(filename)?);
    }

    tracing::debug!(
        num_pieces = pieces.len(),
        elapsed_secs = format!("{:.2}", tic.elapsed().as_secs_f64()),
        "done loading pieces"
    );
    Ok(pieces)
}
