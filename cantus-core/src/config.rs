//! Engine configuration.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::axes::RepertoireAndGenre;
use crate::errors::ConfigError;

/// Environment variable naming the corpus root directory.
pub const MUSICXML_ROOT_ENV_VAR: &str = "CANTUS_MUSICXML_ROOT";

/// Configuration for a cantus run.
///
/// The corpus root contains one subdirectory of MusicXML files per
/// repertoire/genre (named by its raw value), unless overridden
/// per-repertoire in `repertoire_dirs`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CantusConfig {
    /// Root directory of the MusicXML corpus.
    pub musicxml_root: Option<PathBuf>,
    /// Per-repertoire directory overrides, keyed by raw repertoire value.
    pub repertoire_dirs: BTreeMap<String, PathBuf>,
}

impl CantusConfig {
    /// Build a config rooted at the given corpus directory.
    pub fn with_root(musicxml_root: impl Into<PathBuf>) -> Self {
        Self {
            musicxml_root: Some(musicxml_root.into()),
            repertoire_dirs: BTreeMap::new(),
        }
    }

    /// Read the corpus root from `CANTUS_MUSICXML_ROOT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let root = std::env::var(MUSICXML_ROOT_ENV_VAR).map_err(|_| ConfigError::MissingEnv {
            var: MUSICXML_ROOT_ENV_VAR,
        })?;
        Ok(Self::with_root(root))
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// The MusicXML directory for a repertoire: the per-repertoire
    /// override if present, otherwise `<root>/<raw value>`.
    pub fn musicxml_dir(&self, rep_and_genre: RepertoireAndGenre) -> PathBuf {
        if let Some(dir) = self.repertoire_dirs.get(rep_and_genre.raw_value()) {
            return dir.clone();
        }
        self.musicxml_root
            .clone()
            .unwrap_or_default()
            .join(rep_and_genre.raw_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_musicxml_dir_defaults_to_root_subdir() {
        let cfg = CantusConfig::with_root("/data/corpus");
        assert_eq!(
            cfg.musicxml_dir(RepertoireAndGenre::PlainchantSequences),
            PathBuf::from("/data/corpus/plainchant_sequences")
        );
    }

    #[test]
    fn test_repertoire_override_wins() {
        let mut cfg = CantusConfig::with_root("/data/corpus");
        cfg.repertoire_dirs.insert(
            "plainchant_sequences".to_owned(),
            PathBuf::from("/elsewhere/seq"),
        );
        assert_eq!(
            cfg.musicxml_dir(RepertoireAndGenre::PlainchantSequences),
            PathBuf::from("/elsewhere/seq")
        );
        assert_eq!(
            cfg.musicxml_dir(RepertoireAndGenre::ResponsorialChants),
            PathBuf::from("/data/corpus/responsorial_chants")
        );
    }

    #[test]
    fn test_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cantus.toml");
        std::fs::write(&path, "musicxml_root = \"/data/corpus\"\n").unwrap();
        let cfg = CantusConfig::from_toml_file(&path).unwrap();
        assert_eq!(cfg.musicxml_root, Some(PathBuf::from("/data/corpus")));
    }
}
