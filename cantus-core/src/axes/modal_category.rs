//! Modal category axis: the grouping criterion and its concrete key.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::UnrecognizedValue;
use crate::types::{Ambitus, PitchClass};

/// The grouping criterion for modal categories: by final alone, or by
/// final plus ambitus.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ModalCategoryKind {
    Final,
    FinalAndAmbitus,
}

impl ModalCategoryKind {
    pub fn raw_value(self) -> &'static str {
        match self {
            ModalCategoryKind::Final => "final",
            ModalCategoryKind::FinalAndAmbitus => "final_and_ambitus",
        }
    }

    /// Whether items grouped under this criterion must share an ambitus.
    pub fn enforce_same_ambitus(self) -> bool {
        match self {
            ModalCategoryKind::Final => false,
            ModalCategoryKind::FinalAndAmbitus => true,
        }
    }
}

impl TryFrom<&str> for ModalCategoryKind {
    type Error = UnrecognizedValue;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "final" => Ok(ModalCategoryKind::Final),
            "final_and_ambitus" => Ok(ModalCategoryKind::FinalAndAmbitus),
            other => Err(UnrecognizedValue::new("modal category kind", other)),
        }
    }
}

impl fmt::Display for ModalCategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_value())
    }
}

/// A concrete modal category key: a final pitch class, optionally
/// qualified by ambitus.
///
/// Contributes two path stubs: the grouping kind, and a key stub that
/// identifies the concrete value (`final_G`, `plagal_C`, `authentic_D`).
/// The key stub alone identifies the bucket even outside its directory,
/// which is why it is also prefixed to exported filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ModalKey {
    Final(PitchClass),
    FinalAndAmbitus(PitchClass, Ambitus),
}

impl ModalKey {
    pub fn kind(&self) -> ModalCategoryKind {
        match self {
            ModalKey::Final(_) => ModalCategoryKind::Final,
            ModalKey::FinalAndAmbitus(..) => ModalCategoryKind::FinalAndAmbitus,
        }
    }

    /// The final pitch class of this category.
    pub fn final_pc(&self) -> PitchClass {
        match self {
            ModalKey::Final(pc) | ModalKey::FinalAndAmbitus(pc, _) => *pc,
        }
    }

    /// First path stub: the grouping kind.
    pub fn path_stub_1(&self) -> &'static str {
        self.kind().raw_value()
    }

    /// Second path stub: the concrete key value.
    pub fn path_stub_2(&self) -> String {
        match self {
            ModalKey::Final(pc) => format!("final_{pc}"),
            ModalKey::FinalAndAmbitus(pc, ambitus) => format!("{ambitus}_{pc}"),
        }
    }

    /// Human-readable label for chart titles.
    pub fn descr(&self) -> String {
        match self {
            ModalKey::Final(pc) => format!("final {pc}"),
            ModalKey::FinalAndAmbitus(pc, ambitus) => format!("{ambitus} {pc}"),
        }
    }
}

impl fmt::Display for ModalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path_stub_2())
    }
}
