//! Analysis unit axis.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::UnrecognizedValue;

/// The unit in which note material is counted: raw pitch classes, or
/// mode degrees relative to the modal final.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Unit {
    Pcs,
    ModeDegrees,
}

impl Unit {
    pub fn raw_value(self) -> &'static str {
        match self {
            Unit::Pcs => "pcs",
            Unit::ModeDegrees => "mode_degrees",
        }
    }

    /// The canonical path fragment; identical to the raw value.
    pub fn path_stub(self) -> &'static str {
        self.raw_value()
    }
}

impl TryFrom<&str> for Unit {
    type Error = UnrecognizedValue;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "pcs" => Ok(Unit::Pcs),
            "mode_degrees" => Ok(Unit::ModeDegrees),
            other => Err(UnrecognizedValue::new("unit", other)),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_value())
    }
}
