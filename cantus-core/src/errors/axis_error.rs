//! Rejection of values outside a closed axis enumeration.

/// An axis constructor received a value outside its closed set.
///
/// Raised by the `TryFrom<&str>` impls on the axis types. Always fatal:
/// an unrecognized axis value would silently corrupt the output tree if
/// it were coerced into a path stub.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {axis} value: '{value}'")]
pub struct UnrecognizedValue {
    /// Name of the axis whose constructor rejected the value.
    pub axis: &'static str,
    /// The offending raw value.
    pub value: String,
}

impl UnrecognizedValue {
    pub fn new(axis: &'static str, value: impl Into<String>) -> Self {
        Self {
            axis,
            value: value.into(),
        }
    }
}
