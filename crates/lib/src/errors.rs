//! Error types for Variant operations.
//!
//! Every failure of a Variant operation is one of five structured errors. They
//! describe contract violations at the call site (wrong receiver kind, missing
//! child, lossy coercion, unsupported source value) rather than transient
//! conditions, so none of them are retried internally. Callers that expect
//! absence use the `_or_null` / `_or_default` method families instead of
//! matching on these errors.

use thiserror::Error;

use crate::VariantKind;

/// Result type for Variant operations.
pub type Result<T> = std::result::Result<T, VariantError>;

/// Structured error types for Variant operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VariantError {
    /// The receiver's kind is not one of the kinds the operation requires
    #[error("Variant kind is {actual}, but {} is required", KindList(.required))]
    TypeMismatch {
        actual: VariantKind,
        required: &'static [VariantKind],
    },

    /// List index outside `[0, size)`, reported exactly as given
    #[error("List size is {size}, but index {index} was given")]
    ChildIndex { index: i128, size: usize },

    /// Map has no child under the given name
    #[error("Map does not have a child named \"{name}\"")]
    ChildName { name: String },

    /// The stored value cannot be represented losslessly as the requested data kind
    #[error("Variant kind is {actual}, but it was converted to {requested}")]
    Value {
        actual: VariantKind,
        requested: &'static str,
    },

    /// A value of an unsupported type was assigned
    #[error("Variant does not support type {type_name}")]
    SetValue { type_name: String },
}

impl VariantError {
    pub(crate) fn type_mismatch(actual: VariantKind, required: &'static [VariantKind]) -> Self {
        VariantError::TypeMismatch { actual, required }
    }

    /// Check if the receiver had the wrong kind for the operation
    pub fn is_type_error(&self) -> bool {
        matches!(self, VariantError::TypeMismatch { .. })
    }

    /// Check if a list index was out of range
    pub fn is_index_error(&self) -> bool {
        matches!(self, VariantError::ChildIndex { .. })
    }

    /// Check if a map name was absent
    pub fn is_name_error(&self) -> bool {
        matches!(self, VariantError::ChildName { .. })
    }

    /// Check if a requested child was missing, by index or by name
    pub fn is_not_found(&self) -> bool {
        self.is_index_error() || self.is_name_error()
    }

    /// Check if a data kind coercion failed
    pub fn is_value_error(&self) -> bool {
        matches!(self, VariantError::Value { .. })
    }

    /// Check if an assignment was rejected
    pub fn is_set_value_error(&self) -> bool {
        matches!(self, VariantError::SetValue { .. })
    }

    /// Get the receiver kind if this error carries one
    pub fn actual_kind(&self) -> Option<VariantKind> {
        match self {
            VariantError::TypeMismatch { actual, .. } | VariantError::Value { actual, .. } => {
                Some(*actual)
            }
            _ => None,
        }
    }

    /// Get the missing name if this is a name lookup error
    pub fn name(&self) -> Option<&str> {
        match self {
            VariantError::ChildName { name } => Some(name),
            _ => None,
        }
    }

    /// Get the offending index if this is an index lookup error
    pub fn index(&self) -> Option<i128> {
        match self {
            VariantError::ChildIndex { index, .. } => Some(*index),
            _ => None,
        }
    }
}

// Renders one kind bare and several as `[a, b, c]`
struct KindList<'a>(&'a [VariantKind]);

impl std::fmt::Display for KindList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            [single] => write!(f, "{single}"),
            kinds => {
                write!(f, "[")?;
                for (i, kind) in kinds.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{kind}")?;
                }
                write!(f, "]")
            }
        }
    }
}

// Conversion from VariantError to the main Error type
impl From<VariantError> for crate::Error {
    fn from(err: VariantError) -> Self {
        crate::Error::Variant(err)
    }
}
