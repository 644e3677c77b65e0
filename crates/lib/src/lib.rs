//!
//! Variant: a dynamically-typed value tree.
//!
//! A [`Variant`] holds exactly one of null, a boolean, a number, a string, an
//! ordered list of variants or a name-keyed map of variants. It offers
//! kind-checked access and mutation, lossless coercions to narrower data
//! kinds, JSON interchange, string rendering and structural equality.
//!
//! ## Core Concepts
//!
//! * **Kinds (`VariantKind`)**: The six shapes a value can take. The payload of a
//!   `Variant` always matches its kind, since the kind is the enum variant itself.
//! * **Data kinds (`DataKind`)**: Typed views over the stored payload (`bool`, `i8`,
//!   `i16`, `i32`, `i64`, `f32`, `f64`, `char`, `String`, lists and maps). A number
//!   is an `i8` only if the stored double narrows to `i8` and widens back unchanged.
//! * **Children**: Lists are indexed by integer and maps by name through the same
//!   [`ChildKey`] abstraction. Every lookup comes in three policies: strict
//!   (`get`), absent-as-`None` (`get_or_null`) and absent-as-default (`get_or_default`).
//! * **Copy-in ownership**: Containers own their children exclusively. Inserting a
//!   borrowed value clones it, so no two trees ever share a node.
//!
//! ```
//! use variant::Variant;
//!
//! let mut doc = Variant::new_map(Default::default());
//! doc.set_child("name", "Alice")?;
//! doc.set_child("tags", vec!["a", "b"])?;
//! doc.get_mut("tags")?.add_first("z")?;
//!
//! assert_eq!(doc.get_string("name")?, "Alice");
//! assert_eq!(doc.get("tags")?.get_string(0)?, "z");
//! assert!(doc.get("missing").unwrap_err().is_not_found());
//! # Ok::<(), variant::Error>(())
//! ```

pub mod accessors;
pub mod data_kind;
pub mod errors;
pub mod json;
pub mod kind;
pub mod ser;
pub mod variant;

pub use data_kind::DataKind;
pub use errors::VariantError;
pub use kind::VariantKind;
pub use variant::{ChildKey, Variant, VariantList, VariantMap};

/// Result type used throughout the variant library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the variant library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured errors from Variant operations
    #[error(transparent)]
    Variant(VariantError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Variant(_) => "variant",
            Error::Json(_) => "json",
        }
    }

    /// Check if this error indicates a child was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Variant(err) => err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is a receiver kind mismatch.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Variant(err) => err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error is a failed data kind coercion.
    pub fn is_value_error(&self) -> bool {
        match self {
            Error::Variant(err) => err.is_value_error(),
            _ => false,
        }
    }

    /// Check if this error is a rejected assignment.
    pub fn is_set_value_error(&self) -> bool {
        match self {
            Error::Variant(err) => err.is_set_value_error(),
            _ => false,
        }
    }

    /// Check if this error came from parsing or producing JSON text.
    pub fn is_json_error(&self) -> bool {
        matches!(self, Error::Json(_))
    }
}
