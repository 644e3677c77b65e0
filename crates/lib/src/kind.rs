//! The closed set of shapes a [`Variant`](crate::Variant) can take.

use std::fmt;

/// Discriminant of a [`Variant`](crate::Variant).
///
/// Exactly one kind is active per value at any time. Finer-grained views over
/// numbers and strings (byte, int, character, ...) are not kinds; they are
/// [data kinds](crate::DataKind) derived from the stored payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    /// No value
    Null,
    /// `true` or `false`
    Boolean,
    /// A 64-bit float; every numeric data kind is a view over it
    Number,
    /// UTF-8 text
    String,
    /// Ordered sequence of variants
    List,
    /// Name-keyed mapping of variants
    Map,
}

impl VariantKind {
    /// All kinds, in declaration order.
    pub const ALL: [VariantKind; 6] = [
        VariantKind::Null,
        VariantKind::Boolean,
        VariantKind::Number,
        VariantKind::String,
        VariantKind::List,
        VariantKind::Map,
    ];

    /// Lowercase name used in error messages and serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            VariantKind::Null => "null",
            VariantKind::Boolean => "boolean",
            VariantKind::Number => "number",
            VariantKind::String => "string",
            VariantKind::List => "list",
            VariantKind::Map => "map",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
