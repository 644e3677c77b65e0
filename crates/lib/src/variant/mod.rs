//! The Variant value type.
//!
//! This module provides the [`Variant`] enum and everything that concerns a
//! value as a whole: construction, assignment, kind and size queries,
//! rendering, equality and hashing. Child access lives in [`child`], list
//! editing in [`list`] and iteration in [`traversal`].
//!
//! # Ownership
//!
//! A list or map owns its children. Building a variant from a borrowed source
//! deep-copies it; building from an owned source moves it. Either way the new
//! tree never shares nodes with anything else:
//!
//! ```
//! use variant::Variant;
//!
//! let source = vec![Variant::new(1), Variant::new("x")];
//! let mut copy = Variant::new(&source);
//! copy.set_child(0, 99)?;
//!
//! assert_eq!(source[0], 1);
//! assert_eq!(copy.get_int(0)?, 99);
//! # Ok::<(), variant::VariantError>(())
//! ```

use std::{
    collections::{BTreeMap, HashMap, hash_map::DefaultHasher},
    fmt,
    hash::{BuildHasher, Hash, Hasher},
};

use crate::{VariantError, VariantKind, errors::Result};

pub mod child;
pub mod list;
pub mod traversal;

pub use child::ChildKey;

/// Ordered children of a list variant.
pub type VariantList = Vec<Variant>;

/// Named children of a map variant. Iteration order is unspecified.
pub type VariantMap = HashMap<String, Variant>;

/// A dynamically-typed value.
///
/// Each enum variant corresponds to one [`VariantKind`], so the payload can
/// never disagree with the kind. All numbers share a single `f64` slot; the
/// narrower numeric views (`i8`, `i32`, `f32`, ...) are computed on access by
/// the [`DataKind`](crate::DataKind) layer.
///
/// # Equality
///
/// Equality is structural: lists compare element by element in order, maps
/// compare by key regardless of insertion order. Two NaN numbers are equal so
/// that `Eq` stays reflexive, and [`Hash`] agrees with `Eq` everywhere, which
/// makes variants usable as `HashMap` keys.
///
/// ```
/// use variant::Variant;
///
/// let mut a = Variant::new_map(Default::default());
/// a.set_child("x", 1)?.set_child("y", 2)?;
/// let mut b = Variant::new_map(Default::default());
/// b.set_child("y", 2)?.set_child("x", 1)?;
///
/// assert_eq!(a, b);
/// assert_eq!(a.size()?, 2);
/// # Ok::<(), variant::VariantError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub enum Variant {
    /// No value
    #[default]
    Null,
    /// Boolean value
    Boolean(bool),
    /// Number, stored as a 64-bit float
    Number(f64),
    /// Text string value
    String(String),
    /// Ordered collection of variants
    List(VariantList),
    /// Name-keyed collection of variants
    Map(VariantMap),
}

const TEXT_OR_CONTAINER: &[VariantKind] =
    &[VariantKind::String, VariantKind::List, VariantKind::Map];

impl Variant {
    /// Creates a variant from any statically supported value.
    ///
    /// See [`Variant::try_new`] for values that are only known to be
    /// `Serialize` and may be rejected at runtime.
    pub fn new(value: impl Into<Variant>) -> Self {
        value.into()
    }

    /// Creates a null variant.
    pub fn new_null() -> Self {
        Variant::Null
    }

    /// Replaces the whole value of this variant.
    ///
    /// Previous children are dropped before the new value is stored. Returns
    /// the receiver so assignments can be chained.
    pub fn set(&mut self, value: impl Into<Variant>) -> &mut Self {
        *self = value.into();
        self
    }

    /// Returns the kind of the stored value.
    pub fn kind(&self) -> VariantKind {
        match self {
            Variant::Null => VariantKind::Null,
            Variant::Boolean(_) => VariantKind::Boolean,
            Variant::Number(_) => VariantKind::Number,
            Variant::String(_) => VariantKind::String,
            Variant::List(_) => VariantKind::List,
            Variant::Map(_) => VariantKind::Map,
        }
    }

    /// Returns true if the stored value has the given kind.
    pub fn is(&self, kind: VariantKind) -> bool {
        self.kind() == kind
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Variant::Null)
    }

    /// Returns the character count of a string, or the child count of a list or map.
    pub fn size(&self) -> Result<usize> {
        match self {
            Variant::String(text) => Ok(text.chars().count()),
            Variant::List(items) => Ok(items.len()),
            Variant::Map(entries) => Ok(entries.len()),
            other => Err(VariantError::type_mismatch(
                other.kind(),
                TEXT_OR_CONTAINER,
            )),
        }
    }

    /// Borrows the text of a string variant
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Variant::String(text) => Some(text),
            _ => None,
        }
    }

    /// Borrows the children of a list variant
    pub fn as_list_ref(&self) -> Option<&VariantList> {
        match self {
            Variant::List(items) => Some(items),
            _ => None,
        }
    }

    /// Mutably borrows the children of a list variant
    pub fn as_list_mut(&mut self) -> Option<&mut VariantList> {
        match self {
            Variant::List(items) => Some(items),
            _ => None,
        }
    }

    /// Borrows the children of a map variant
    pub fn as_map_ref(&self) -> Option<&VariantMap> {
        match self {
            Variant::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Mutably borrows the children of a map variant
    pub fn as_map_mut(&mut self) -> Option<&mut VariantMap> {
        match self {
            Variant::Map(entries) => Some(entries),
            _ => None,
        }
    }

    // Kind-checked views shared by the child and traversal modules.

    pub(crate) fn list(&self) -> Result<&VariantList> {
        match self {
            Variant::List(items) => Ok(items),
            other => Err(VariantError::type_mismatch(
                other.kind(),
                &[VariantKind::List],
            )),
        }
    }

    pub(crate) fn list_mut(&mut self) -> Result<&mut VariantList> {
        match self {
            Variant::List(items) => Ok(items),
            other => Err(VariantError::type_mismatch(
                other.kind(),
                &[VariantKind::List],
            )),
        }
    }

    pub(crate) fn map(&self) -> Result<&VariantMap> {
        match self {
            Variant::Map(entries) => Ok(entries),
            other => Err(VariantError::type_mismatch(other.kind(), &[VariantKind::Map])),
        }
    }

    pub(crate) fn map_mut(&mut self) -> Result<&mut VariantMap> {
        match self {
            Variant::Map(entries) => Ok(entries),
            other => Err(VariantError::type_mismatch(other.kind(), &[VariantKind::Map])),
        }
    }
}

/// 2^63, the exclusive upper bound of the `i64` range as an `f64`.
///
/// Doubles at or beyond it saturate when cast to an integer.
pub(crate) const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Formats a number the way [`Variant`]'s `Display` does.
///
/// Integral values inside the `i64` range print without a fractional part;
/// everything else uses the default `f64` formatting.
pub(crate) fn format_number(number: f64) -> String {
    if number.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&number) {
        (number as i64).to_string()
    } else {
        number.to_string()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Null => write!(f, "null"),
            Variant::Boolean(b) => write!(f, "{b}"),
            Variant::Number(n) => f.write_str(&format_number(*n)),
            Variant::String(s) => write!(f, "\"{s}\""),
            Variant::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Variant::Map(entries) => {
                write!(f, "{{")?;
                for (i, (name, item)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}={item}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Numbers are equal when `==` holds, and NaN equals NaN so the relation is reflexive.
fn numbers_equal(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Variant::Null, Variant::Null) => true,
            (Variant::Boolean(a), Variant::Boolean(b)) => a == b,
            (Variant::Number(a), Variant::Number(b)) => numbers_equal(*a, *b),
            (Variant::String(a), Variant::String(b)) => a == b,
            (Variant::List(a), Variant::List(b)) => a == b,
            // Same size and an equal value under every key, order ignored
            (Variant::Map(a), Variant::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Variant {}

impl Hash for Variant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Variant::Null => {}
            Variant::Boolean(b) => b.hash(state),
            Variant::Number(n) => {
                // -0.0 == 0.0 and NaN == NaN, so both collapse to one representative
                let canonical = if *n == 0.0 {
                    0.0f64
                } else if n.is_nan() {
                    f64::NAN
                } else {
                    *n
                };
                canonical.to_bits().hash(state);
            }
            Variant::String(s) => s.hash(state),
            Variant::List(items) => items.hash(state),
            Variant::Map(entries) => {
                entries.len().hash(state);
                // Wrapping sum of per-entry hashes is independent of iteration order
                let hasher = std::hash::BuildHasherDefault::<DefaultHasher>::default();
                let combined = entries.iter().fold(0u64, |acc, entry| {
                    acc.wrapping_add(hasher.hash_one(entry))
                });
                combined.hash(state);
            }
        }
    }
}

// Convenient From implementations for common types

impl From<()> for Variant {
    fn from(_: ()) -> Self {
        Variant::Null
    }
}

impl From<bool> for Variant {
    fn from(value: bool) -> Self {
        Variant::Boolean(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Variant {
                fn from(value: $ty) -> Self {
                    Variant::Number(value as f64)
                }
            }
        )*
    };
}

// Every numeric source collapses into the single f64 slot
impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<char> for Variant {
    fn from(value: char) -> Self {
        Variant::String(value.to_string())
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Variant::String(value.to_string())
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Variant::String(value)
    }
}

impl From<&String> for Variant {
    fn from(value: &String) -> Self {
        Variant::String(value.clone())
    }
}

impl From<&Variant> for Variant {
    fn from(value: &Variant) -> Self {
        value.clone()
    }
}

impl<T: Into<Variant>> From<Option<T>> for Variant {
    fn from(value: Option<T>) -> Self {
        value.map_or(Variant::Null, Into::into)
    }
}

impl<T: Into<Variant>> From<Vec<T>> for Variant {
    fn from(value: Vec<T>) -> Self {
        Variant::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Variant>, const N: usize> From<[T; N]> for Variant {
    fn from(value: [T; N]) -> Self {
        Variant::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Variant>> From<&[T]> for Variant {
    fn from(value: &[T]) -> Self {
        Variant::List(value.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Variant>> From<&Vec<T>> for Variant {
    fn from(value: &Vec<T>) -> Self {
        Variant::from(value.as_slice())
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for Variant
where
    K: ToString,
    V: Into<Variant>,
    S: BuildHasher,
{
    fn from(value: HashMap<K, V, S>) -> Self {
        Variant::Map(
            value
                .into_iter()
                .map(|(name, item)| (name.to_string(), item.into()))
                .collect(),
        )
    }
}

impl<K: ToString, V: Into<Variant>> From<BTreeMap<K, V>> for Variant {
    fn from(value: BTreeMap<K, V>) -> Self {
        Variant::Map(
            value
                .into_iter()
                .map(|(name, item)| (name.to_string(), item.into()))
                .collect(),
        )
    }
}

impl<T: Into<Variant>> FromIterator<T> for Variant {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Variant::List(iter.into_iter().map(Into::into).collect())
    }
}

// PartialEq implementations for comparing Variant with other types
impl PartialEq<str> for Variant {
    fn eq(&self, other: &str) -> bool {
        match self {
            Variant::String(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<&str> for Variant {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Variant {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<bool> for Variant {
    fn eq(&self, other: &bool) -> bool {
        match self {
            Variant::Boolean(b) => b == other,
            _ => false,
        }
    }
}

impl PartialEq<f64> for Variant {
    fn eq(&self, other: &f64) -> bool {
        match self {
            Variant::Number(n) => n == other,
            _ => false,
        }
    }
}

impl PartialEq<i64> for Variant {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Variant::Number(n) => *n == *other as f64,
            _ => false,
        }
    }
}

impl PartialEq<i32> for Variant {
    fn eq(&self, other: &i32) -> bool {
        match self {
            Variant::Number(n) => *n == f64::from(*other),
            _ => false,
        }
    }
}

// Reverse implementations for symmetry
impl PartialEq<Variant> for str {
    fn eq(&self, other: &Variant) -> bool {
        other == self
    }
}

impl PartialEq<Variant> for &str {
    fn eq(&self, other: &Variant) -> bool {
        other == *self
    }
}

impl PartialEq<Variant> for String {
    fn eq(&self, other: &Variant) -> bool {
        other == self
    }
}

impl PartialEq<Variant> for bool {
    fn eq(&self, other: &Variant) -> bool {
        other == self
    }
}

impl PartialEq<Variant> for f64 {
    fn eq(&self, other: &Variant) -> bool {
        other == self
    }
}

impl PartialEq<Variant> for i64 {
    fn eq(&self, other: &Variant) -> bool {
        other == self
    }
}

impl PartialEq<Variant> for i32 {
    fn eq(&self, other: &Variant) -> bool {
        other == self
    }
}
