//! Typed views over a variant's payload.
//!
//! A [`DataKind`] is a Rust type a variant can be read as. Numbers are stored
//! once as `f64`, and each narrower numeric type is a lossless view over that
//! double: a number is an `i8` only if casting it to `i8` and back yields the
//! same bits. Strings of exactly one character are also `char`s.
//!
//! | Data kind | Type | Matches |
//! |---|---|---|
//! | boolean | `bool` | Boolean |
//! | byte | `i8` | Number that round-trips through `i8` |
//! | short | `i16` | Number that round-trips through `i16` |
//! | int | `i32` | Number that round-trips through `i32` |
//! | long | `i64` | Number that round-trips through `i64` |
//! | float | `f32` | Number that round-trips through `f32` |
//! | double | `f64` | any Number |
//! | character | `char` | String of one character |
//! | string | `String` | String |
//! | list | [`VariantList`] | List |
//! | map | [`VariantMap`] | Map |
//!
//! Every view is available through the generic methods on [`Variant`] defined
//! here (`is_a`, `coerce`, `get_as`, `for_each_as`, ...) and through the named
//! accessors in [`accessors`](crate::accessors).

use crate::{
    ChildKey, Variant, VariantError, VariantList, VariantMap, errors::Result,
    variant::{I64_BOUND, format_number},
};

/// A type that a [`Variant`] can be losslessly read as.
///
/// Writing a value of the type back through `Into<Variant>` always produces
/// a variant that matches the same data kind again.
pub trait DataKind: Sized + Into<Variant> {
    /// Name reported in [`VariantError::Value`].
    const NAME: &'static str;

    /// Reads the variant as this type, or `None` if that would lose information.
    fn extract(variant: &Variant) -> Option<Self>;

    /// Returns true if [`extract`](DataKind::extract) would succeed.
    fn matches(variant: &Variant) -> bool {
        Self::extract(variant).is_some()
    }

    /// Initial value used by [`Variant::new_default`].
    fn zero() -> Self;
}

impl DataKind for bool {
    const NAME: &'static str = "boolean";

    fn extract(variant: &Variant) -> Option<Self> {
        match variant {
            Variant::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    fn zero() -> Self {
        false
    }
}

macro_rules! impl_integer_kind {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl DataKind for $ty {
                const NAME: &'static str = $name;

                fn extract(variant: &Variant) -> Option<Self> {
                    match variant {
                        Variant::Number(n) if (-I64_BOUND..I64_BOUND).contains(n) => {
                            let narrowed = *n as $ty;
                            ((narrowed as f64).to_bits() == n.to_bits()).then_some(narrowed)
                        }
                        _ => None,
                    }
                }

                fn zero() -> Self {
                    0
                }
            }
        )*
    };
}

impl_integer_kind!(i8 => "byte", i16 => "short", i32 => "int", i64 => "long");

impl DataKind for f32 {
    const NAME: &'static str = "float";

    fn extract(variant: &Variant) -> Option<Self> {
        match variant {
            Variant::Number(n) => {
                let narrowed = *n as f32;
                (f64::from(narrowed).to_bits() == n.to_bits()).then_some(narrowed)
            }
            _ => None,
        }
    }

    fn zero() -> Self {
        0.0
    }
}

impl DataKind for f64 {
    const NAME: &'static str = "double";

    fn extract(variant: &Variant) -> Option<Self> {
        match variant {
            Variant::Number(n) => Some(*n),
            _ => None,
        }
    }

    fn zero() -> Self {
        0.0
    }
}

impl DataKind for char {
    const NAME: &'static str = "character";

    fn extract(variant: &Variant) -> Option<Self> {
        let mut chars = variant.as_str()?.chars();
        match (chars.next(), chars.next()) {
            (Some(single), None) => Some(single),
            _ => None,
        }
    }

    fn zero() -> Self {
        ' '
    }
}

impl DataKind for String {
    const NAME: &'static str = "string";

    fn extract(variant: &Variant) -> Option<Self> {
        variant.as_str().map(str::to_string)
    }

    fn matches(variant: &Variant) -> bool {
        matches!(variant, Variant::String(_))
    }

    fn zero() -> Self {
        String::new()
    }
}

impl DataKind for VariantList {
    const NAME: &'static str = "list";

    fn extract(variant: &Variant) -> Option<Self> {
        variant.as_list_ref().cloned()
    }

    fn matches(variant: &Variant) -> bool {
        matches!(variant, Variant::List(_))
    }

    fn zero() -> Self {
        Vec::new()
    }
}

impl DataKind for VariantMap {
    const NAME: &'static str = "map";

    fn extract(variant: &Variant) -> Option<Self> {
        variant.as_map_ref().cloned()
    }

    fn matches(variant: &Variant) -> bool {
        matches!(variant, Variant::Map(_))
    }

    fn zero() -> Self {
        VariantMap::new()
    }
}

impl Variant {
    /// Creates a variant holding the initial value of a data kind.
    ///
    /// That is `false`, `0`, `' '`, `""`, an empty list or an empty map.
    pub fn new_default<T: DataKind>() -> Self {
        T::zero().into()
    }

    /// Returns true if this variant can be read losslessly as `T`.
    pub fn is_a<T: DataKind>(&self) -> bool {
        T::matches(self)
    }

    /// Reads this variant as `T`, failing with [`VariantError::Value`] if that would lose information.
    ///
    /// ```
    /// use variant::Variant;
    ///
    /// let small = Variant::new(100);
    /// assert_eq!(small.coerce::<i8>()?, 100);
    ///
    /// let large = Variant::new(300);
    /// assert!(large.coerce::<i8>().unwrap_err().is_value_error());
    /// assert_eq!(large.coerce::<i16>()?, 300);
    /// # Ok::<(), variant::VariantError>(())
    /// ```
    pub fn coerce<T: DataKind>(&self) -> Result<T> {
        T::extract(self).ok_or_else(|| {
            if let Variant::Number(n) = self {
                tracing::trace!(value = %format_number(*n), requested = T::NAME, "Lossy numeric coercion refused");
            }
            VariantError::Value {
                actual: self.kind(),
                requested: T::NAME,
            }
        })
    }

    /// Reads this variant as `T`, or `None` if that would lose information.
    pub fn coerce_or_null<T: DataKind>(&self) -> Option<T> {
        T::extract(self)
    }

    /// Reads this variant as `T`, or `default` if that would lose information.
    pub fn coerce_or_default<T: DataKind>(&self, default: T) -> T {
        T::extract(self).unwrap_or(default)
    }

    /// Returns true if the child can be read as `T`, failing if the child is absent.
    pub fn child_is_a<T: DataKind, K: ChildKey>(&self, key: K) -> Result<bool> {
        Ok(self.get(key)?.is_a::<T>())
    }

    /// Reads a child as `T`.
    ///
    /// Fails if the receiver has the wrong kind, the child is absent, or the
    /// child cannot be read as `T`.
    pub fn get_as<T: DataKind, K: ChildKey>(&self, key: K) -> Result<T> {
        self.get(key)?.coerce()
    }

    /// Reads a child as `T`, or `None` if it is absent or cannot be read as `T`.
    pub fn get_as_or_null<T: DataKind, K: ChildKey>(&self, key: K) -> Result<Option<T>> {
        Ok(self
            .get_or_null(key)?
            .and_then(|child| child.coerce_or_null()))
    }

    /// Reads a child as `T`, or `default` if it is absent or cannot be read as `T`.
    pub fn get_as_or_default<T: DataKind, K: ChildKey>(&self, key: K, default: T) -> Result<T> {
        Ok(match self.get_or_null(key)? {
            Some(child) => child.coerce_or_default(default),
            None => default,
        })
    }

    /// Visits every list element or map value that can be read as `T`, skipping the rest.
    pub fn for_each_as<T: DataKind>(&self, mut visitor: impl FnMut(T)) -> Result<()> {
        self.for_each(|child| {
            if let Some(value) = T::extract(child) {
                visitor(value);
            }
        })
    }

    /// Visits every list element that can be read as `T`, with its index.
    pub fn for_each_as_in_list<T: DataKind>(
        &self,
        mut visitor: impl FnMut(usize, T),
    ) -> Result<()> {
        self.for_each_in_list(|index, child| {
            if let Some(value) = T::extract(child) {
                visitor(index, value);
            }
        })
    }

    /// Visits every map entry whose value can be read as `T`.
    pub fn for_each_as_in_map<T: DataKind>(&self, mut visitor: impl FnMut(&str, T)) -> Result<()> {
        self.for_each_in_map(|name, child| {
            if let Some(value) = T::extract(child) {
                visitor(name, value);
            }
        })
    }
}
