//! Child access by list index or map name.
//!
//! Lists and maps are addressed through the same [`ChildKey`] abstraction:
//! integer keys index a list, string keys name a map entry. Every lookup
//! checks the receiver kind first and fails with a type mismatch when an
//! integer is used on a non-list or a name on a non-map. What happens when
//! the child is absent depends on the policy the caller picks:
//!
//! | Method | Absent child |
//! |---|---|
//! | [`Variant::get`] | `ChildIndex` / `ChildName` error |
//! | [`Variant::get_or_null`] | `Ok(None)` |
//! | [`Variant::get_or_default`] | `Ok(default)` |

use crate::{Variant, VariantError, errors::Result};

mod private {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for usize {}
    impl Sealed for &str {}
    impl Sealed for &String {}
}

/// A key addressing one child of a list (by index) or a map (by name).
///
/// Implemented for `i32`, `i64` and `usize` indices and for `&str` and
/// `&String` names. The trait is sealed.
pub trait ChildKey: private::Sealed + Copy {
    /// Looks up the child after checking the parent kind; `None` if absent.
    fn lookup(self, parent: &Variant) -> Result<Option<&Variant>>;

    /// Looks up the child mutably, failing if it is absent.
    fn lookup_mut(self, parent: &mut Variant) -> Result<&mut Variant>;

    /// The error reported when this key is absent from `parent`.
    fn absent(self, parent: &Variant) -> VariantError;

    /// Stores `child` under this key.
    ///
    /// An index must already exist; a name is inserted or overwritten.
    fn store(self, parent: &mut Variant, child: Variant) -> Result<()>;

    /// Removes and returns the child under this key, failing if it is absent.
    fn take(self, parent: &mut Variant) -> Result<Variant>;
}

/// Maps a signed index onto `[0, size)`.
fn position(index: i128, size: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&at| at < size)
}

macro_rules! impl_index_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ChildKey for $ty {
                fn lookup(self, parent: &Variant) -> Result<Option<&Variant>> {
                    let items = parent.list()?;
                    Ok(position(self as i128, items.len()).map(|at| &items[at]))
                }

                fn lookup_mut(self, parent: &mut Variant) -> Result<&mut Variant> {
                    let index = self as i128;
                    let items = parent.list_mut()?;
                    let size = items.len();
                    match position(index, size) {
                        Some(at) => Ok(&mut items[at]),
                        None => Err(VariantError::ChildIndex { index, size }),
                    }
                }

                fn absent(self, parent: &Variant) -> VariantError {
                    VariantError::ChildIndex {
                        index: self as i128,
                        size: parent.as_list_ref().map_or(0, Vec::len),
                    }
                }

                fn store(self, parent: &mut Variant, child: Variant) -> Result<()> {
                    *self.lookup_mut(parent)? = child;
                    Ok(())
                }

                fn take(self, parent: &mut Variant) -> Result<Variant> {
                    let index = self as i128;
                    let items = parent.list_mut()?;
                    let size = items.len();
                    match position(index, size) {
                        Some(at) => Ok(items.remove(at)),
                        None => Err(VariantError::ChildIndex { index, size }),
                    }
                }
            }
        )*
    };
}

impl_index_key!(i32, i64, usize);

impl ChildKey for &str {
    fn lookup(self, parent: &Variant) -> Result<Option<&Variant>> {
        Ok(parent.map()?.get(self))
    }

    fn lookup_mut(self, parent: &mut Variant) -> Result<&mut Variant> {
        parent
            .map_mut()?
            .get_mut(self)
            .ok_or_else(|| VariantError::ChildName {
                name: self.to_string(),
            })
    }

    fn absent(self, _parent: &Variant) -> VariantError {
        VariantError::ChildName {
            name: self.to_string(),
        }
    }

    fn store(self, parent: &mut Variant, child: Variant) -> Result<()> {
        parent.map_mut()?.insert(self.to_string(), child);
        Ok(())
    }

    fn take(self, parent: &mut Variant) -> Result<Variant> {
        parent
            .map_mut()?
            .remove(self)
            .ok_or_else(|| VariantError::ChildName {
                name: self.to_string(),
            })
    }
}

impl ChildKey for &String {
    fn lookup(self, parent: &Variant) -> Result<Option<&Variant>> {
        self.as_str().lookup(parent)
    }

    fn lookup_mut(self, parent: &mut Variant) -> Result<&mut Variant> {
        self.as_str().lookup_mut(parent)
    }

    fn absent(self, parent: &Variant) -> VariantError {
        self.as_str().absent(parent)
    }

    fn store(self, parent: &mut Variant, child: Variant) -> Result<()> {
        self.as_str().store(parent, child)
    }

    fn take(self, parent: &mut Variant) -> Result<Variant> {
        self.as_str().take(parent)
    }
}

impl Variant {
    /// Gets a child, failing if the receiver has the wrong kind or the child is absent.
    pub fn get<K: ChildKey>(&self, key: K) -> Result<&Variant> {
        key.lookup(self)?.ok_or_else(|| key.absent(self))
    }

    /// Gets a child, returning `None` if it is absent.
    ///
    /// A receiver of the wrong kind is still an error.
    pub fn get_or_null<K: ChildKey>(&self, key: K) -> Result<Option<&Variant>> {
        key.lookup(self)
    }

    /// Gets a child, returning `default` if it is absent.
    ///
    /// A receiver of the wrong kind is still an error.
    pub fn get_or_default<'a, K: ChildKey>(
        &'a self,
        key: K,
        default: &'a Variant,
    ) -> Result<&'a Variant> {
        Ok(key.lookup(self)?.unwrap_or(default))
    }

    /// Gets a mutable reference to a child, failing if it is absent.
    pub fn get_mut<K: ChildKey>(&mut self, key: K) -> Result<&mut Variant> {
        key.lookup_mut(self)
    }

    /// Returns true if the child exists.
    ///
    /// For a list this is `0 <= index < size`, so index 0 of a non-empty list
    /// is present.
    pub fn contains<K: ChildKey>(&self, key: K) -> Result<bool> {
        Ok(key.lookup(self)?.is_some())
    }

    /// Returns true if the child exists and has the given kind.
    ///
    /// Fails if the child is absent.
    pub fn child_is<K: ChildKey>(&self, key: K, kind: crate::VariantKind) -> Result<bool> {
        Ok(self.get(key)?.is(kind))
    }

    /// Stores a child under the given key.
    ///
    /// A list index must already exist and its element is replaced; a map
    /// name is inserted or overwritten. The value is copied in.
    pub fn set_child<K: ChildKey>(&mut self, key: K, value: impl Into<Variant>) -> Result<&mut Self> {
        key.store(self, value.into())?;
        Ok(self)
    }

    /// Removes and returns a child, failing if it is absent.
    pub fn remove<K: ChildKey>(&mut self, key: K) -> Result<Variant> {
        key.take(self)
    }
}
