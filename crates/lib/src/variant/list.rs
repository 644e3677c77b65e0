//! Positional editing of list variants.

use crate::{Variant, errors::Result};

impl Variant {
    /// Inserts a child into a list.
    ///
    /// The index is clamped rather than checked: a negative index inserts at
    /// the head and an index at or past the end appends. Only a non-list
    /// receiver is an error.
    ///
    /// ```
    /// use variant::Variant;
    ///
    /// let mut list = Variant::new(vec![1, 2, 3]);
    /// list.insert(-1, 0)?.insert(99, 4)?;
    /// assert_eq!(list.to_string(), "[0, 1, 2, 3, 4]");
    /// # Ok::<(), variant::VariantError>(())
    /// ```
    pub fn insert(&mut self, index: i64, value: impl Into<Variant>) -> Result<&mut Self> {
        let items = self.list_mut()?;
        let len = items.len();
        let at = if index < 0 {
            0
        } else {
            usize::try_from(index).map_or(len, |at| at.min(len))
        };
        items.insert(at, value.into());
        Ok(self)
    }

    /// Appends a child to a list.
    pub fn add(&mut self, value: impl Into<Variant>) -> Result<&mut Self> {
        self.list_mut()?.push(value.into());
        Ok(self)
    }

    /// Inserts a child at the head of a list.
    pub fn add_first(&mut self, value: impl Into<Variant>) -> Result<&mut Self> {
        self.list_mut()?.insert(0, value.into());
        Ok(self)
    }

    /// Appends a child to a list. Same as [`Variant::add`].
    pub fn add_last(&mut self, value: impl Into<Variant>) -> Result<&mut Self> {
        self.add(value)
    }
}
