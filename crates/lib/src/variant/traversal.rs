//! Iteration over the children of list and map variants.
//!
//! List children are visited in order. Map children are visited in the
//! map's internal order, which callers must not rely on.

use std::collections::hash_map;

use crate::{Variant, VariantError, VariantKind, errors::Result};

const CONTAINERS: &[VariantKind] = &[VariantKind::List, VariantKind::Map];

impl Variant {
    /// Visits every list element or map value.
    pub fn for_each(&self, mut visitor: impl FnMut(&Variant)) -> Result<()> {
        match self {
            Variant::List(items) => items.iter().for_each(visitor),
            Variant::Map(entries) => entries.values().for_each(|child| visitor(child)),
            other => return Err(VariantError::type_mismatch(other.kind(), CONTAINERS)),
        }
        Ok(())
    }

    /// Visits every list element together with its index.
    pub fn for_each_in_list(&self, mut visitor: impl FnMut(usize, &Variant)) -> Result<()> {
        for (index, child) in self.list()?.iter().enumerate() {
            visitor(index, child);
        }
        Ok(())
    }

    /// Visits every map entry.
    pub fn for_each_in_map(&self, mut visitor: impl FnMut(&str, &Variant)) -> Result<()> {
        for (name, child) in self.map()? {
            visitor(name, child);
        }
        Ok(())
    }

    /// Removes every list element or map entry whose value matches the predicate.
    pub fn remove_if(&mut self, mut predicate: impl FnMut(&Variant) -> bool) -> Result<&mut Self> {
        match self {
            Variant::List(items) => items.retain(|child| !predicate(child)),
            Variant::Map(entries) => entries.retain(|_, child| !predicate(child)),
            other => return Err(VariantError::type_mismatch(other.kind(), CONTAINERS)),
        }
        Ok(self)
    }

    /// Iterates over the elements of a list.
    pub fn iter_list(&self) -> Result<std::slice::Iter<'_, Variant>> {
        Ok(self.list()?.iter())
    }

    /// Iterates over the entries of a map.
    pub fn iter_map(&self) -> Result<hash_map::Iter<'_, String, Variant>> {
        Ok(self.map()?.iter())
    }

    /// Returns the names of a map's children.
    pub fn child_names(&self) -> Result<Vec<&str>> {
        Ok(self.map()?.keys().map(String::as_str).collect())
    }
}
