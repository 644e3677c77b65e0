//! Building variants from arbitrary `Serialize` values.
//!
//! [`Variant::try_new`] and [`Variant::try_set`] accept anything that
//! implements [`serde::Serialize`] and walk it through an in-memory
//! serializer. The serde data model maps onto variants as follows:
//!
//! | Serde | Variant |
//! |---|---|
//! | unit, unit struct, `None` | Null |
//! | bool | Boolean |
//! | every integer and float | Number |
//! | char, str | String |
//! | seq, tuple, tuple struct | List |
//! | map, struct | Map |
//! | unit variant | String holding the variant name |
//! | newtype, tuple and struct variants | Map with one entry keyed by the variant name |
//!
//! Map keys are serialized first and then named by their string form: a
//! string key is used verbatim and any other key uses the variant's
//! `Display` rendering, so the integer key `1` becomes `"1"`.
//!
//! Byte strings have no variant counterpart and are rejected, as is any value
//! whose `Serialize` implementation reports its own error.

use std::fmt::Display;

use serde::{Serialize, ser};
use thiserror::Error;

use crate::{Variant, VariantError, VariantList, VariantMap, errors::Result};

/// Why a value could not be turned into a variant.
#[derive(Debug, Error)]
pub(crate) enum Rejected {
    /// A serde type with no variant counterpart
    #[error("unsupported serde type {0}")]
    Unsupported(&'static str),

    /// Error raised by the value's own `Serialize` implementation
    #[error("{0}")]
    Custom(String),
}

impl ser::Error for Rejected {
    fn custom<T: Display>(msg: T) -> Self {
        Rejected::Custom(msg.to_string())
    }
}

type Built = std::result::Result<Variant, Rejected>;

/// Serializer whose output is a [`Variant`].
pub(crate) struct VariantSerializer;

macro_rules! serialize_numbers {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method(self, value: $ty) -> Built {
                Ok(Variant::Number(value as f64))
            }
        )*
    };
}

impl ser::Serializer for VariantSerializer {
    type Ok = Variant;
    type Error = Rejected;

    type SerializeSeq = ListBuilder;
    type SerializeTuple = ListBuilder;
    type SerializeTupleStruct = ListBuilder;
    type SerializeTupleVariant = TaggedListBuilder;
    type SerializeMap = MapBuilder;
    type SerializeStruct = MapBuilder;
    type SerializeStructVariant = TaggedMapBuilder;

    fn serialize_bool(self, value: bool) -> Built {
        Ok(Variant::Boolean(value))
    }

    serialize_numbers! {
        serialize_i8: i8,
        serialize_i16: i16,
        serialize_i32: i32,
        serialize_i64: i64,
        serialize_i128: i128,
        serialize_u8: u8,
        serialize_u16: u16,
        serialize_u32: u32,
        serialize_u64: u64,
        serialize_u128: u128,
        serialize_f32: f32,
        serialize_f64: f64,
    }

    fn serialize_char(self, value: char) -> Built {
        Ok(Variant::from(value))
    }

    fn serialize_str(self, value: &str) -> Built {
        Ok(Variant::from(value))
    }

    fn serialize_bytes(self, _value: &[u8]) -> Built {
        Err(Rejected::Unsupported("bytes"))
    }

    fn serialize_none(self) -> Built {
        Ok(Variant::Null)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Built {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Built {
        Ok(Variant::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Built {
        Ok(Variant::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Built {
        Ok(Variant::from(variant))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Built {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Built {
        Ok(tagged(variant, value.serialize(VariantSerializer)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> std::result::Result<ListBuilder, Rejected> {
        Ok(ListBuilder {
            items: VariantList::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> std::result::Result<ListBuilder, Rejected> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> std::result::Result<ListBuilder, Rejected> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> std::result::Result<TaggedListBuilder, Rejected> {
        Ok(TaggedListBuilder {
            tag: variant,
            items: VariantList::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> std::result::Result<MapBuilder, Rejected> {
        Ok(MapBuilder::default())
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> std::result::Result<MapBuilder, Rejected> {
        Ok(MapBuilder::default())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> std::result::Result<TaggedMapBuilder, Rejected> {
        Ok(TaggedMapBuilder {
            tag: variant,
            entries: VariantMap::new(),
        })
    }
}

// Enum variants carrying data become `{tag: payload}`
fn tagged(tag: &'static str, payload: Variant) -> Variant {
    Variant::Map(VariantMap::from([(tag.to_string(), payload)]))
}

/// Names a map entry after its serialized key.
fn key_name<T: ?Sized + Serialize>(key: &T) -> std::result::Result<String, Rejected> {
    Ok(match key.serialize(VariantSerializer)? {
        Variant::String(name) => name,
        other => other.to_string(),
    })
}

pub(crate) struct ListBuilder {
    items: VariantList,
}

impl ListBuilder {
    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> std::result::Result<(), Rejected> {
        self.items.push(value.serialize(VariantSerializer)?);
        Ok(())
    }
}

impl ser::SerializeSeq for ListBuilder {
    type Ok = Variant;
    type Error = Rejected;

    fn serialize_element<T: ?Sized + Serialize>(
        &mut self,
        value: &T,
    ) -> std::result::Result<(), Rejected> {
        self.push(value)
    }

    fn end(self) -> Built {
        Ok(Variant::List(self.items))
    }
}

impl ser::SerializeTuple for ListBuilder {
    type Ok = Variant;
    type Error = Rejected;

    fn serialize_element<T: ?Sized + Serialize>(
        &mut self,
        value: &T,
    ) -> std::result::Result<(), Rejected> {
        self.push(value)
    }

    fn end(self) -> Built {
        Ok(Variant::List(self.items))
    }
}

impl ser::SerializeTupleStruct for ListBuilder {
    type Ok = Variant;
    type Error = Rejected;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        value: &T,
    ) -> std::result::Result<(), Rejected> {
        self.push(value)
    }

    fn end(self) -> Built {
        Ok(Variant::List(self.items))
    }
}

pub(crate) struct TaggedListBuilder {
    tag: &'static str,
    items: VariantList,
}

impl ser::SerializeTupleVariant for TaggedListBuilder {
    type Ok = Variant;
    type Error = Rejected;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        value: &T,
    ) -> std::result::Result<(), Rejected> {
        self.items.push(value.serialize(VariantSerializer)?);
        Ok(())
    }

    fn end(self) -> Built {
        Ok(tagged(self.tag, Variant::List(self.items)))
    }
}

#[derive(Default)]
pub(crate) struct MapBuilder {
    entries: VariantMap,
    pending: Option<String>,
}

impl ser::SerializeMap for MapBuilder {
    type Ok = Variant;
    type Error = Rejected;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> std::result::Result<(), Rejected> {
        self.pending = Some(key_name(key)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(
        &mut self,
        value: &T,
    ) -> std::result::Result<(), Rejected> {
        let name = self
            .pending
            .take()
            .ok_or_else(|| Rejected::Custom("map value serialized before its key".to_string()))?;
        self.entries.insert(name, value.serialize(VariantSerializer)?);
        Ok(())
    }

    fn end(self) -> Built {
        Ok(Variant::Map(self.entries))
    }
}

impl ser::SerializeStruct for MapBuilder {
    type Ok = Variant;
    type Error = Rejected;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> std::result::Result<(), Rejected> {
        self.entries
            .insert(key.to_string(), value.serialize(VariantSerializer)?);
        Ok(())
    }

    fn end(self) -> Built {
        Ok(Variant::Map(self.entries))
    }
}

pub(crate) struct TaggedMapBuilder {
    tag: &'static str,
    entries: VariantMap,
}

impl ser::SerializeStructVariant for TaggedMapBuilder {
    type Ok = Variant;
    type Error = Rejected;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> std::result::Result<(), Rejected> {
        self.entries
            .insert(key.to_string(), value.serialize(VariantSerializer)?);
        Ok(())
    }

    fn end(self) -> Built {
        Ok(tagged(self.tag, Variant::Map(self.entries)))
    }
}

impl Variant {
    /// Creates a variant from any `Serialize` value.
    ///
    /// Fails with [`VariantError::SetValue`] if the value contains byte
    /// strings or its `Serialize` implementation reports an error.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use variant::Variant;
    ///
    /// let scores = BTreeMap::from([(1, "one"), (2, "two")]);
    /// let variant = Variant::try_new(&scores)?;
    /// assert_eq!(variant.get_string("2")?, "two");
    /// # Ok::<(), variant::VariantError>(())
    /// ```
    pub fn try_new<T: ?Sized + Serialize>(value: &T) -> Result<Self> {
        let mut variant = Variant::Null;
        variant.try_set(value)?;
        Ok(variant)
    }

    /// Replaces this variant with any `Serialize` value.
    ///
    /// The receiver is reset to Null first, so a rejected value leaves it
    /// Null rather than partially built.
    pub fn try_set<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<&mut Self> {
        *self = Variant::Null;
        match value.serialize(VariantSerializer) {
            Ok(built) => {
                *self = built;
                Ok(self)
            }
            Err(rejected) => {
                let type_name = match rejected {
                    Rejected::Unsupported(name) => name.to_string(),
                    Rejected::Custom(_) => std::any::type_name::<T>().to_string(),
                };
                tracing::debug!(%type_name, reason = %rejected, "Rejected value assignment");
                Err(VariantError::SetValue { type_name })
            }
        }
    }
}
