//! JSON interchange for variants.
//!
//! The mapping is one-to-one apart from numbers: every JSON number is read as
//! a double, and every Number is written as a double. Non-finite doubles have
//! no JSON form and are written as `null`.
//!
//! | Variant | JSON |
//! |---|---|
//! | Null | `null` |
//! | Boolean | `true` / `false` |
//! | Number | number |
//! | String | string |
//! | List | array |
//! | Map | object |
//!
//! ```
//! use variant::Variant;
//!
//! let parsed = Variant::from_json_str(r#"{"a": 1, "b": [true, "x"]}"#)?;
//! assert_eq!(parsed.get_int("a")?, 1);
//! assert_eq!(Variant::from_json_str(&parsed.to_json_string())?, parsed);
//! # Ok::<(), variant::Error>(())
//! ```

use std::{fmt, str::FromStr};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Visitor},
    ser::{SerializeMap, SerializeSeq},
};
use serde_json::Value;

use crate::{Error, Result, Variant, VariantList, VariantMap};

impl Variant {
    /// Converts this variant into a JSON value.
    pub fn to_json(&self) -> Value {
        match self {
            Variant::Null => Value::Null,
            Variant::Boolean(b) => Value::Bool(*b),
            Variant::Number(n) => match serde_json::Number::from_f64(*n) {
                Some(number) => Value::Number(number),
                None => {
                    tracing::trace!(value = %n, "Non-finite number written as JSON null");
                    Value::Null
                }
            },
            Variant::String(s) => Value::String(s.clone()),
            Variant::List(items) => Value::Array(items.iter().map(Variant::to_json).collect()),
            Variant::Map(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(name, child)| (name.clone(), child.to_json()))
                    .collect(),
            ),
        }
    }

    /// Builds a variant from a JSON value. Every JSON number becomes a double.
    pub fn from_json(json: &Value) -> Self {
        match json {
            Value::Null => Variant::Null,
            Value::Bool(b) => Variant::Boolean(*b),
            Value::Number(number) => number.as_f64().map_or(Variant::Null, Variant::Number),
            Value::String(s) => Variant::String(s.clone()),
            Value::Array(items) => Variant::List(items.iter().map(Variant::from_json).collect()),
            Value::Object(entries) => Variant::Map(
                entries
                    .iter()
                    .map(|(name, child)| (name.clone(), Variant::from_json(child)))
                    .collect(),
            ),
        }
    }

    /// Renders this variant as compact JSON text.
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }

    /// Parses JSON text into a variant.
    ///
    /// Malformed text fails with [`Error::Json`] and produces no variant.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|err| {
            tracing::debug!(error = %err, "Failed to parse JSON text");
            Error::Json(err)
        })
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Variant::from_json_str(text)
    }
}

impl From<Value> for Variant {
    fn from(json: Value) -> Self {
        Variant::from_json(&json)
    }
}

impl From<&Value> for Variant {
    fn from(json: &Value) -> Self {
        Variant::from_json(json)
    }
}

impl From<&Variant> for Value {
    fn from(variant: &Variant) -> Self {
        variant.to_json()
    }
}

impl From<Variant> for Value {
    fn from(variant: Variant) -> Self {
        variant.to_json()
    }
}

impl Serialize for Variant {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Variant::Null => serializer.serialize_unit(),
            Variant::Boolean(b) => serializer.serialize_bool(*b),
            Variant::Number(n) => serializer.serialize_f64(*n),
            Variant::String(s) => serializer.serialize_str(s),
            Variant::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Variant::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (name, child) in entries {
                    map.serialize_entry(name, child)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct VariantVisitor;

        impl<'de> Visitor<'de> for VariantVisitor {
            type Value = Variant;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any JSON-compatible value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Variant, E> {
                Ok(Variant::Boolean(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Variant, E> {
                Ok(Variant::Number(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Variant, E> {
                Ok(Variant::Number(value as f64))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Variant, E> {
                Ok(Variant::Number(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Variant, E> {
                Ok(Variant::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Variant, E> {
                Ok(Variant::String(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Variant, E> {
                Ok(Variant::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Variant, E> {
                Ok(Variant::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Variant, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Variant, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = VariantList::new();
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Variant::List(items))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Variant, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut entries = VariantMap::new();
                while let Some((name, child)) = map.next_entry::<String, Variant>()? {
                    entries.insert(name, child);
                }
                Ok(Variant::Map(entries))
            }
        }

        deserializer.deserialize_any(VariantVisitor)
    }
}
