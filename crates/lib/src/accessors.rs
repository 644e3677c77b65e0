//! Named accessors for every data kind.
//!
//! Each data kind gets the same family of methods on [`Variant`], all thin
//! wrappers over the generic methods in [`data_kind`](crate::data_kind). For
//! the `int` kind (`i32`) that is:
//!
//! | Method | Generic form |
//! |---|---|
//! | `new_int(v)` | `Variant::new(v)` |
//! | `is_int()` | `is_a::<i32>()` |
//! | `child_is_int(key)` | `child_is_a::<i32, _>(key)` |
//! | `as_int()`, `as_int_or_null()`, `as_int_or_default(d)` | `coerce`, `coerce_or_null`, `coerce_or_default` |
//! | `get_int(key)`, `get_int_or_null(key)`, `get_int_or_default(key, d)` | `get_as`, `get_as_or_null`, `get_as_or_default` |
//! | `set_int(v)`, `set_child_int(key, v)` | `set`, `set_child` |
//! | `add_int(v)`, `add_first_int(v)`, `add_last_int(v)`, `insert_int(i, v)` | `add`, `add_first`, `add_last`, `insert` |
//! | `for_each_int(f)`, `for_each_int_in_list(f)`, `for_each_int_in_map(f)` | `for_each_as`, `for_each_as_in_list`, `for_each_as_in_map` |
//!
//! The kinds are `boolean`, `byte`, `short`, `int`, `long`, `float`,
//! `double`, `character`, `string`, `list` and `map`.
//!
//! ```
//! use variant::Variant;
//!
//! let mut scores = Variant::new_list(Vec::new());
//! scores.add_int(7)?.add_double(2.5)?.add_string("n/a".to_string())?;
//!
//! let mut total = 0;
//! scores.for_each_int(|score| total += score)?;
//! assert_eq!(total, 7);
//! assert_eq!(scores.get_int_or_default(1, -1)?, -1);
//! assert_eq!(scores.get_double(1)?, 2.5);
//! # Ok::<(), variant::VariantError>(())
//! ```

use crate::{ChildKey, Variant, VariantList, VariantMap, errors::Result};

macro_rules! data_kind_accessors {
    ($(
        $ty:ty {
            new: $new:ident,
            is: $is:ident, $child_is:ident,
            read: $read:ident, $read_or_null:ident, $read_or_default:ident,
            get: $get:ident, $get_or_null:ident, $get_or_default:ident,
            set: $set:ident, $set_child:ident,
            add: $add:ident, $add_first:ident, $add_last:ident, $insert:ident,
            visit: $visit:ident, $visit_in_list:ident, $visit_in_map:ident $(,)?
        }
    )*) => {
        impl Variant {
            $(
                #[doc = concat!("Creates a variant holding a `", stringify!($ty), "`.")]
                pub fn $new(value: $ty) -> Self {
                    value.into()
                }

                #[doc = concat!("Returns true if this variant can be read as `", stringify!($ty), "`.")]
                pub fn $is(&self) -> bool {
                    self.is_a::<$ty>()
                }

                #[doc = concat!("Returns true if the child can be read as `", stringify!($ty), "`; fails if it is absent.")]
                pub fn $child_is<K: ChildKey>(&self, key: K) -> Result<bool> {
                    self.child_is_a::<$ty, K>(key)
                }

                #[doc = concat!("Reads this variant as `", stringify!($ty), "`.")]
                pub fn $read(&self) -> Result<$ty> {
                    self.coerce()
                }

                #[doc = concat!("Reads this variant as `", stringify!($ty), "`, or `None`.")]
                pub fn $read_or_null(&self) -> Option<$ty> {
                    self.coerce_or_null()
                }

                #[doc = concat!("Reads this variant as `", stringify!($ty), "`, or `default`.")]
                pub fn $read_or_default(&self, default: $ty) -> $ty {
                    self.coerce_or_default(default)
                }

                #[doc = concat!("Reads a child as `", stringify!($ty), "`.")]
                pub fn $get<K: ChildKey>(&self, key: K) -> Result<$ty> {
                    self.get_as(key)
                }

                #[doc = concat!("Reads a child as `", stringify!($ty), "`, or `None` if absent or not readable.")]
                pub fn $get_or_null<K: ChildKey>(&self, key: K) -> Result<Option<$ty>> {
                    self.get_as_or_null(key)
                }

                #[doc = concat!("Reads a child as `", stringify!($ty), "`, or `default` if absent or not readable.")]
                pub fn $get_or_default<K: ChildKey>(&self, key: K, default: $ty) -> Result<$ty> {
                    self.get_as_or_default(key, default)
                }

                #[doc = concat!("Replaces this variant with a `", stringify!($ty), "`.")]
                pub fn $set(&mut self, value: $ty) -> &mut Self {
                    self.set(value)
                }

                #[doc = concat!("Stores a `", stringify!($ty), "` child under the given key.")]
                pub fn $set_child<K: ChildKey>(&mut self, key: K, value: $ty) -> Result<&mut Self> {
                    self.set_child(key, value)
                }

                #[doc = concat!("Appends a `", stringify!($ty), "` to a list.")]
                pub fn $add(&mut self, value: $ty) -> Result<&mut Self> {
                    self.add(value)
                }

                #[doc = concat!("Inserts a `", stringify!($ty), "` at the head of a list.")]
                pub fn $add_first(&mut self, value: $ty) -> Result<&mut Self> {
                    self.add_first(value)
                }

                #[doc = concat!("Appends a `", stringify!($ty), "` to a list.")]
                pub fn $add_last(&mut self, value: $ty) -> Result<&mut Self> {
                    self.add_last(value)
                }

                #[doc = concat!("Inserts a `", stringify!($ty), "` into a list, clamping the index.")]
                pub fn $insert(&mut self, index: i64, value: $ty) -> Result<&mut Self> {
                    self.insert(index, value)
                }

                #[doc = concat!("Visits every child readable as `", stringify!($ty), "`.")]
                pub fn $visit(&self, visitor: impl FnMut($ty)) -> Result<()> {
                    self.for_each_as::<$ty>(visitor)
                }

                #[doc = concat!("Visits every list element readable as `", stringify!($ty), "`, with its index.")]
                pub fn $visit_in_list(&self, visitor: impl FnMut(usize, $ty)) -> Result<()> {
                    self.for_each_as_in_list::<$ty>(visitor)
                }

                #[doc = concat!("Visits every map entry readable as `", stringify!($ty), "`.")]
                pub fn $visit_in_map(&self, visitor: impl FnMut(&str, $ty)) -> Result<()> {
                    self.for_each_as_in_map::<$ty>(visitor)
                }
            )*
        }
    };
}

data_kind_accessors! {
    bool {
        new: new_boolean,
        is: is_boolean, child_is_boolean,
        read: as_boolean, as_boolean_or_null, as_boolean_or_default,
        get: get_boolean, get_boolean_or_null, get_boolean_or_default,
        set: set_boolean, set_child_boolean,
        add: add_boolean, add_first_boolean, add_last_boolean, insert_boolean,
        visit: for_each_boolean, for_each_boolean_in_list, for_each_boolean_in_map,
    }
    i8 {
        new: new_byte,
        is: is_byte, child_is_byte,
        read: as_byte, as_byte_or_null, as_byte_or_default,
        get: get_byte, get_byte_or_null, get_byte_or_default,
        set: set_byte, set_child_byte,
        add: add_byte, add_first_byte, add_last_byte, insert_byte,
        visit: for_each_byte, for_each_byte_in_list, for_each_byte_in_map,
    }
    i16 {
        new: new_short,
        is: is_short, child_is_short,
        read: as_short, as_short_or_null, as_short_or_default,
        get: get_short, get_short_or_null, get_short_or_default,
        set: set_short, set_child_short,
        add: add_short, add_first_short, add_last_short, insert_short,
        visit: for_each_short, for_each_short_in_list, for_each_short_in_map,
    }
    i32 {
        new: new_int,
        is: is_int, child_is_int,
        read: as_int, as_int_or_null, as_int_or_default,
        get: get_int, get_int_or_null, get_int_or_default,
        set: set_int, set_child_int,
        add: add_int, add_first_int, add_last_int, insert_int,
        visit: for_each_int, for_each_int_in_list, for_each_int_in_map,
    }
    i64 {
        new: new_long,
        is: is_long, child_is_long,
        read: as_long, as_long_or_null, as_long_or_default,
        get: get_long, get_long_or_null, get_long_or_default,
        set: set_long, set_child_long,
        add: add_long, add_first_long, add_last_long, insert_long,
        visit: for_each_long, for_each_long_in_list, for_each_long_in_map,
    }
    f32 {
        new: new_float,
        is: is_float, child_is_float,
        read: as_float, as_float_or_null, as_float_or_default,
        get: get_float, get_float_or_null, get_float_or_default,
        set: set_float, set_child_float,
        add: add_float, add_first_float, add_last_float, insert_float,
        visit: for_each_float, for_each_float_in_list, for_each_float_in_map,
    }
    f64 {
        new: new_double,
        is: is_double, child_is_double,
        read: as_double, as_double_or_null, as_double_or_default,
        get: get_double, get_double_or_null, get_double_or_default,
        set: set_double, set_child_double,
        add: add_double, add_first_double, add_last_double, insert_double,
        visit: for_each_double, for_each_double_in_list, for_each_double_in_map,
    }
    char {
        new: new_character,
        is: is_character, child_is_character,
        read: as_character, as_character_or_null, as_character_or_default,
        get: get_character, get_character_or_null, get_character_or_default,
        set: set_character, set_child_character,
        add: add_character, add_first_character, add_last_character, insert_character,
        visit: for_each_character, for_each_character_in_list, for_each_character_in_map,
    }
    String {
        new: new_string,
        is: is_string, child_is_string,
        read: as_string, as_string_or_null, as_string_or_default,
        get: get_string, get_string_or_null, get_string_or_default,
        set: set_string, set_child_string,
        add: add_string, add_first_string, add_last_string, insert_string,
        visit: for_each_string, for_each_string_in_list, for_each_string_in_map,
    }
    VariantList {
        new: new_list,
        is: is_list, child_is_list,
        read: as_list, as_list_or_null, as_list_or_default,
        get: get_list, get_list_or_null, get_list_or_default,
        set: set_list, set_child_list,
        add: add_list, add_first_list, add_last_list, insert_list,
        visit: for_each_list, for_each_list_in_list, for_each_list_in_map,
    }
    VariantMap {
        new: new_map,
        is: is_map, child_is_map,
        read: as_map, as_map_or_null, as_map_or_default,
        get: get_map, get_map_or_null, get_map_or_default,
        set: set_map, set_child_map,
        add: add_map, add_first_map, add_last_map, insert_map,
        visit: for_each_map, for_each_map_in_list, for_each_map_in_map,
    }
}
