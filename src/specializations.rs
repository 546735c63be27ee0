//! Named bindings of the generic table to each supported kind pair.
//!
//! The engine itself is generic over the sealed key and value kinds; this
//! module only selects. Each alias fixes one `(key, value)` pair out of
//! the closed {`i32`, `String`} x {`i32`, `String`} space and is
//! constructed with the engine's own `new` or `with_capacity`.

use crate::chained_hashmap::ChainedHashMap;

/// Table from 32-bit integer keys to 32-bit integer values.
pub type Int32Int32Map = ChainedHashMap<i32, i32>;

/// Table from 32-bit integer keys to string values.
pub type Int32StringMap = ChainedHashMap<i32, String>;

/// Table from string keys to 32-bit integer values.
pub type StringInt32Map = ChainedHashMap<String, i32>;

/// Table from string keys to string values.
pub type StringStringMap = ChainedHashMap<String, String>;
