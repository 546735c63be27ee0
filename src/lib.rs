//! # Chaintable
//!
//! A typed hash table built on separate chaining, offered in four
//! concrete key/value specializations drawn from 32-bit integers and
//! strings:
//!
//! - `Int32Int32Map`: `i32` keys to `i32` values
//! - `Int32StringMap`: `i32` keys to `String` values
//! - `StringInt32Map`: `String` keys to `i32` values
//! - `StringStringMap`: `String` keys to `String` values
//!
//! All four share one generic engine, `ChainedHashMap`, parameterized
//! over a sealed pair of kind traits. Integer keys hash through a fixed
//! multiplicative mix and string keys through FNV-1a, so hashes are
//! stable across calls and across process runs. The bucket array always
//! holds a power-of-two number of chains and doubles once the load
//! factor crosses its threshold.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chaintable::StringInt32Map;
//!
//! // Create a new map bound to string keys and integer values
//! let mut map = StringInt32Map::new();
//!
//! // Insert values
//! map.insert("apple".to_string(), 1);
//! map.insert("banana".to_string(), 2);
//!
//! // Retrieve values; lookups take any borrowed form of the key
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values
//! map.insert("apple".to_string(), 10);
//! assert_eq!(map.get("apple"), Some(&10));
//!
//! // Remove values
//! map.remove("apple");
//! assert_eq!(map.get("apple"), None);
//! ```
//!
//! ## Iteration
//!
//! Iteration yields every live entry exactly once, in no promised
//! order. The cursor borrows the map, so the map cannot be mutated
//! while a cursor is live; `has_next` may be polled freely and stays
//! false once the last pair has been consumed.
//!
//! ```rust
//! use chaintable::StringStringMap;
//!
//! let mut pairs = StringStringMap::new();
//! pairs.insert("fee".to_string(), "fi".to_string());
//! pairs.insert("fi".to_string(), "fee".to_string());
//! assert_eq!(pairs.len(), 2);
//!
//! let mut iter = pairs.iter();
//! while iter.has_next() {
//!     if let Some((key, value)) = iter.next() {
//!         println!("{key} -> {value}");
//!     }
//! }
//! assert!(!iter.has_next());
//! ```

/// Module implementing the chained-bucket hash table engine
mod chained_hashmap;
/// Key and value kind strategies bound at construction time
mod kinds;
/// Named bindings of the engine to the four supported kind pairs
mod specializations;
/// Utility functions and traits for the hash maps
mod utils;

pub use chained_hashmap::{ChainedHashMap, Iter};
pub use kinds::{TableKey, TableValue};
pub use specializations::{Int32Int32Map, Int32StringMap, StringInt32Map, StringStringMap};
pub use utils::HashMapExtensions;
