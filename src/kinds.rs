//! Key and value kind strategies bound to a table at construction time.
//!
//! The table engine is generic, but the set of supported kinds is closed:
//! keys and values are each either a 32-bit signed integer or an owned
//! string. Both traits are sealed, so an unsupported combination is
//! rejected at compile time rather than surfacing as a runtime fault.

/// Seal preventing downstream implementations of the kind traits.
mod sealed {
    /// Implemented only for the supported key and value kinds.
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for str {}
    impl Sealed for String {}
}

/// Capability set required of a key kind: hashing plus exact equality.
///
/// `str` is included as the borrowed query form of `String`, so lookups in
/// a string-keyed table work with `&str` without allocating.
pub trait TableKey: Eq + sealed::Sealed {
    /// Returns the hash of this key.
    ///
    /// The result is deterministic across calls and across process runs;
    /// capacity-dependent masking is applied by the table after hashing,
    /// never before.
    #[must_use]
    fn hash(&self) -> u64;
}

/// Marker for a value kind the table can store.
///
/// Values carry no capability beyond storage; they never participate in
/// hashing or lookup.
pub trait TableValue: sealed::Sealed {}

/// FNV-1a 64-bit offset basis.
const FNV_OFFSET_BASIS: u64 = 0xCBF2_9CE4_8422_2325;
/// FNV-1a 64-bit prime.
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

impl TableKey for i32 {
    fn hash(&self) -> u64 {
        // Zero-extend, then xor-shift before multiplying so that stride
        // patterns in the low bits do not survive the capacity mask.
        #[allow(clippy::cast_sign_loss)]
        let k = u64::from(*self as u32);
        let k = k ^ (k >> 16);
        k.wrapping_mul(0x517C_C1B7_2722_0A95)
    }
}

impl TableKey for str {
    fn hash(&self) -> u64 {
        let mut hash = FNV_OFFSET_BASIS;
        for byte in self.as_bytes() {
            hash ^= u64::from(*byte);
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        hash
    }
}

impl TableKey for String {
    fn hash(&self) -> u64 {
        // Delegate so that owned and borrowed forms of the same text agree.
        self.as_str().hash()
    }
}

impl TableValue for i32 {}
impl TableValue for String {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_hash_is_deterministic() {
        assert_eq!(42_i32.hash(), 42_i32.hash());
        assert_eq!((-7_i32).hash(), (-7_i32).hash());
    }

    #[test]
    fn integer_hash_separates_nearby_keys() {
        let hashes = [0_i32.hash(), 1_i32.hash(), 2_i32.hash(), (-1_i32).hash()];
        for (i, left) in hashes.iter().enumerate() {
            for right in hashes.iter().skip(i.saturating_add(1)) {
                assert_ne!(left, right);
            }
        }
    }

    #[test]
    fn string_hash_matches_borrowed_form() {
        let owned = String::from("fee");
        assert_eq!(owned.hash(), "fee".hash());
    }

    #[test]
    fn string_hash_is_fnv1a() {
        // Published FNV-1a 64-bit test vectors.
        assert_eq!("".hash(), FNV_OFFSET_BASIS);
        assert_eq!("a".hash(), 0xAF63_DC4C_8601_EC8C);
    }

    #[test]
    fn string_hash_distinguishes_content() {
        assert_ne!("fee".hash(), "fi".hash());
    }
}
