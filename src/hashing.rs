//! Stable content hashing for reproducible identifier derivation
//!
//! Historical envelopes must assign the same identifiers to the same
//! (node, timestamp) pair across processes, so the standard library hasher
//! (randomly keyed, unstable across releases) is not usable here. FNV-1a
//! with fixed parameters is.

/// FNV-1a, 64-bit.
pub(crate) fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for &byte in bytes {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

/// FNV-1a, 128-bit. Needed for identifier fields whose numeric range
/// exceeds what 64 bits can cover (the 20-digit `pi`/`ri` fields).
pub(crate) fn fnv1a128(bytes: &[u8]) -> u128 {
    let mut hash: u128 = 0x6c62272e07bb014262b821756295c58d;
    for &byte in bytes {
        hash ^= byte as u128;
        hash = hash.wrapping_mul(0x0000000001000000000000000000013b);
    }
    hash
}
