//! Legacy content hash.

/// djb2 over raw bytes, truncated to a signed 32-bit value.
///
/// Saved data from before stable snippet ids referenced text by this value,
/// so the arithmetic must stay bit-for-bit identical.
pub fn djb2_hash(bytes: &[u8]) -> i32 {
    let hash = bytes.iter().fold(5381u32, |hash, &byte| {
        (hash << 5).wrapping_add(hash).wrapping_add(u32::from(byte))
    });
    hash as i32
}
