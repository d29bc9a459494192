// src/transform.rs
//! Pure byte transform primitives — no I/O, no allocation
//!
//! Everything here works in place on byte slices with 8-bit wrapping
//! arithmetic, so each forward/inverse pair cancels bit-for-bit even
//! when a shift leaves the ASCII range.

/// Add `key` to every byte (key-one forward direction)
pub fn add_to_all(data: &mut [u8], key: u8) {
    for b in data.iter_mut() {
        *b = b.wrapping_add(key);
    }
}

/// Subtract `key` from every byte — exact inverse of [`add_to_all`]
pub fn sub_from_all(data: &mut [u8], key: u8) {
    for b in data.iter_mut() {
        *b = b.wrapping_sub(key);
    }
}

/// Subtract `key` from every byte in the tail of `data` (key-two
/// forward direction)
///
/// The tail starts at `len / 2`, so the middle byte of an odd-length
/// slice is included.
pub fn sub_from_tail(data: &mut [u8], key: u8) {
    let mid = data.len() / 2;
    for b in &mut data[mid..] {
        *b = b.wrapping_sub(key);
    }
}

/// Add `key` to every byte in the tail of `data` — exact inverse of
/// [`sub_from_tail`] for a slice of unchanged length
pub fn add_to_tail(data: &mut [u8], key: u8) {
    let mid = data.len() / 2;
    for b in &mut data[mid..] {
        *b = b.wrapping_add(key);
    }
}
