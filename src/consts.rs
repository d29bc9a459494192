// src/consts.rs
//! Shared constants — keypair bounds

/// Lowest accepted value for either key
pub const KEY_MIN: i32 = 1;

/// Highest accepted value for key one
// Anything larger walks printable ASCII off the 7-bit range
pub const KEY_ONE_MAX: i32 = 5;

/// Highest accepted value for key two
pub const KEY_TWO_MAX: i32 = 20;
