// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error(
        "keypair out of bounds: got ({key_one}, {key_two}), \
         expected key one in 1..=5 and key two in 1..=20"
    )]
    KeyPairOutOfBounds { key_one: i32, key_two: i32 },
}
