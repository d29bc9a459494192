// src/keypair.rs
//! Keypair validation and random generation
//!
//! A keypair is two bounded integers: key one shifts every byte of a
//! message, key two shifts only the second half. A pair is immutable
//! once built and is either user-supplied (validated) or drawn
//! randomly for default-mode use.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{KEY_MIN, KEY_ONE_MAX, KEY_TWO_MAX};
use crate::error::CoreError;

/// Origin of a keypair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyMode {
    /// Drawn randomly at construction time
    Default,
    /// Supplied by the caller and validated
    UserDefined,
}

/// A validated keypair — immutable once constructed
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KeyPair {
    key_one: u8,
    key_two: u8,
}

impl KeyPair {
    /// Validate and build a user-supplied keypair
    pub fn new(key_one: i32, key_two: i32) -> Result<Self, CoreError> {
        if key_one < KEY_MIN || key_one > KEY_ONE_MAX || key_two < KEY_MIN || key_two > KEY_TWO_MAX
        {
            return Err(CoreError::KeyPairOutOfBounds { key_one, key_two });
        }
        Ok(Self {
            key_one: key_one as u8,
            key_two: key_two as u8,
        })
    }

    /// Draw a random keypair within bounds
    ///
    /// The draw for key two stops short of `KEY_TWO_MAX`: generated
    /// pairs never carry a 20, though 20 is accepted from callers.
    pub fn random() -> Self {
        let mut rng = rand::rng();
        Self {
            key_one: rng.random_range(KEY_MIN..=KEY_ONE_MAX) as u8,
            key_two: rng.random_range(KEY_MIN..KEY_TWO_MAX) as u8,
        }
    }

    #[inline]
    pub fn key_one(&self) -> u8 {
        self.key_one
    }

    #[inline]
    pub fn key_two(&self) -> u8 {
        self.key_two
    }
}

// Key values stay out of logs and debug output
impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair").finish_non_exhaustive()
    }
}
