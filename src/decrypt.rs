// src/decrypt.rs
//! Decryption side of the pipeline
//!
//! Runs the exact structural inverse of the encrypt pipeline. A
//! [`Decrypt`] instance copies its keypair from an [`Encrypt`] (paired
//! use, either mode) or validates explicit values; nothing beyond the
//! pair ties the two instances together — any matching pair inverts
//! the output.

use log::{debug, trace};

use crate::encrypt::Encrypt;
use crate::error::CoreError;
use crate::keypair::KeyPair;
use crate::transform;

/// Inverts the shift/reverse/shift pipeline for a known keypair
#[derive(Debug, Clone)]
pub struct Decrypt {
    keys: KeyPair,
}

impl Decrypt {
    /// Build from the encrypting instance's keypair
    pub fn from_encrypt(e: &Encrypt) -> Self {
        debug!("new Decrypt instance, keypair copied from Encrypt");
        Self { keys: e.key_pair() }
    }

    /// Build from explicit key values
    pub fn with_keys(key_one: i32, key_two: i32) -> Result<Self, CoreError> {
        let keys = KeyPair::new(key_one, key_two)?;
        debug!("new Decrypt instance, user-defined keypair");
        Ok(Self { keys })
    }

    /// Recover a message obfuscated with the same keypair
    ///
    /// The message must be the unmodified output of the encrypt side:
    /// the tail split is recomputed from the length, so a message of
    /// changed length does not invert.
    pub fn decrypt(&self, message: &str) -> String {
        let out = self.decrypt_to_vec(message.as_bytes());
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Run the inverse byte pipeline: shift the tail up by key two,
    /// reverse, shift all bytes down by key one
    pub fn decrypt_to_vec(&self, ciphertext: &[u8]) -> Vec<u8> {
        let mut data = ciphertext.to_vec();
        transform::add_to_tail(&mut data, self.keys.key_two());
        data.reverse();
        transform::sub_from_all(&mut data, self.keys.key_one());
        trace!("decrypted {} bytes", data.len());
        data
    }
}

impl From<&Encrypt> for Decrypt {
    fn from(e: &Encrypt) -> Self {
        Self::from_encrypt(e)
    }
}
