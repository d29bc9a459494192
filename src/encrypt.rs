// src/encrypt.rs
//! Encryption side of the pipeline
//!
//! An [`Encrypt`] instance owns one keypair for its whole lifetime.
//! Default-mode instances draw the pair at construction; user-defined
//! instances validate the caller's values. The transform itself is a
//! pure function of the pair and the input bytes, so one instance can
//! encrypt any number of messages.

use log::{debug, trace};

use crate::error::CoreError;
use crate::keypair::{KeyMode, KeyPair};
use crate::transform;

/// Obfuscates messages with a fixed shift/reverse/shift pipeline
#[derive(Debug, Clone)]
pub struct Encrypt {
    keys: KeyPair,
    mode: KeyMode,
}

impl Encrypt {
    /// Build a default-mode instance with a randomly drawn keypair
    pub fn new() -> Self {
        debug!("new Encrypt instance, default keypair");
        Self {
            keys: KeyPair::random(),
            mode: KeyMode::Default,
        }
    }

    /// Build a user-defined-mode instance from explicit key values
    pub fn with_keys(key_one: i32, key_two: i32) -> Result<Self, CoreError> {
        let keys = KeyPair::new(key_one, key_two)?;
        debug!("new Encrypt instance, user-defined keypair");
        Ok(Self {
            keys,
            mode: KeyMode::UserDefined,
        })
    }

    /// Keypair origin of this instance
    pub fn mode(&self) -> KeyMode {
        self.mode
    }

    /// The keypair this instance encrypts with
    ///
    /// A decryptor built from these values inverts this instance's
    /// output.
    pub fn key_pair(&self) -> KeyPair {
        self.keys
    }

    /// Obfuscate a message
    ///
    /// The output only round-trips through the decrypt side when every
    /// transformed byte is still a valid single-byte text unit; bytes
    /// pushed outside that range are replaced during decoding. Use
    /// [`encrypt_to_vec`](Self::encrypt_to_vec) when the input may
    /// leave the safe range.
    pub fn encrypt(&self, message: &str) -> String {
        let out = self.encrypt_to_vec(message.as_bytes());
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Run the byte pipeline: shift all bytes up by key one, reverse,
    /// shift the tail down by key two
    pub fn encrypt_to_vec(&self, plaintext: &[u8]) -> Vec<u8> {
        let mut data = plaintext.to_vec();
        transform::add_to_all(&mut data, self.keys.key_one());
        data.reverse();
        transform::sub_from_tail(&mut data, self.keys.key_two());
        trace!("encrypted {} bytes", data.len());
        data
    }
}

impl Default for Encrypt {
    fn default() -> Self {
        Self::new()
    }
}
