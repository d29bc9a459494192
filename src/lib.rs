// src/lib.rs
//! message-obfuscator — a keypair-driven text obfuscator
//!
//! Features:
//! - Two-integer keypair, validated or randomly drawn
//! - Fixed shift/reverse/shift byte pipeline with an exact inverse
//! - String-level and lossless byte-level APIs
//!
//! Not cryptography: the transform is reversible ASCII arithmetic and
//! offers no confidentiality against analysis.

pub mod consts;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keypair;
pub mod transform;

// Re-export everything users need at the crate root
pub use decrypt::Decrypt;
pub use encrypt::Encrypt;
pub use error::CoreError;
pub use keypair::{KeyMode, KeyPair};
