//! # IGE Block Cipher Mode
//!
//! This library implements the Infinite Garble Extension (IGE) mode of
//! operation on top of any fixed-block-size cipher.
//!
//! In IGE every ciphertext block depends on the current plaintext block,
//! the previous ciphertext block and the previous plaintext block. Altering
//! one ciphertext block therefore garbles every block decrypted after it.
//!
//! ## Usage
//!
//! ```rust
//! # #[cfg(feature = "aes")] {
//! use aes::cipher::KeyInit;
//! use ige::{decrypt_to_vec, encrypt_to_vec};
//!
//! let key = [0x42u8; 16];
//! let iv = [0x24u8; 32]; // two blocks
//! let plaintext = b"IGE needs block-aligned input!!!";
//!
//! let ciphertext = encrypt_to_vec(aes::Aes128::new(&key.into()), &iv, plaintext)?;
//! let decrypted = decrypt_to_vec(aes::Aes128::new(&key.into()), &iv, &ciphertext)?;
//! assert_eq!(&decrypted[..], plaintext);
//! # }
//! # Ok::<(), ige::IgeError>(())
//! ```
//!
//! ## Features
//!
//! - Generic `BlockCipher` trait; `aes` (default) implements it for AES-128/192/256
//! - Stateful chains that continue across calls, plus one-shot helpers
//! - Validation before any output is written
//! - No padding and no authentication: inputs must be whole blocks

// Public modules
pub mod cipher;
pub mod error;
pub mod modes;
pub mod oneshot;
pub mod utils;

// Re-exports for easy access
pub use cipher::BlockCipher;
pub use error::{IgeError, Result};
pub use modes::{BlockMode, IgeDecryptor, IgeEncryptor};
pub use oneshot::{decrypt_once, decrypt_to_vec, encrypt_once, encrypt_to_vec};

#[cfg(feature = "aes")]
pub use aes;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
