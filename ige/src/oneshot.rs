//! One-shot IGE helpers
//!
//! Each call builds a fresh chain, runs a single transform and drops the
//! chain, so no state is carried between calls.

use crate::{BlockCipher, BlockMode, IgeDecryptor, IgeEncryptor, Result};

/// Encrypts `src` into `dst` with a throwaway [`IgeEncryptor`].
pub fn encrypt_once<C: BlockCipher>(cipher: C, iv: &[u8], dst: &mut [u8], src: &[u8]) -> Result<()> {
    IgeEncryptor::new(cipher, iv)?.transform(dst, src)
}

/// Decrypts `src` into `dst` with a throwaway [`IgeDecryptor`].
pub fn decrypt_once<C: BlockCipher>(cipher: C, iv: &[u8], dst: &mut [u8], src: &[u8]) -> Result<()> {
    IgeDecryptor::new(cipher, iv)?.transform(dst, src)
}

/// Encrypts `src` into a newly allocated buffer
pub fn encrypt_to_vec<C: BlockCipher>(cipher: C, iv: &[u8], src: &[u8]) -> Result<Vec<u8>> {
    let mut out = src.to_vec();
    IgeEncryptor::new(cipher, iv)?.transform_in_place(&mut out)?;
    Ok(out)
}

/// Decrypts `src` into a newly allocated buffer
pub fn decrypt_to_vec<C: BlockCipher>(cipher: C, iv: &[u8], src: &[u8]) -> Result<Vec<u8>> {
    let mut out = src.to_vec();
    IgeDecryptor::new(cipher, iv)?.transform_in_place(&mut out)?;
    Ok(out)
}
