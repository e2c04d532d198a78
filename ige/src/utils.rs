//! Utility functions shared by the IGE chains

use crate::error::{IgeError, Result};

/// XOR `src` into `dst` byte by byte.
///
/// Both slices are one block long; callers guarantee equal lengths.
#[inline]
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= *s;
    }
}

/// Validate a cipher block size
pub fn validate_block_size(block_size: usize) -> Result<()> {
    if block_size == 0 {
        Err(IgeError::InvalidBlockSize)
    } else {
        Ok(())
    }
}

/// Validate that the IV is exactly two blocks long
pub fn validate_iv_length(iv: &[u8], block_size: usize) -> Result<()> {
    let expected = 2 * block_size;
    if iv.len() != expected {
        Err(IgeError::InvalidIvLength { expected, actual: iv.len() })
    } else {
        Ok(())
    }
}

/// Validate that a buffer holds a positive whole number of blocks
pub fn validate_alignment(len: usize, block_size: usize) -> Result<()> {
    if len == 0 || len % block_size != 0 {
        Err(IgeError::NotBlockAligned { len, block_size })
    } else {
        Ok(())
    }
}

/// Validate a `(dst, src)` pair before anything is written
pub fn validate_buffers(dst_len: usize, src_len: usize, block_size: usize) -> Result<()> {
    validate_alignment(src_len, block_size)?;
    if dst_len < src_len {
        return Err(IgeError::OutputTooSmall {
            needed: src_len,
            available: dst_len,
        });
    }
    Ok(())
}

/// Split a validated IV into its two halves
pub fn split_iv(iv: &[u8], block_size: usize) -> (Vec<u8>, Vec<u8>) {
    let (first, second) = iv.split_at(block_size);
    (first.to_vec(), second.to_vec())
}
