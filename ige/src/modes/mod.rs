//! IGE chain implementation

pub mod decrypt;
pub mod encrypt;

pub use decrypt::IgeDecryptor;
pub use encrypt::IgeEncryptor;

use log::debug;
use zeroize::Zeroize;

use crate::{utils, Result};

/// A stateful block-aligned transform, either direction of an IGE chain.
///
/// Successive calls on one instance continue the same chain; there is no
/// reset. Any failed call returns before writing output or touching state.
pub trait BlockMode {
    /// Returns the block size this chain was built with
    fn block_size(&self) -> usize;

    /// Transforms `buf` in place.
    ///
    /// `buf.len()` must be a positive multiple of the block size.
    fn transform_in_place(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Transforms `src` into the first `src.len()` bytes of `dst`.
    ///
    /// `src.len()` must be a positive multiple of the block size and `dst`
    /// must be at least as long as `src`.
    fn transform(&mut self, dst: &mut [u8], src: &[u8]) -> Result<()> {
        utils::validate_buffers(dst.len(), src.len(), self.block_size())
            .inspect_err(|e| debug!("IGE transform rejected: {e}"))?;

        let out = &mut dst[..src.len()];
        out.copy_from_slice(src);
        self.transform_in_place(out)
    }
}

/// The two chaining accumulators plus one block of scratch space.
///
/// `prev_ciphertext` starts as the first IV half and `prev_plaintext` as
/// the second, for both directions.
pub(crate) struct ChainState {
    pub(crate) prev_ciphertext: Vec<u8>,
    pub(crate) prev_plaintext: Vec<u8>,
    pub(crate) scratch: Vec<u8>,
}

impl ChainState {
    pub(crate) fn new(iv: &[u8], block_size: usize) -> Result<Self> {
        utils::validate_block_size(block_size)?;
        utils::validate_iv_length(iv, block_size)?;

        let (prev_ciphertext, prev_plaintext) = utils::split_iv(iv, block_size);
        Ok(Self {
            prev_ciphertext,
            prev_plaintext,
            scratch: vec![0u8; block_size],
        })
    }
}

impl Drop for ChainState {
    fn drop(&mut self) {
        self.prev_ciphertext.zeroize();
        self.prev_plaintext.zeroize();
        self.scratch.zeroize();
    }
}
