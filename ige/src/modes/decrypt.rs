//! IGE decryption chain

use std::{fmt, mem};

use log::{debug, trace};

use crate::{utils, BlockCipher, Result};

use super::{BlockMode, ChainState};

/// The decrypting half of an IGE chain.
///
/// For each ciphertext block `c` the chain computes
/// `p = D(c ^ prev_plaintext) ^ prev_ciphertext`. Built from the same
/// cipher and IV as an [`IgeEncryptor`](super::IgeEncryptor), it inverts
/// that encryptor's output exactly.
pub struct IgeDecryptor<C> {
    cipher: C,
    block_size: usize,
    state: ChainState,
}

impl<C: BlockCipher> IgeDecryptor<C> {
    /// Creates a decryption chain seeded from a two-block `iv`.
    pub fn new(cipher: C, iv: &[u8]) -> Result<Self> {
        let block_size = cipher.block_size();
        let state = ChainState::new(iv, block_size)
            .inspect_err(|e| debug!("IGE decryptor rejected: {e}"))?;

        debug!("IGE decryptor created, block size {block_size}");
        Ok(Self {
            cipher,
            block_size,
            state,
        })
    }
}

impl<C: BlockCipher> BlockMode for IgeDecryptor<C> {
    fn block_size(&self) -> usize {
        self.block_size
    }

    fn transform_in_place(&mut self, buf: &mut [u8]) -> Result<()> {
        utils::validate_alignment(buf.len(), self.block_size)
            .inspect_err(|e| debug!("IGE decrypt rejected: {e}"))?;
        trace!("IGE decrypt: {} blocks", buf.len() / self.block_size);

        let state = &mut self.state;
        for block in buf.chunks_exact_mut(self.block_size) {
            state.scratch.copy_from_slice(block);

            utils::xor_in_place(block, &state.prev_plaintext);
            self.cipher.decrypt(block);
            utils::xor_in_place(block, &state.prev_ciphertext);

            state.prev_plaintext.copy_from_slice(block);
            mem::swap(&mut state.prev_ciphertext, &mut state.scratch);
        }

        Ok(())
    }
}

impl<C> fmt::Debug for IgeDecryptor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IgeDecryptor")
            .field("block_size", &self.block_size)
            .finish_non_exhaustive()
    }
}
