//! IGE encryption chain

use std::{fmt, mem};

use log::{debug, trace};

use crate::{utils, BlockCipher, Result};

use super::{BlockMode, ChainState};

/// The encrypting half of an IGE chain.
///
/// For each plaintext block `p` the chain computes
/// `c = E(p ^ prev_ciphertext) ^ prev_plaintext`, then remembers `p` and `c`
/// for the next block.
///
/// ```rust
/// # #[cfg(feature = "aes")] {
/// use aes::cipher::KeyInit;
/// use ige::{BlockMode, IgeEncryptor};
///
/// let cipher = aes::Aes128::new(&[0u8; 16].into());
/// let mut enc = IgeEncryptor::new(cipher, &[0u8; 32])?;
///
/// let mut ciphertext = [0u8; 32];
/// enc.transform(&mut ciphertext, b"exactly two sixteen-byte blocks!")?;
/// # }
/// # Ok::<(), ige::IgeError>(())
/// ```
pub struct IgeEncryptor<C> {
    cipher: C,
    block_size: usize,
    state: ChainState,
}

impl<C: BlockCipher> IgeEncryptor<C> {
    /// Creates an encryption chain seeded from a two-block `iv`.
    ///
    /// Fails with [`IgeError::InvalidIvLength`](crate::IgeError::InvalidIvLength)
    /// unless `iv` is exactly twice the cipher block size.
    pub fn new(cipher: C, iv: &[u8]) -> Result<Self> {
        let block_size = cipher.block_size();
        let state = ChainState::new(iv, block_size)
            .inspect_err(|e| debug!("IGE encryptor rejected: {e}"))?;

        debug!("IGE encryptor created, block size {block_size}");
        Ok(Self {
            cipher,
            block_size,
            state,
        })
    }
}

impl<C: BlockCipher> BlockMode for IgeEncryptor<C> {
    fn block_size(&self) -> usize {
        self.block_size
    }

    fn transform_in_place(&mut self, buf: &mut [u8]) -> Result<()> {
        utils::validate_alignment(buf.len(), self.block_size)
            .inspect_err(|e| debug!("IGE encrypt rejected: {e}"))?;
        trace!("IGE encrypt: {} blocks", buf.len() / self.block_size);

        let state = &mut self.state;
        for block in buf.chunks_exact_mut(self.block_size) {
            // plaintext, needed after the block is overwritten
            state.scratch.copy_from_slice(block);

            utils::xor_in_place(block, &state.prev_ciphertext);
            self.cipher.encrypt(block);
            utils::xor_in_place(block, &state.prev_plaintext);

            state.prev_ciphertext.copy_from_slice(block);
            mem::swap(&mut state.prev_plaintext, &mut state.scratch);
        }

        Ok(())
    }
}

impl<C> fmt::Debug for IgeEncryptor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IgeEncryptor")
            .field("block_size", &self.block_size)
            .finish_non_exhaustive()
    }
}

#[cfg(all(test, feature = "aes"))]
mod tests {
    use super::*;
    use crate::IgeError;
    use aes::cipher::KeyInit;
    use aes::Aes128;

    fn cipher() -> Aes128 {
        Aes128::new(&[0u8; 16].into())
    }

    #[test]
    fn test_new_rejects_bad_iv() {
        for len in [0, 1, 16, 31, 33] {
            let result = IgeEncryptor::new(cipher(), &vec![0u8; len]);
            assert!(matches!(
                result,
                Err(IgeError::InvalidIvLength { expected: 32, actual }) if actual == len
            ));
        }
        assert!(IgeEncryptor::new(cipher(), &[0u8; 32]).is_ok());
    }

    #[test]
    fn test_block_size() {
        let enc = IgeEncryptor::new(cipher(), &[0xa5u8; 32]).unwrap();
        assert_eq!(enc.block_size(), 16);
    }

    #[test]
    fn test_transform_rejects_bad_src() {
        let mut enc = IgeEncryptor::new(cipher(), &[0u8; 32]).unwrap();
        let mut dst = [0u8; 16];
        assert_eq!(
            enc.transform(&mut dst, &[0u8; 1]),
            Err(IgeError::NotBlockAligned { len: 1, block_size: 16 })
        );
        assert!(matches!(
            enc.transform(&mut dst, &[]),
            Err(IgeError::NotBlockAligned { len: 0, .. })
        ));
    }

    #[test]
    fn test_transform_rejects_short_dst() {
        let mut enc = IgeEncryptor::new(cipher(), &[0u8; 32]).unwrap();
        let mut dst = [0u8; 1];
        assert_eq!(
            enc.transform(&mut dst, &[0u8; 16]),
            Err(IgeError::OutputTooSmall { needed: 16, available: 1 })
        );
    }

    #[test]
    fn test_failed_call_leaves_dst_and_state() {
        let src = [3u8; 32];

        let mut fresh = IgeEncryptor::new(cipher(), &[1u8; 32]).unwrap();
        let mut expected = [0u8; 32];
        fresh.transform(&mut expected, &src).unwrap();

        let mut enc = IgeEncryptor::new(cipher(), &[1u8; 32]).unwrap();
        let mut dst = [0xeeu8; 16];
        assert!(enc.transform(&mut dst, &src).is_err());
        assert_eq!(dst, [0xeeu8; 16]);

        let mut out = [0u8; 32];
        enc.transform(&mut out, &src).unwrap();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_longer_dst_tail_untouched() {
        let mut enc = IgeEncryptor::new(cipher(), &[0u8; 32]).unwrap();
        let mut dst = [0x77u8; 40];
        enc.transform(&mut dst, &[0u8; 32]).unwrap();
        assert_eq!(&dst[32..], &[0x77u8; 8]);
    }

    #[test]
    fn test_in_place_matches_transform() {
        let src: Vec<u8> = (0u8..64).collect();

        let mut a = IgeEncryptor::new(cipher(), &[9u8; 32]).unwrap();
        let mut out = vec![0u8; 64];
        a.transform(&mut out, &src).unwrap();

        let mut b = IgeEncryptor::new(cipher(), &[9u8; 32]).unwrap();
        let mut buf = src.clone();
        b.transform_in_place(&mut buf).unwrap();

        assert_eq!(out, buf);
    }

    #[test]
    fn test_debug_hides_state() {
        let enc = IgeEncryptor::new(cipher(), &[0x42u8; 32]).unwrap();
        let shown = format!("{enc:?}");
        assert!(shown.contains("block_size: 16"));
        assert!(!shown.contains("66"));
    }
}
