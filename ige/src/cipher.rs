//! Generic block cipher trait

/// A fixed-block-size cipher primitive that IGE chains are layered over.
///
/// Chains only ever call `encrypt` and `decrypt` with a slice of exactly
/// [`block_size`](BlockCipher::block_size) bytes, and transform it in place.
pub trait BlockCipher {
    /// Encrypts a single block in place
    fn encrypt(&self, block: &mut [u8]);

    /// Decrypts a single block in place
    fn decrypt(&self, block: &mut [u8]);

    /// Returns the block size of the cipher
    fn block_size(&self) -> usize;
}

impl<C: BlockCipher + ?Sized> BlockCipher for &C {
    fn encrypt(&self, block: &mut [u8]) {
        (**self).encrypt(block)
    }

    fn decrypt(&self, block: &mut [u8]) {
        (**self).decrypt(block)
    }

    fn block_size(&self) -> usize {
        (**self).block_size()
    }
}

impl<C: BlockCipher + ?Sized> BlockCipher for Box<C> {
    fn encrypt(&self, block: &mut [u8]) {
        (**self).encrypt(block)
    }

    fn decrypt(&self, block: &mut [u8]) {
        (**self).decrypt(block)
    }

    fn block_size(&self) -> usize {
        (**self).block_size()
    }
}

#[cfg(feature = "aes")]
mod aes_impl {
    use super::BlockCipher;
    use aes::cipher::generic_array::GenericArray;
    use aes::cipher::{BlockDecrypt, BlockEncrypt, BlockSizeUser};

    macro_rules! impl_block_cipher {
        ($($ty:ty),+ $(,)?) => {$(
            impl BlockCipher for $ty {
                fn encrypt(&self, block: &mut [u8]) {
                    BlockEncrypt::encrypt_block(self, GenericArray::from_mut_slice(block));
                }

                fn decrypt(&self, block: &mut [u8]) {
                    BlockDecrypt::decrypt_block(self, GenericArray::from_mut_slice(block));
                }

                fn block_size(&self) -> usize {
                    <$ty as BlockSizeUser>::block_size()
                }
            }
        )+};
    }

    impl_block_cipher!(aes::Aes128, aes::Aes192, aes::Aes256);
}

#[cfg(all(test, feature = "aes"))]
mod tests {
    use super::*;
    use aes::cipher::KeyInit;
    use aes::{Aes128, Aes256};

    #[test]
    fn test_aes_block_size() {
        let aes128 = Aes128::new(&[0u8; 16].into());
        let aes256 = Aes256::new(&[7u8; 32].into());

        assert_eq!(BlockCipher::block_size(&aes128), 16);
        assert_eq!(BlockCipher::block_size(&aes256), 16);
    }

    #[test]
    fn test_aes_encrypt_decrypt_block() {
        let cipher = Aes128::new(&[0x42u8; 16].into());
        let original = *b"sixteen byte blk";
        let mut block = original;

        BlockCipher::encrypt(&cipher, &mut block);
        assert_ne!(block, original);

        BlockCipher::decrypt(&cipher, &mut block);
        assert_eq!(block, original);
    }

    #[test]
    fn test_boxed_dyn_cipher() {
        let boxed: Box<dyn BlockCipher> = Box::new(Aes128::new(&[1u8; 16].into()));
        let by_ref = &boxed;

        let mut a = [9u8; 16];
        let mut b = [9u8; 16];
        boxed.encrypt(&mut a);
        by_ref.encrypt(&mut b);

        assert_eq!(a, b);
        assert_eq!(by_ref.block_size(), 16);
    }
}
