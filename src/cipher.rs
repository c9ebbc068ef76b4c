//
// Copyright (c) 2023 Daniel Ottavio
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE
//
//! The block cipher capability used by the DRBG.
//!
//! [`CtrDrbg`](crate::ctr::CtrDrbg) only needs to encrypt single 128-bit
//! blocks under a 256-bit key. Any type that can do that may back an
//! instance by implementing [`BlockCipher`]. The crate provides an
//! implementation for [`Aes256Enc`].
use crate::error::Error;

use aes::{
    cipher::{generic_array::GenericArray, BlockEncrypt, KeyInit},
    Aes256Enc, Block,
};

/// Cipher key length in bytes.
pub const KEY_LEN: usize = 32;
/// Cipher block length in bytes.
pub const BLOCK_LEN: usize = 16;

/// A 256-bit cipher key.
pub type Key = [u8; KEY_LEN];

/// Encryption of a single 128-bit block under a 256-bit key.
pub trait BlockCipher: Sized {
    /// Build a cipher context for `key`.
    ///
    /// # Error
    ///
    /// Returns [`Error::Internal`] if the underlying implementation
    /// cannot produce a context.
    fn new(key: &Key) -> Result<Self, Error>;

    /// Replace the key of this context in place.
    ///
    /// The default implementation builds a fresh context and drops
    /// the old one. Implementations holding key material should wipe
    /// it on drop.
    fn rekey(&mut self, key: &Key) -> Result<(), Error> {
        *self = Self::new(key)?;
        Ok(())
    }

    /// Encrypt `block` in place.
    fn encrypt_block(&self, block: &mut [u8; BLOCK_LEN]);
}

impl BlockCipher for Aes256Enc {
    fn new(key: &Key) -> Result<Self, Error> {
        Ok(<Aes256Enc as KeyInit>::new(GenericArray::from_slice(key)))
    }

    fn encrypt_block(&self, block: &mut [u8; BLOCK_LEN]) {
        let blk: &mut Block = GenericArray::from_mut_slice(block);
        BlockEncrypt::encrypt_block(self, blk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex;

    // FIPS 197, appendix C.3.
    #[test]
    fn aes256_fips197_vector() {
        let key: Key = hex::decode("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f")
            .unwrap()
            .try_into()
            .unwrap();
        let mut block: [u8; BLOCK_LEN] = hex::decode("00112233445566778899aabbccddeeff")
            .unwrap()
            .try_into()
            .unwrap();
        let cipher = <Aes256Enc as BlockCipher>::new(&key).unwrap();
        BlockCipher::encrypt_block(&cipher, &mut block);
        assert_eq!(hex::encode(block), "8ea2b7ca516745bfeafc49904b496089");
    }

    #[test]
    fn rekey_matches_new() {
        let mut cipher = <Aes256Enc as BlockCipher>::new(&[0u8; KEY_LEN]).unwrap();
        cipher.rekey(&[7u8; KEY_LEN]).unwrap();
        let fresh = <Aes256Enc as BlockCipher>::new(&[7u8; KEY_LEN]).unwrap();

        let mut a = [0x5au8; BLOCK_LEN];
        let mut b = [0x5au8; BLOCK_LEN];
        BlockCipher::encrypt_block(&cipher, &mut a);
        BlockCipher::encrypt_block(&fresh, &mut b);
        assert_eq!(a, b);
    }
}
