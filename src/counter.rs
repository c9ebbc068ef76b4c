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
//! Counter engine and update routine of CTR_DRBG.
//!
//! [`CounterEngine`] owns the working state `(Key, V)`. Output is
//! produced one block at a time by incrementing `V` and encrypting it
//! under `Key`. The update routine derives a fresh `(Key, V)` pair
//! from three such blocks and 48 bytes of provided data.
use crate::{
    cipher::{BlockCipher, Key, BLOCK_LEN, KEY_LEN},
    error::Error,
};

use zeroize::Zeroize;

/// Seed length: one key followed by one block.
pub const SEED_LEN: usize = KEY_LEN + BLOCK_LEN;

/// Seed material consumed by the update routine.
pub type SeedData = [u8; SEED_LEN];

/// A 128-bit counter block.
pub type Block = [u8; BLOCK_LEN];

/// Increment a slice of bytes by 1 in big-endian order, wrapping on
/// overflow.
pub(crate) fn inc_bytes(block: &mut [u8]) {
    for byte in block.iter_mut().rev() {
        if *byte == 0xff {
            *byte = 0;
        } else {
            *byte += 1;
            break;
        }
    }
}

pub(crate) struct CounterEngine<C> {
    cipher: C,
    v_blk: Block,
}

impl<C: BlockCipher> CounterEngine<C> {
    /// Zero key, zero counter.
    pub(crate) fn new() -> Result<Self, Error> {
        Ok(Self {
            cipher: C::new(&[0u8; KEY_LEN])?,
            v_blk: [0u8; BLOCK_LEN],
        })
    }

    /// Return to the zero key and zero counter, wiping the previous
    /// key schedule.
    pub(crate) fn reset(&mut self) -> Result<(), Error> {
        self.v_blk.zeroize();
        self.cipher.rekey(&[0u8; KEY_LEN])
    }

    /// Increment `V` and write `E(Key, V)` into `out`.
    pub(crate) fn next_block(&mut self, out: &mut Block) {
        inc_bytes(&mut self.v_blk);
        out.copy_from_slice(&self.v_blk);
        self.cipher.encrypt_block(out);
    }

    /// Derive a new `(Key, V)` from three cipher blocks XOR `provided`.
    pub(crate) fn update(&mut self, provided: &SeedData) -> Result<(), Error> {
        let mut tmp_buf: SeedData = [0u8; SEED_LEN];
        for chunk in tmp_buf.chunks_exact_mut(BLOCK_LEN) {
            let mut blk = [0u8; BLOCK_LEN];
            self.next_block(&mut blk);
            chunk.copy_from_slice(&blk);
            blk.zeroize();
        }
        for (t, p) in tmp_buf.iter_mut().zip(provided) {
            *t ^= *p;
        }

        let mut key: Key = [0u8; KEY_LEN];
        key.copy_from_slice(&tmp_buf[..KEY_LEN]);
        let rekeyed = self.cipher.rekey(&key);
        self.v_blk.copy_from_slice(&tmp_buf[KEY_LEN..]);

        key.zeroize();
        tmp_buf.zeroize();
        rekeyed
    }

    #[cfg(test)]
    pub(crate) fn v(&self) -> Block {
        self.v_blk
    }
}

impl<C> Drop for CounterEngine<C> {
    fn drop(&mut self) {
        self.v_blk.zeroize();
    }
}
