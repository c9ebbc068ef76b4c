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
//! [`rand_core`] integration.
//!
//! [`CtrDrbg`] implements [`TryRngCore`] and [`TryCryptoRng`]. Errors,
//! including [`Error::ReseedRequired`](crate::error::Error::ReseedRequired),
//! are returned to the caller rather than handled here; wrap the
//! instance in [`rand_core::UnwrapErr`] if a panicking
//! [`RngCore`](rand_core::RngCore) is wanted.
use crate::{cipher::BlockCipher, ctr::CtrDrbg, error::Error};

use rand_core::{TryCryptoRng, TryRngCore};

impl<C: BlockCipher> TryRngCore for CtrDrbg<C> {
    type Error = Error;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        let mut int = [0u8; 4];
        self.generate(&mut int, None)?;
        Ok(u32::from_le_bytes(int))
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        let mut int = [0u8; 8];
        self.generate(&mut int, None)?;
        Ok(u64::from_le_bytes(int))
    }

    /// See [`fill_bytes`](crate::ctr::CtrDrbg::fill_bytes) for details.
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Self::Error> {
        self.fill_bytes(dest, None)
    }
}

impl<C: BlockCipher> TryCryptoRng for CtrDrbg<C> {}
