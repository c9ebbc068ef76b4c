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
//! Cryptographic random number generator CTR_DRBG defined by [NIST SP
//! 800-90A R1](https://csrc.nist.gov/publications/detail/sp/800-90a/rev-1/final),
//! using AES-256 without a derivation function.
//!
//! The caller supplies all entropy: 48 bytes at instantiation and at
//! every reseed. Each instance may serve 2^24 generate requests of at
//! most 2^16 bytes before it must be reseeded.
//!
//! ```
//! use aes_ctr_drbg::ctr::CtrDrbg;
//!
//! # use aes_ctr_drbg::error::Error;
//! #
//! # fn main() -> Result<(), Error> {
//! #
//! # let entropy = [0u8; 48];
//! let mut drbg: CtrDrbg = CtrDrbg::instantiate(&entropy, b"personalization")?;
//! let mut random_data = [0u8; 32];
//! drbg.generate(&mut random_data, None)?;
//!
//! // Requests larger than 2^16 bytes are split into chunks.
//! let mut key_stream = vec![0u8; 1 << 20];
//! drbg.fill_bytes(&mut key_stream, Some(b"session 1"))?;
//! #
//! # Ok(())
//! # }
//! ```
//!
//! The block cipher is pluggable through
//! [`BlockCipher`](cipher::BlockCipher); [`aes::Aes256Enc`] is the
//! default. [`selftest::self_test`] checks an implementation against
//! known answers.
//!
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
extern crate alloc;

pub mod cipher;
mod counter;
pub mod ctr;
pub mod error;
pub mod selftest;

#[cfg(feature = "rand_core")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand_core")))]
pub mod rng;

pub use crate::{
    ctr::{CtrBuilder, CtrDrbg, DrbgState},
    error::Error,
};
