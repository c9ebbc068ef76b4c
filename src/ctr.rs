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
//! A module to facilitate the CTR_DRBG algorithm.
//!
//! The CTR_DRBG algorithm is implemented via the [`CtrDrbg`]
//! type. This type may be instantiated directly with
//! [`CtrDrbg::instantiate`] or with the builder class [`CtrBuilder`].
//!
use crate::{
    cipher::{BlockCipher, BLOCK_LEN},
    counter::{Block, CounterEngine, SeedData},
    error::Error,
};

pub use crate::counter::SEED_LEN;

use aes::Aes256Enc;
use core::fmt;
use log::{debug, trace, warn};
use zeroize::Zeroize;

/// Maximum number of bytes returned by a single generate request.
pub const MAX_BYTE_REQUEST: usize = 1 << 16;
/// Number of generate requests allowed between reseeds.
pub const RESEED_INTERVAL: u64 = 1 << 24;
/// Required length of entropy input.
pub const ENTROPY_LEN: usize = SEED_LEN;
/// Maximum length of personalization strings and additional input.
pub const MAX_INPUT_LEN: usize = SEED_LEN;

/// Observable lifecycle state of a [`CtrDrbg`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrbgState {
    /// Not seeded: freshly created with [`CtrDrbg::new`], destroyed,
    /// or poisoned by an internal error.
    Uninitialized,
    /// Ready to generate.
    Seeded,
    /// The seed life is used up. Only a reseed makes the instance
    /// usable again.
    Exhausted,
}

/// Implementation of CTR_DRBG using AES-256 without a derivation
/// function, as outlined by [SP 800-90A
/// Rev. 1](https://csrc.nist.gov/publications/detail/sp/800-90a/rev-1/final).
///
/// All entropy is supplied by the caller. Each instance must have a
/// single owner; wrap it in a mutex to share it between threads.
///
/// # Example
///
/// ```
/// use aes_ctr_drbg::ctr::CtrBuilder;
///
/// # use aes_ctr_drbg::error::Error;
/// #
/// # fn main() -> Result<(), Error> {
/// #
/// let entropy = [0x42u8; 48];
///
/// // Build a new instance
/// let mut drbg = CtrBuilder::new(&entropy).personal(b"my-app").build()?;
///
/// // Generate random data
/// let mut random_data = [0u8; 32];
/// drbg.generate(&mut random_data, None)?;
///
/// // Reseed the instance
/// let fresh_entropy = [0x17u8; 48];
/// drbg.reseed(&fresh_entropy, None)?;
/// #
/// # Ok(())
/// # }
/// ```
pub struct CtrDrbg<C: BlockCipher = Aes256Enc> {
    engine: CounterEngine<C>,
    reseed_ctr: u64,
    seeded: bool,
}

/// Builder class for instantiating `CtrDrbg` instances.
///
/// # Example
/// ```
/// use aes_ctr_drbg::ctr::CtrBuilder;
///
/// # use aes_ctr_drbg::error::Error;
/// #
/// # fn main() -> Result<(), Error> {
/// #
/// let entropy = [7u8; 48];
/// let my_info = 0u32;
/// let drbg = CtrBuilder::new(&entropy)
///     .personal(&my_info.to_be_bytes())
///     .build()?;
/// assert!(drbg.is_seeded());
/// #
/// # Ok(())
/// # }
/// ```
pub struct CtrBuilder<'a> {
    entropy: &'a [u8],
    personal: Option<&'a [u8]>,
}

/// Copy `input` into a zero-padded seed buffer. The caller has
/// already checked the length.
fn pad_seed(input: &[u8]) -> SeedData {
    let mut seed = [0u8; SEED_LEN];
    seed[..input.len()].copy_from_slice(input);
    seed
}

fn check_entropy(entropy: &[u8]) -> Result<(), Error> {
    if entropy.len() != ENTROPY_LEN {
        return Err(Error::InvalidLength(entropy.len()));
    }
    Ok(())
}

fn check_input(input: &[u8]) -> Result<(), Error> {
    if input.len() > MAX_INPUT_LEN {
        return Err(Error::InvalidLength(input.len()));
    }
    Ok(())
}

impl<'a> CtrBuilder<'a> {
    /// Start building an instance seeded with `entropy`, which must be
    /// exactly 48 bytes. The length is checked by [`build`](Self::build).
    pub fn new(entropy: &'a [u8]) -> Self {
        Self {
            entropy,
            personal: None,
        }
    }

    /// Specify the personalization info used to initialize the
    /// CTR_DRBG instance.
    ///
    /// By default, this value is empty. At most 48 bytes are
    /// accepted; shorter values are padded with zeros.
    pub fn personal(mut self, personal: &'a [u8]) -> Self {
        self.personal = Some(personal);
        self
    }

    /// Build and return a new AES-256 [`CtrDrbg`] instance.
    ///
    /// # Error
    ///
    /// Returns [`Error::InvalidLength`] when the entropy is not 48
    /// bytes or the personalization exceeds 48 bytes.
    pub fn build(self) -> Result<CtrDrbg, Error> {
        self.build_with()
    }

    /// Build an instance backed by the block cipher `C`.
    pub fn build_with<C: BlockCipher>(self) -> Result<CtrDrbg<C>, Error> {
        CtrDrbg::instantiate(self.entropy, self.personal.unwrap_or(&[]))
    }
}

impl<C: BlockCipher> Drop for CtrDrbg<C> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<C: BlockCipher> fmt::Debug for CtrDrbg<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CtrDrbg")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl<C: BlockCipher> CtrDrbg<C> {
    /// Create an unseeded instance with a zero key and counter.
    ///
    /// The instance refuses to generate until
    /// [`reseed`](Self::reseed) succeeds.
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            engine: CounterEngine::new()?,
            reseed_ctr: 0,
            seeded: false,
        })
    }

    /// Instantiate a seeded instance from 48 bytes of `entropy` and
    /// up to 48 bytes of `personal` info.
    ///
    /// # Error
    ///
    /// Returns [`Error::InvalidLength`] when either input has the
    /// wrong length.
    pub fn instantiate(entropy: &[u8], personal: &[u8]) -> Result<Self, Error> {
        check_entropy(entropy)?;
        check_input(personal)?;

        let mut drbg = Self::new()?;
        drbg.reseed(entropy, Some(personal))?;
        debug!("ctr_drbg: instantiated");
        Ok(drbg)
    }

    /// Reseed with 48 bytes of new `entropy`. Optional `additional`
    /// data, at most 48 bytes, is mixed in with the entropy.
    ///
    /// Reseeding is valid in any state and resets the seed life.
    ///
    /// # Error
    ///
    /// Returns [`Error::InvalidLength`] when either input has the
    /// wrong length. The instance is left unchanged.
    pub fn reseed(&mut self, entropy: &[u8], additional: Option<&[u8]>) -> Result<(), Error> {
        check_entropy(entropy)?;
        let add_bytes = additional.unwrap_or(&[]);
        check_input(add_bytes)?;

        let mut seed = pad_seed(add_bytes);
        for (s, e) in seed.iter_mut().zip(entropy) {
            *s ^= *e;
        }
        let res = self.update(&seed);
        seed.zeroize();
        res?;

        self.reseed_ctr = 1;
        self.seeded = true;
        debug!("ctr_drbg: reseeded");
        Ok(())
    }

    /// Fill `bytes` with random data. Optional `additional` data, at
    /// most 48 bytes, is mixed into the state before and after the
    /// output is produced.
    ///
    /// A single request is limited to 2^16 bytes; use
    /// [`fill_bytes`](Self::fill_bytes) for larger buffers.
    ///
    /// # Error
    ///
    /// - [`Error::NotSeeded`] before the first successful reseed.
    /// - [`Error::TooLarge`] when `bytes` exceeds 2^16 bytes.
    /// - [`Error::InvalidLength`] when `additional` exceeds 48 bytes.
    /// - [`Error::ReseedRequired`] when the seed life is exhausted. In
    ///   this case the counter has already advanced and `bytes` is
    ///   zeroed.
    ///
    /// Apart from `ReseedRequired` and [`Error::Internal`], a failed
    /// call leaves the instance unchanged.
    pub fn generate(&mut self, bytes: &mut [u8], additional: Option<&[u8]>) -> Result<(), Error> {
        if !self.seeded {
            return Err(Error::NotSeeded);
        }
        if bytes.len() > MAX_BYTE_REQUEST {
            return Err(Error::TooLarge {
                requested: bytes.len(),
                max: MAX_BYTE_REQUEST,
            });
        }
        let add_bytes = additional.unwrap_or(&[]);
        check_input(add_bytes)?;
        trace!("ctr_drbg: generate {} bytes", bytes.len());

        // An empty additional input skips the first update and feeds
        // zeros to the second.
        let mut seed = pad_seed(add_bytes);
        let res = self.generate_with_seed(bytes, &seed, !add_bytes.is_empty());
        seed.zeroize();
        res
    }

    /// Fill `bytes` of any length with random data.
    ///
    /// `bytes` is passed to [`generate`](Self::generate) in chunks no
    /// larger than 2^16 bytes. The `additional` data is only used for
    /// the first chunk.
    ///
    /// # Error
    ///
    /// Stops at, and returns, the first error from `generate`.
    pub fn fill_bytes(&mut self, bytes: &mut [u8], additional: Option<&[u8]>) -> Result<(), Error> {
        if bytes.is_empty() {
            return self.generate(bytes, additional);
        }
        let mut additional = additional;
        for blk in bytes.chunks_mut(MAX_BYTE_REQUEST) {
            self.generate(blk, additional.take())?;
        }
        Ok(())
    }

    /// Returns `true` if the instance holds key material derived from
    /// caller entropy.
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DrbgState {
        if !self.seeded {
            DrbgState::Uninitialized
        } else if self.reseed_ctr > RESEED_INTERVAL {
            DrbgState::Exhausted
        } else {
            DrbgState::Seeded
        }
    }

    /// Wipe the key and counter and return to the unseeded state.
    ///
    /// Calling this more than once is harmless. It also runs when the
    /// instance is dropped.
    pub fn destroy(&mut self) {
        if self.engine.reset().is_err() {
            warn!("ctr_drbg: cipher reset failed during destroy");
        }
        self.reseed_ctr = 0;
        if self.seeded {
            debug!("ctr_drbg: destroyed");
        }
        self.seeded = false;
    }

    fn generate_with_seed(
        &mut self,
        bytes: &mut [u8],
        seed: &SeedData,
        pre_update: bool,
    ) -> Result<(), Error> {
        if pre_update {
            self.update(seed)?;
        }

        let mut chunks = bytes.chunks_exact_mut(BLOCK_LEN);
        for chunk in &mut chunks {
            let out = <&mut Block>::try_from(chunk).map_err(|_| Error::Internal)?;
            self.engine.next_block(out);
        }
        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            let mut tmp_blk: Block = [0u8; BLOCK_LEN];
            self.engine.next_block(&mut tmp_blk);
            tail.copy_from_slice(&tmp_blk[..tail.len()]);
            tmp_blk.zeroize();
        }

        if self.reseed_ctr > RESEED_INTERVAL {
            bytes.zeroize();
            warn!("ctr_drbg: seed life exhausted, reseed required");
            return Err(Error::ReseedRequired);
        }
        self.update(seed)?;
        self.reseed_ctr += 1;
        Ok(())
    }

    /// Run the update routine. A cipher failure leaves the instance
    /// unseeded.
    fn update(&mut self, seed: &SeedData) -> Result<(), Error> {
        if let Err(err) = self.engine.update(seed) {
            warn!("ctr_drbg: update failed: {}", err);
            self.seeded = false;
            return Err(err);
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn set_reseed_counter(&mut self, reseed_ctr: u64) {
        self.reseed_ctr = reseed_ctr;
    }

    #[cfg(test)]
    pub(crate) fn v(&self) -> Block {
        self.engine.v()
    }
}
