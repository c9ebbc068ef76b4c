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
//! Known-answer health test (SP 800-90A section 11.3).
//!
//! [`self_test`] runs a fixed instantiate, generate, reseed, generate
//! sequence on a throwaway instance and compares the outputs against
//! stored values in constant time. Run it before trusting a
//! [`BlockCipher`] implementation.
use crate::{
    cipher::BlockCipher,
    counter::{SeedData, SEED_LEN},
    ctr::CtrDrbg,
    error::Error,
};

use log::{debug, warn};
use subtle::ConstantTimeEq;

const fn counting(start: u8) -> SeedData {
    let mut out = [0u8; SEED_LEN];
    let mut i = 0;
    while i < SEED_LEN {
        out[i] = start.wrapping_add(i as u8);
        i += 1;
    }
    out
}

const ENTROPY: SeedData = counting(0x00);
const PERSONAL: SeedData = counting(0x30);
const ADDITIONAL: SeedData = counting(0x60);
const RESEED_ENTROPY: SeedData = counting(0x90);

const EXPECTED_0: [u8; 32] = [
    0x24, 0x17, 0x7e, 0x39, 0x38, 0xe9, 0xd1, 0xe2, 0x81, 0x0b, 0x73, 0x75, 0x5e, 0x3d, 0x0f, 0x60,
    0x7a, 0x07, 0xbc, 0xaf, 0xdd, 0x3d, 0x83, 0x08, 0x50, 0x29, 0xad, 0x85, 0x11, 0x27, 0x9d, 0xd9,
];
const EXPECTED_1: [u8; 32] = [
    0x8b, 0xf6, 0x22, 0x81, 0x86, 0xee, 0x64, 0x30, 0x91, 0x8d, 0xf9, 0xc1, 0xd7, 0xea, 0x6b, 0x11,
    0xbd, 0xaa, 0x3a, 0x2a, 0x38, 0x93, 0x8d, 0x14, 0x8c, 0x39, 0x75, 0x5a, 0x29, 0xc3, 0x3e, 0x15,
];

/// Run the known-answer test against the block cipher `C`.
///
/// # Error
///
/// Returns [`Error::SelfTestFailed`] when an output differs from the
/// stored value, or any error raised by the DRBG itself.
///
/// # Example
///
/// ```
/// use aes::Aes256Enc;
/// use aes_ctr_drbg::selftest::self_test;
///
/// assert!(self_test::<Aes256Enc>().is_ok());
/// ```
pub fn self_test<C: BlockCipher>() -> Result<(), Error> {
    let mut drbg = CtrDrbg::<C>::instantiate(&ENTROPY, &PERSONAL)?;

    let mut out_0 = [0u8; 32];
    drbg.generate(&mut out_0, Some(&ADDITIONAL))?;
    drbg.reseed(&RESEED_ENTROPY, None)?;
    let mut out_1 = [0u8; 32];
    drbg.generate(&mut out_1, None)?;

    let ok = out_0[..].ct_eq(&EXPECTED_0[..]) & out_1[..].ct_eq(&EXPECTED_1[..]);
    if !bool::from(ok) {
        warn!("ctr_drbg: known-answer self test failed");
        return Err(Error::SelfTestFailed);
    }
    debug!("ctr_drbg: known-answer self test passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::counter::tests::IdentityCipher;
    use aes::Aes256Enc;

    #[test]
    fn aes_passes() {
        assert_eq!(self_test::<Aes256Enc>(), Ok(()));
    }

    #[test]
    fn broken_cipher_fails() {
        assert_eq!(self_test::<IdentityCipher>(), Err(Error::SelfTestFailed));
    }

    #[test]
    fn counting_inputs() {
        assert_eq!(ENTROPY[0], 0x00);
        assert_eq!(ENTROPY[47], 0x2f);
        assert_eq!(RESEED_ENTROPY[47], 0xbf);
    }
}
