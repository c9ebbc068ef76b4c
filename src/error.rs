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
//! Error type returned by every fallible DRBG operation.
use thiserror::Error;

/// Failures reported at the DRBG boundary.
///
/// Apart from [`Error::ReseedRequired`] and [`Error::Internal`], an
/// operation that returns an error leaves the instance exactly as it
/// was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// An entropy, personalization or additional input had the wrong
    /// length.
    #[error("input length {0} is invalid")]
    InvalidLength(usize),

    /// Generate was called before the instance was seeded.
    #[error("drbg is not seeded")]
    NotSeeded,

    /// A single generate request asked for more than 2^16 bytes.
    #[error("request of {requested} bytes exceeds the {max} byte limit")]
    TooLarge { requested: usize, max: usize },

    /// The seed life is exhausted. The instance must be reseeded.
    #[error("reseed required")]
    ReseedRequired,

    /// The block cipher failed unexpectedly. The instance is no longer
    /// usable and should be destroyed.
    #[error("internal block cipher error")]
    Internal,

    /// The known-answer health test produced unexpected output.
    #[error("known-answer self test failed")]
    SelfTestFailed,
}
