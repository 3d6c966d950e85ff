// File:    source.rs
// Author:  apezoo
// Date:    2025-07-25
//
// Description: Group sources that feed the encoder one group of at most five bytes at a time.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Byte sources for the encoder.
//!
//! The encoder only needs "the next group, or nothing": [`GroupSource`]
//! captures that, with [`SliceSource`] for in-memory input and
//! [`ReaderSource`] for anything implementing [`Read`].

use crate::group::GROUP_BYTES;
use std::convert::Infallible;
use std::io::{self, ErrorKind, Read};

/// Produces the input for the encoder one group at a time.
pub trait GroupSource {
    /// Error raised while pulling input.
    type Error;

    /// Fills the front of `group` with up to five bytes and returns how many
    /// were written. Zero means the source is exhausted.
    ///
    /// Only the final group may be short.
    ///
    /// # Errors
    ///
    /// Returns the source's own error if the input could not be read.
    fn next_group(&mut self, group: &mut [u8; GROUP_BYTES]) -> Result<usize, Self::Error>;
}

/// A source over an in-memory byte slice.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    remaining: &'a [u8],
}

impl<'a> SliceSource<'a> {
    /// Creates a source yielding the bytes of `data`.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { remaining: data }
    }

    /// Bytes not yet handed out.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining.len()
    }
}

impl GroupSource for SliceSource<'_> {
    type Error = Infallible;

    fn next_group(&mut self, group: &mut [u8; GROUP_BYTES]) -> Result<usize, Infallible> {
        let n = self.remaining.len().min(GROUP_BYTES);
        let (head, tail) = self.remaining.split_at(n);
        group[..n].copy_from_slice(head);
        self.remaining = tail;
        Ok(n)
    }
}

/// A source pulling from a [`Read`] implementation.
///
/// A group is filled by reading until it holds five bytes or the reader
/// returns 0, so readers that hand out short reads mid-stream still produce
/// full groups. Interrupted reads are retried.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    consumed: u64,
}

impl<R: Read> ReaderSource<R> {
    /// Wraps a reader.
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            consumed: 0,
        }
    }

    /// Total bytes pulled from the reader so far.
    pub const fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> GroupSource for ReaderSource<R> {
    type Error = io::Error;

    fn next_group(&mut self, group: &mut [u8; GROUP_BYTES]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < GROUP_BYTES {
            match self.reader.read(&mut group[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        self.consumed += filled as u64;
        Ok(filled)
    }
}
