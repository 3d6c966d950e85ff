// File:    codec.rs
// Author:  apezoo
// Date:    2025-07-25
//
// Description: The Base32 encoder and decoder, driving the group codec over slices, readers and strings.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Encoding and decoding with a fixed alphabet.

use crate::alphabet::Alphabet;
use crate::error::FormatError;
use crate::group::{
    self, GROUP_BYTES, GROUP_SYMBOLS, decoded_len_upper_bound, encoded_len,
};
use crate::pool::ScratchPool;
use crate::source::{GroupSource, ReaderSource, SliceSource};
use log::{debug, trace};
use std::io::{self, Read, Write};
use std::sync::Arc;

// Worst-case UTF-8 width of one encoded group.
const GROUP_UTF8_BYTES: usize = GROUP_SYMBOLS * 4;

/// A Base32 codec bound to one alphabet.
///
/// Cloning is cheap: the alphabet is shared. A codec can be used from many
/// threads at once.
///
/// ```
/// use base32_core::Base32;
///
/// let codec = Base32::rfc4648();
/// assert_eq!(codec.encode(b"foobar"), "MZXW6YTBOI======");
/// assert_eq!(codec.decode("MZXW6YTBOI======").unwrap(), b"foobar");
/// ```
#[derive(Debug, Clone)]
pub struct Base32 {
    alphabet: Arc<Alphabet>,
    pool: &'static ScratchPool,
}

impl Base32 {
    /// Creates a codec owning `alphabet`.
    #[must_use]
    pub fn new(alphabet: Alphabet) -> Self {
        Self::with_shared(Arc::new(alphabet))
    }

    /// Creates a codec over a shared alphabet.
    #[must_use]
    pub fn with_shared(alphabet: Arc<Alphabet>) -> Self {
        Self {
            alphabet,
            pool: ScratchPool::global(),
        }
    }

    /// RFC 4648 Base32 with `=` padding.
    #[must_use]
    pub fn rfc4648() -> Self {
        Self::with_shared(Alphabet::rfc4648())
    }

    /// RFC 4648 Base32 without padding.
    #[must_use]
    pub fn rfc4648_unpadded() -> Self {
        Self::with_shared(Alphabet::rfc4648_unpadded())
    }

    /// Uses `pool` for scratch buffers instead of the global pool.
    #[must_use]
    pub const fn with_pool(mut self, pool: &'static ScratchPool) -> Self {
        self.pool = pool;
        self
    }

    /// The alphabet in use.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Encodes a byte slice. Empty input gives an empty string.
    #[must_use]
    pub fn encode(&self, data: &[u8]) -> String {
        let mut out = String::new();
        self.encode_to_string(data, &mut out);
        out
    }

    /// Appends the encoding of `data` to `out`.
    pub fn encode_to_string(&self, data: &[u8], out: &mut String) {
        out.reserve(encoded_len(data.len(), self.alphabet.is_padded()));
        let mut source = SliceSource::new(data);
        let encoded = self.drive(&mut source, |symbols| {
            out.extend(symbols);
            Ok(())
        });
        match encoded {
            Ok(_) => {}
            Err(never) => match never {},
        }
    }

    /// Encodes everything `reader` yields into `writer`, one group at a
    /// time, and returns the number of input bytes consumed.
    ///
    /// Symbols are written UTF-8 encoded.
    ///
    /// # Errors
    ///
    /// Returns any error from the reader (other than `Interrupted`, which is
    /// retried) or from the writer.
    pub fn encode_stream<R: Read, W: Write>(&self, reader: R, mut writer: W) -> io::Result<u64> {
        let mut staging = self.pool.rent(GROUP_UTF8_BYTES);
        let mut source = ReaderSource::new(reader);
        let groups = self.drive(&mut source, |symbols| {
            let mut len = 0;
            for symbol in symbols {
                len += symbol.encode_utf8(&mut staging[len..]).len();
            }
            writer.write_all(&staging[..len])
        })?;
        writer.flush()?;
        debug!(
            "Encoded {} bytes into {groups} Base32 groups.",
            source.consumed()
        );
        Ok(source.consumed())
    }

    /// Pulls groups from `source` until it is exhausted, handing each
    /// group's symbols (padded if the alphabet pads) to `emit`. Returns the
    /// number of groups encoded.
    fn drive<S, F>(&self, source: &mut S, mut emit: F) -> Result<usize, S::Error>
    where
        S: GroupSource,
        F: FnMut(&[char]) -> Result<(), S::Error>,
    {
        let mut bytes = [0u8; GROUP_BYTES];
        let mut values = [0u8; GROUP_SYMBOLS];
        let mut symbols = ['\0'; GROUP_SYMBOLS];
        let mut groups = 0;

        loop {
            let n = source.next_group(&mut bytes)?;
            if n == 0 {
                return Ok(groups);
            }
            let count = group::encode_group(&bytes[..n], &mut values);
            for (symbol, &value) in symbols.iter_mut().zip(&values[..count]) {
                *symbol = self.alphabet.symbol_for(value);
            }
            let len = self.alphabet.padding().map_or(count, |pad| {
                symbols[count..].fill(pad);
                GROUP_SYMBOLS
            });
            emit(&symbols[..len])?;
            groups += 1;
            trace!("Encoded group {groups} ({n} bytes -> {len} symbols)");
        }
    }

    /// Decodes a Base32 string.
    ///
    /// Scanning stops at the first padding character; anything after it is
    /// ignored. Use [`Base32::decode_strict`] to reject such input.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidSymbol`] for a character outside the
    /// alphabet and [`FormatError::InvalidTrailingGroup`] if the final group
    /// has 1, 3 or 6 symbols.
    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>, FormatError> {
        self.decode_with(encoded, false)
    }

    /// Decodes a Base32 string, also requiring well-formed padding and
    /// canonical trailing bits.
    ///
    /// On top of [`Base32::decode`], padding may only appear as a single
    /// trailing run completing the final group, a padded alphabet requires
    /// a multiple of eight characters, and unused bits of the final symbol
    /// must be zero.
    ///
    /// # Errors
    ///
    /// Everything [`Base32::decode`] returns, plus
    /// [`FormatError::SymbolAfterPadding`], [`FormatError::InvalidPadding`]
    /// and [`FormatError::NonCanonical`].
    pub fn decode_strict(&self, encoded: &str) -> Result<Vec<u8>, FormatError> {
        self.decode_with(encoded, true)
    }

    fn decode_with(&self, encoded: &str, strict: bool) -> Result<Vec<u8>, FormatError> {
        let char_count = encoded.chars().count();
        let mut out = Vec::with_capacity(decoded_len_upper_bound(char_count));
        let mut values = self.pool.rent(GROUP_SYMBOLS);
        let mut block = [0u8; GROUP_BYTES];
        let mut buffered = 0;
        let padding = self.alphabet.padding();

        let mut chars = encoded.chars().enumerate();
        let mut padding_at = None;
        for (position, symbol) in chars.by_ref() {
            if Some(symbol) == padding {
                padding_at = Some(position);
                break;
            }
            values[buffered] = self
                .alphabet
                .value(symbol)
                .ok_or(FormatError::InvalidSymbol { symbol, position })?;
            buffered += 1;
            if buffered == GROUP_SYMBOLS {
                let n = group::decode_group(&values[..GROUP_SYMBOLS], &mut block)?;
                out.extend_from_slice(&block[..n]);
                buffered = 0;
            }
        }

        let tail = &values[..buffered];
        if strict {
            if group::bytes_for_symbols(tail.len()).is_none() && !tail.is_empty() {
                return Err(FormatError::InvalidTrailingGroup { count: tail.len() });
            }
            if let Some(start) = padding_at {
                if let Some((position, _)) = chars.find(|&(_, c)| Some(c) != padding) {
                    return Err(FormatError::SymbolAfterPadding { position });
                }
                let found = char_count - start;
                let expected = if tail.is_empty() { 0 } else { GROUP_SYMBOLS - tail.len() };
                if found != expected {
                    return Err(FormatError::InvalidPadding { count: found });
                }
            } else if padding.is_some() && !tail.is_empty() {
                return Err(FormatError::InvalidPadding { count: 0 });
            }
            if !tail.is_empty() && !group::is_canonical(tail) {
                return Err(FormatError::NonCanonical {
                    position: padding_at.unwrap_or(char_count) - 1,
                });
            }
        }

        if !tail.is_empty() {
            let n = group::decode_group(tail, &mut block)?;
            out.extend_from_slice(&block[..n]);
        }
        Ok(out)
    }
}

impl Default for Base32 {
    fn default() -> Self {
        Self::rfc4648()
    }
}
