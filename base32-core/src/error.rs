// File:    error.rs
// Author:  apezoo
// Date:    2025-07-24
//
// Description: Error types for alphabet construction, decoding and alphabet file loading.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Error types returned by the codec.
//!
//! Construction of an [`Alphabet`](crate::alphabet::Alphabet) can only fail
//! with a [`ConfigurationError`], and decoding can only fail with a
//! [`FormatError`]. Encoding a byte slice never fails.

use thiserror::Error;

/// A malformed alphabet definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The symbol table does not hold exactly 32 symbols.
    #[error("alphabet must contain exactly 32 symbols, got {count}")]
    WrongSymbolCount {
        /// Number of symbols supplied.
        count: usize,
    },

    /// The same symbol appears more than once.
    #[error("duplicate symbol {symbol:?} in alphabet")]
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: char,
    },

    /// The padding character is also one of the 32 symbols.
    #[error("padding character {padding:?} is also an alphabet symbol")]
    PaddingCollision {
        /// The offending padding character.
        padding: char,
    },
}

/// Input that is not valid Base32 for the alphabet in use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A character outside the alphabet.
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        /// The unknown character.
        symbol: char,
        /// Character (not byte) offset into the input.
        position: usize,
    },

    /// The final group holds a symbol count that no byte count maps to.
    #[error("invalid trailing group of {count} symbols")]
    InvalidTrailingGroup {
        /// Number of symbols left over (1, 3 or 6).
        count: usize,
    },

    /// Strict mode: a symbol follows a padding character.
    #[error("symbol after padding at position {position}")]
    SymbolAfterPadding {
        /// Character offset of the first symbol after padding.
        position: usize,
    },

    /// Strict mode: the padding run does not complete the final group.
    #[error("invalid padding length {count}")]
    InvalidPadding {
        /// Number of padding characters found.
        count: usize,
    },

    /// Strict mode: the unused low bits of the final symbol are not zero.
    #[error("non-canonical trailing bits at position {position}")]
    NonCanonical {
        /// Character offset of the final symbol.
        position: usize,
    },
}

/// Umbrella error for callers that load alphabets from disk or mix
/// decoding with I/O.
#[derive(Debug, Error)]
pub enum Error {
    /// Alphabet construction failed.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Decoding failed.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Underlying I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An alphabet file could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias using the umbrella [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
