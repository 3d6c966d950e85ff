// File:    lib.rs
// Author:  apezoo
// Date:    2025-07-24
//
// Description: The main library crate for base32-core, a Base32 codec with pluggable alphabets.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Base32 Core Library
//!
//! This library provides an RFC 4648 style Base32 codec whose alphabet and
//! padding policy are chosen by the caller. Byte slices and
//! [`std::io::Read`] streams can be encoded; strings are decoded in memory.
//!
//! ```
//! use base32_core::{Alphabet, Base32};
//!
//! let codec = Base32::rfc4648_unpadded();
//! assert_eq!(codec.encode(b"hello"), "NBSWY3DP");
//!
//! let hex = Base32::with_shared(Alphabet::rfc4648_hex());
//! assert_eq!(hex.encode(b"foobar"), "CPNMUOJ1E8======");
//! ```

/// Alphabet definition, validation and presets.
pub mod alphabet;
/// The `Base32` encoder and decoder.
pub mod codec;
/// Loading and saving alphabets as JSON.
pub mod config;
/// Error types.
pub mod error;
/// Bit packing for single groups, shared by encoder and decoder.
pub mod group;
/// Pooled scratch buffers.
pub mod pool;
/// Group sources for the encoder.
pub mod source;

pub use alphabet::Alphabet;
pub use codec::Base32;
pub use config::AlphabetConfig;
pub use error::{ConfigurationError, Error, FormatError, Result};
