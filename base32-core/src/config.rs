// File:    config.rs
// Author:  apezoo
// Date:    2025-07-26
//
// Description: JSON representation of alphabets and helpers to load and save them.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::alphabet::Alphabet;
use crate::error::{ConfigurationError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Serializable description of an alphabet.
///
/// ```json
/// { "symbols": "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567", "padding": "=" }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AlphabetConfig {
    /// The 32 symbols, in value order.
    pub symbols: String,
    /// The padding character; omitted or `null` disables padding.
    #[serde(default)]
    pub padding: Option<char>,
}

impl TryFrom<AlphabetConfig> for Alphabet {
    type Error = ConfigurationError;

    fn try_from(config: AlphabetConfig) -> std::result::Result<Self, Self::Error> {
        Self::from_str_symbols(&config.symbols, config.padding)
    }
}

impl From<&Alphabet> for AlphabetConfig {
    fn from(alphabet: &Alphabet) -> Self {
        Self {
            symbols: alphabet.symbols().iter().collect(),
            padding: alphabet.padding(),
        }
    }
}

impl Alphabet {
    /// The serializable form of this alphabet.
    #[must_use]
    pub fn to_config(&self) -> AlphabetConfig {
        AlphabetConfig::from(self)
    }
}

/// Parses and validates an alphabet from JSON.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::Error::Json) if the document is malformed
/// and [`Error::Configuration`](crate::Error::Configuration) if it
/// describes an invalid alphabet.
pub fn parse_alphabet(json: &str) -> Result<Alphabet> {
    let config: AlphabetConfig = serde_json::from_str(json)?;
    Ok(Alphabet::try_from(config)?)
}

/// Loads an alphabet from a JSON file.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read, and
/// otherwise the same errors as [`parse_alphabet`].
pub fn load_alphabet(path: &Path) -> Result<Alphabet> {
    let config_str = fs::read_to_string(path)?;
    parse_alphabet(&config_str)
}

/// Saves an alphabet to a JSON file, pretty-printed.
///
/// # Errors
///
/// Returns an error if serialization or writing the file fails.
pub fn save_alphabet(path: &Path, alphabet: &Alphabet) -> Result<()> {
    let config_str = serde_json::to_string_pretty(&alphabet.to_config())?;
    fs::write(path, config_str)?;
    Ok(())
}
