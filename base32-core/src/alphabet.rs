// File:    alphabet.rs
// Author:  apezoo
// Date:    2025-07-24
//
// Description: The 32-symbol alphabet with optional padding, its validation and the built-in presets.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Alphabets map 5-bit values to characters and back.

use crate::error::ConfigurationError;
use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

/// Number of symbols in every Base32 alphabet.
pub const SYMBOL_COUNT: usize = 32;

/// Padding character used by the RFC 4648 alphabets.
pub const DEFAULT_PADDING: char = '=';

/// Symbols of the RFC 4648 section 6 alphabet.
pub const RFC4648_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
/// Symbols of the RFC 4648 section 7 "extended hex" alphabet.
pub const RFC4648_HEX_SYMBOLS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUV";
/// Symbols of Douglas Crockford's Base32.
pub const CROCKFORD_SYMBOLS: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";
/// Symbols of z-base-32.
pub const ZBASE32_SYMBOLS: &str = "ybndrfg8ejkmcpqxot1uwisza345h769";

#[allow(clippy::non_std_lazy_statics)]
static RFC4648: Lazy<Arc<Alphabet>> =
    Lazy::new(|| Arc::new(Alphabet::builtin(RFC4648_SYMBOLS, Some(DEFAULT_PADDING))));
#[allow(clippy::non_std_lazy_statics)]
static RFC4648_UNPADDED: Lazy<Arc<Alphabet>> =
    Lazy::new(|| Arc::new(Alphabet::builtin(RFC4648_SYMBOLS, None)));
#[allow(clippy::non_std_lazy_statics)]
static RFC4648_HEX: Lazy<Arc<Alphabet>> =
    Lazy::new(|| Arc::new(Alphabet::builtin(RFC4648_HEX_SYMBOLS, Some(DEFAULT_PADDING))));
#[allow(clippy::non_std_lazy_statics)]
static CROCKFORD: Lazy<Arc<Alphabet>> =
    Lazy::new(|| Arc::new(Alphabet::builtin(CROCKFORD_SYMBOLS, None)));
#[allow(clippy::non_std_lazy_statics)]
static ZBASE32: Lazy<Arc<Alphabet>> =
    Lazy::new(|| Arc::new(Alphabet::builtin(ZBASE32_SYMBOLS, None)));

/// An immutable table of 32 distinct symbols plus an optional padding
/// character.
///
/// The index of a symbol is the 5-bit value it encodes. A reverse map from
/// symbol to value is built once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [char; SYMBOL_COUNT],
    reverse: HashMap<char, u8>,
    padding: Option<char>,
}

impl Alphabet {
    /// Builds an alphabet from exactly 32 symbols and an optional padding
    /// character.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the symbol count is not 32, a
    /// symbol repeats, or the padding character is one of the symbols.
    pub fn new<I>(symbols: I, padding: Option<char>) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = char>,
    {
        Self::build(symbols.into_iter().collect(), padding)
            .inspect_err(|e| debug!("Rejected alphabet definition: {e}"))
    }

    /// Builds an alphabet from the characters of a string.
    ///
    /// # Errors
    ///
    /// Same as [`Alphabet::new`].
    pub fn from_str_symbols(symbols: &str, padding: Option<char>) -> Result<Self, ConfigurationError> {
        Self::new(symbols.chars(), padding)
    }

    fn build(symbols: Vec<char>, padding: Option<char>) -> Result<Self, ConfigurationError> {
        let symbols: [char; SYMBOL_COUNT] = symbols
            .try_into()
            .map_err(|rejected: Vec<char>| ConfigurationError::WrongSymbolCount {
                count: rejected.len(),
            })?;

        let mut reverse = HashMap::with_capacity(SYMBOL_COUNT);
        for (value, &symbol) in (0u8..).zip(symbols.iter()) {
            if reverse.insert(symbol, value).is_some() {
                return Err(ConfigurationError::DuplicateSymbol { symbol });
            }
        }

        if let Some(pad) = padding.filter(|pad| reverse.contains_key(pad)) {
            return Err(ConfigurationError::PaddingCollision { padding: pad });
        }

        Ok(Self {
            symbols,
            reverse,
            padding,
        })
    }

    #[allow(clippy::expect_used)]
    fn builtin(symbols: &str, padding: Option<char>) -> Self {
        Self::from_str_symbols(symbols, padding).expect("built-in alphabet must be valid")
    }

    /// Returns a copy of this alphabet with a different padding policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::PaddingCollision`] if the new padding
    /// character is one of the symbols.
    pub fn with_padding(&self, padding: Option<char>) -> Result<Self, ConfigurationError> {
        Self::new(self.symbols, padding)
    }

    /// The RFC 4648 alphabet with `=` padding.
    #[must_use]
    pub fn rfc4648() -> Arc<Self> {
        Arc::clone(&*RFC4648)
    }

    /// The RFC 4648 alphabet without padding.
    #[must_use]
    pub fn rfc4648_unpadded() -> Arc<Self> {
        Arc::clone(&*RFC4648_UNPADDED)
    }

    /// The RFC 4648 "extended hex" alphabet with `=` padding.
    #[must_use]
    pub fn rfc4648_hex() -> Arc<Self> {
        Arc::clone(&*RFC4648_HEX)
    }

    /// Crockford's alphabet, unpadded.
    #[must_use]
    pub fn crockford() -> Arc<Self> {
        Arc::clone(&*CROCKFORD)
    }

    /// The z-base-32 alphabet, unpadded.
    #[must_use]
    pub fn zbase32() -> Arc<Self> {
        Arc::clone(&*ZBASE32)
    }

    /// Returns the symbol for a 5-bit value, or `None` if `value >= 32`.
    #[must_use]
    pub fn symbol(&self, value: u8) -> Option<char> {
        self.symbols.get(usize::from(value)).copied()
    }

    /// Returns the 5-bit value of a symbol, or `None` if it is not part of
    /// the alphabet. Padding is not a symbol.
    #[must_use]
    pub fn value(&self, symbol: char) -> Option<u8> {
        self.reverse.get(&symbol).copied()
    }

    /// Symbol lookup for values the group codec produced; only the low five
    /// bits are used.
    pub(crate) fn symbol_for(&self, value: u8) -> char {
        self.symbols[usize::from(value & 0x1f)]
    }

    /// The padding character, if any.
    #[must_use]
    pub const fn padding(&self) -> Option<char> {
        self.padding
    }

    /// Whether short final groups are padded to eight symbols.
    #[must_use]
    pub const fn is_padded(&self) -> bool {
        self.padding.is_some()
    }

    /// The symbol table in value order.
    #[must_use]
    pub const fn symbols(&self) -> &[char; SYMBOL_COUNT] {
        &self.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_symbol_counts() {
        let short = &RFC4648_SYMBOLS[..31];
        assert_eq!(
            Alphabet::from_str_symbols(short, None),
            Err(ConfigurationError::WrongSymbolCount { count: 31 })
        );

        let long = format!("{RFC4648_SYMBOLS}8");
        assert_eq!(
            Alphabet::from_str_symbols(&long, Some('=')),
            Err(ConfigurationError::WrongSymbolCount { count: 33 })
        );

        assert_eq!(
            Alphabet::new(std::iter::empty(), None),
            Err(ConfigurationError::WrongSymbolCount { count: 0 })
        );
    }

    #[test]
    fn rejects_duplicate_symbol() {
        let duplicated = RFC4648_SYMBOLS.replace('7', "A");
        assert_eq!(
            Alphabet::from_str_symbols(&duplicated, None),
            Err(ConfigurationError::DuplicateSymbol { symbol: 'A' })
        );
    }

    #[test]
    fn rejects_padding_that_is_a_symbol() {
        assert_eq!(
            Alphabet::from_str_symbols(RFC4648_SYMBOLS, Some('Q')),
            Err(ConfigurationError::PaddingCollision { padding: 'Q' })
        );
        assert_eq!(
            Alphabet::rfc4648().with_padding(Some('2')),
            Err(ConfigurationError::PaddingCollision { padding: '2' })
        );
    }

    #[test]
    fn forward_and_reverse_lookup_agree() {
        let alphabet = Alphabet::rfc4648();
        for value in 0..32u8 {
            let symbol = alphabet.symbol(value).unwrap();
            assert_eq!(alphabet.value(symbol), Some(value));
        }
        assert_eq!(alphabet.symbol(32), None);
        assert_eq!(alphabet.value('='), None);
        assert_eq!(alphabet.value('a'), None);
    }

    #[test]
    fn presets_share_one_instance() {
        assert!(Arc::ptr_eq(&Alphabet::rfc4648(), &Alphabet::rfc4648()));
        assert!(Alphabet::rfc4648().is_padded());
        assert!(!Alphabet::rfc4648_unpadded().is_padded());
        assert_eq!(
            Alphabet::rfc4648().symbols(),
            Alphabet::rfc4648_unpadded().symbols()
        );
    }

    #[test]
    fn unicode_symbols_are_accepted() {
        let symbols: String = ('\u{3b1}'..).take(32).collect();
        let alphabet = Alphabet::from_str_symbols(&symbols, Some('\u{2022}')).unwrap();
        assert_eq!(alphabet.symbol(0), Some('\u{3b1}'));
        assert_eq!(alphabet.value('\u{3b2}'), Some(1));
    }
}
