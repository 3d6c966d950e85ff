#![allow(missing_docs)]
use base32_core::{Alphabet, Base32, ConfigurationError, FormatError};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 37 + 11) as u8).collect()
}

#[test]
fn test_round_trip_all_lengths_both_padding_modes() {
    for codec in [Base32::rfc4648(), Base32::rfc4648_unpadded()] {
        for len in 0..=64 {
            let data = sample(len);
            let encoded = codec.encode(&data);
            assert_eq!(codec.decode(&encoded).unwrap(), data, "length {len}");
        }
    }
}

#[test]
fn test_round_trip_random_data() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let codecs = [
        Base32::rfc4648(),
        Base32::rfc4648_unpadded(),
        Base32::with_shared(Alphabet::rfc4648_hex()),
        Base32::with_shared(Alphabet::crockford()),
        Base32::with_shared(Alphabet::zbase32()),
    ];
    for _ in 0..200 {
        let mut data = vec![0u8; rng.random_range(0..=64)];
        rng.fill(&mut data[..]);
        for codec in &codecs {
            let encoded = codec.encode(&data);
            assert_eq!(codec.decode(&encoded).unwrap(), data);
            assert_eq!(codec.decode_strict(&encoded).unwrap(), data);
        }
    }
}

#[test]
fn test_empty_input() {
    let codec = Base32::rfc4648();
    assert_eq!(codec.encode(&[]), "");
    assert_eq!(codec.decode("").unwrap(), Vec::<u8>::new());
    assert_eq!(codec.decode_strict("").unwrap(), Vec::<u8>::new());
}

#[test]
fn test_exact_multiple_of_five_has_no_padding() {
    let codec = Base32::rfc4648();
    for n in (5..=60).step_by(5) {
        let encoded = codec.encode(&sample(n));
        assert_eq!(encoded.len(), n / 5 * 8);
        assert!(!encoded.contains('='));
    }
}

#[test]
fn test_padded_output_is_always_a_multiple_of_eight() {
    let codec = Base32::rfc4648();
    for n in 1..=40 {
        let encoded = codec.encode(&sample(n));
        assert_eq!(encoded.len() % 8, 0, "length {n}");
        assert_eq!(
            encoded.len(),
            base32_core::group::encoded_len(n, true)
        );
    }
}

#[test]
fn test_rfc4648_hex_vectors() {
    let codec = Base32::with_shared(Alphabet::rfc4648_hex());
    let vectors = [
        ("f", "CO======"),
        ("fo", "CPNG===="),
        ("foo", "CPNMU==="),
        ("foob", "CPNMUOG="),
        ("fooba", "CPNMUOJ1"),
        ("foobar", "CPNMUOJ1E8======"),
    ];
    for (plain, encoded) in vectors {
        assert_eq!(codec.encode(plain.as_bytes()), encoded);
        assert_eq!(codec.decode(encoded).unwrap(), plain.as_bytes());
    }
}

#[test]
fn test_invalid_symbol() {
    let codec = Base32::rfc4648();
    assert_eq!(
        codec.decode("M!"),
        Err(FormatError::InvalidSymbol {
            symbol: '!',
            position: 1
        })
    );
    // Lowercase is a different symbol set.
    assert!(matches!(
        codec.decode("my======"),
        Err(FormatError::InvalidSymbol { symbol: 'm', .. })
    ));
}

#[test]
fn test_invalid_leftover_lengths() {
    let codec = Base32::rfc4648();
    for (input, count) in [
        ("M", 1),
        ("MZX", 3),
        ("MZXW6Y", 6),
        ("MZXW6YTBM", 1),
        ("MZX=====", 3),
        ("MZXW6Y==", 6),
    ] {
        assert_eq!(
            codec.decode(input),
            Err(FormatError::InvalidTrailingGroup { count }),
            "input {input}"
        );
    }
}

#[test]
fn test_custom_alphabet_matches_default_symbol_for_symbol() {
    let custom_symbols = "abcdefghijklmnopqrstuvwxyz!@#$%^";
    let custom = Base32::new(Alphabet::from_str_symbols(custom_symbols, Some('*')).unwrap());
    let default = Base32::rfc4648();
    let default_symbols = Alphabet::rfc4648().symbols().to_vec();

    for len in 0..=32 {
        let data = sample(len);
        let custom_encoded = custom.encode(&data);
        let translated: String = default
            .encode(&data)
            .chars()
            .map(|c| match default_symbols.iter().position(|&s| s == c) {
                Some(i) => custom_symbols.chars().nth(i).unwrap(),
                None => '*',
            })
            .collect();
        assert_eq!(custom_encoded, translated);
        assert_eq!(custom.decode(&custom_encoded).unwrap(), data);
    }
}

#[test]
fn test_random_custom_alphabets_round_trip() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut pool: Vec<char> = ('!'..='~').collect();
    for _ in 0..20 {
        pool.shuffle(&mut rng);
        let alphabet = Alphabet::new(pool[..32].iter().copied(), Some(pool[32])).unwrap();
        let codec = Base32::new(alphabet);
        let mut data = vec![0u8; rng.random_range(0..=48)];
        rng.fill(&mut data[..]);
        assert_eq!(codec.decode(&codec.encode(&data)).unwrap(), data);
    }
}

#[test]
fn test_alphabet_validation() {
    let symbols: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567".chars().collect();

    assert_eq!(
        Alphabet::new(symbols[..31].iter().copied(), None),
        Err(ConfigurationError::WrongSymbolCount { count: 31 })
    );
    assert_eq!(
        Alphabet::new(symbols.iter().copied().chain(['8']), None),
        Err(ConfigurationError::WrongSymbolCount { count: 33 })
    );

    let mut duplicated = symbols.clone();
    duplicated[5] = 'B';
    assert_eq!(
        Alphabet::new(duplicated, None),
        Err(ConfigurationError::DuplicateSymbol { symbol: 'B' })
    );

    assert_eq!(
        Alphabet::new(symbols.iter().copied(), Some('7')),
        Err(ConfigurationError::PaddingCollision { padding: '7' })
    );
}

#[test]
fn test_codec_shared_across_threads() {
    let codec = Base32::rfc4648();
    std::thread::scope(|s| {
        for t in 0..4u8 {
            let codec = codec.clone();
            s.spawn(move || {
                for len in 0..64 {
                    let data: Vec<u8> = sample(len).into_iter().map(|b| b ^ t).collect();
                    assert_eq!(codec.decode(&codec.encode(&data)).unwrap(), data);
                }
            });
        }
    });
}
