//! BIP-39 mnemonic service.
//!
//! Generation, validation and seed stretching for recovery phrases, plus
//! expansion of abbreviated words.
//!
//! # Example
//!
//! ```
//! use tessera::mnemonic;
//!
//! let phrase = "aban aban aban aban aban aban aban aban aban aban aban abou";
//! let expanded = mnemonic::expand(phrase).unwrap();
//! assert!(mnemonic::validate(&expanded));
//! ```

use bip39::{Language, Mnemonic};
use zeroize::Zeroizing;

use crate::{Error, Result};

/// Word count used when the caller has no preference.
pub const DEFAULT_WORD_COUNT: usize = 12;

/// Word counts accepted for new phrases.
pub const WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Length of the BIP-39 seed in bytes.
pub const SEED_LEN: usize = 64;

/// Generate a fresh phrase from the thread-local CSPRNG.
///
/// # Errors
///
/// Returns [`Error::InvalidWordCount`] for unsupported lengths.
pub fn generate(word_count: usize) -> Result<Mnemonic> {
    if !WORD_COUNTS.contains(&word_count) {
        return Err(Error::InvalidWordCount(word_count));
    }
    Ok(Mnemonic::generate_in(Language::English, word_count)?)
}

/// Parse and validate a phrase against the English wordlist.
///
/// Leading and trailing whitespace is ignored, as are repeated spaces
/// between words.
///
/// # Errors
///
/// Returns [`Error::InvalidMnemonic`] on a bad word count, unknown word or
/// checksum mismatch.
pub fn parse(candidate: &str) -> Result<Mnemonic> {
    Ok(Mnemonic::parse_in_normalized(Language::English, candidate.trim())?)
}

/// Check word count and checksum. Never fails.
pub fn validate(candidate: &str) -> bool {
    parse(candidate).is_ok()
}

/// Stretch a phrase into its 64-byte seed (PBKDF2-HMAC-SHA512, 2048 rounds).
///
/// An empty passphrase is the same as no passphrase.
pub fn to_seed(mnemonic: &Mnemonic, passphrase: &str) -> Zeroizing<[u8; SEED_LEN]> {
    Zeroizing::new(mnemonic.to_seed(passphrase))
}

/// Expand abbreviated words to their full BIP-39 form.
///
/// Each whitespace-separated token is kept if it is a wordlist entry,
/// otherwise it must be the prefix of exactly one word. The English list
/// is unique at four characters, so any four-letter prefix works.
///
/// # Errors
///
/// Returns [`Error::UnknownWord`] if a token matches nothing and
/// [`Error::AmbiguousWord`] if it matches several words.
pub fn expand(phrase: &str) -> Result<String> {
    let words = Language::English.word_list();
    let expanded = phrase
        .split_whitespace()
        .map(|token| resolve_token(words, token))
        .collect::<Result<Vec<_>>>()?;
    Ok(expanded.join(" "))
}

fn resolve_token(words: &'static [&'static str; 2048], token: &str) -> Result<&'static str> {
    // The wordlist is sorted, so exact matches are a binary search away.
    if let Ok(pos) = words.binary_search(&token) {
        return Ok(words[pos]);
    }

    let candidates: Vec<&str> = words
        .iter()
        .copied()
        .filter(|word| word.starts_with(token))
        .collect();

    match candidates.as_slice() {
        [] => Err(Error::UnknownWord(token.into())),
        [word] => Ok(word),
        _ => Err(Error::AmbiguousWord {
            prefix: token.into(),
            candidates: candidates.iter().map(|w| (*w).to_owned()).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn generate_has_requested_length() {
        for count in WORD_COUNTS {
            let mnemonic = generate(count).unwrap();
            assert_eq!(mnemonic.word_count(), count);
            assert!(validate(&mnemonic.to_string()));
        }
    }

    #[test]
    fn generate_rejects_odd_lengths() {
        assert_eq!(generate(13).unwrap_err(), Error::InvalidWordCount(13));
        assert_eq!(generate(0).unwrap_err(), Error::InvalidWordCount(0));
    }

    #[test]
    fn generated_phrases_differ() {
        let a = generate(DEFAULT_WORD_COUNT).unwrap();
        let b = generate(DEFAULT_WORD_COUNT).unwrap();
        assert_ne!(a.to_string(), b.to_string());
    }

    #[test]
    fn validate_accepts_known_phrase() {
        assert!(validate(TEST_MNEMONIC));
        assert!(validate(&format!("  {TEST_MNEMONIC}\n")));
    }

    #[test]
    fn validate_rejects_bad_checksum() {
        // Last word swapped, checksum no longer matches.
        let bad = TEST_MNEMONIC.replace("about", "abandon");
        assert!(!validate(&bad));
        assert!(matches!(
            parse(&bad),
            Err(Error::InvalidMnemonic(bip39::Error::InvalidChecksum))
        ));
    }

    #[test]
    fn validate_rejects_malformed_input() {
        assert!(!validate(""));
        assert!(!validate("abandon abandon about"));
        assert!(!validate("not a real phrase at all just twelve words of english text ok"));
        assert!(!validate("💥"));
    }

    #[test]
    fn seed_matches_bip39_vector() {
        let mnemonic = parse(TEST_MNEMONIC).unwrap();
        let seed = to_seed(&mnemonic, "");
        assert_eq!(
            hex::encode(seed.as_slice()),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1\
             9a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
    }

    #[test]
    fn passphrase_changes_seed() {
        let mnemonic = parse(TEST_MNEMONIC).unwrap();
        assert_ne!(*to_seed(&mnemonic, ""), *to_seed(&mnemonic, "TREZOR"));
    }

    #[test]
    fn expand_prefixes() {
        let abbreviated = "aban aban aban aban aban aban aban aban aban aban aban abou";
        assert_eq!(expand(abbreviated).unwrap(), TEST_MNEMONIC);
        assert_eq!(
            expand("abil acti addr admi wall wris").unwrap(),
            "ability action address admit wall wrist"
        );
    }

    #[test]
    fn expand_keeps_short_exact_words() {
        assert_eq!(expand("zoo art ice").unwrap(), "zoo art ice");
    }

    #[test]
    fn expand_reports_unknown_and_ambiguous() {
        assert_eq!(
            expand("aban zzzz").unwrap_err(),
            Error::UnknownWord("zzzz".into())
        );
        assert!(matches!(
            expand("ab"),
            Err(Error::AmbiguousWord { ref prefix, ref candidates })
                if prefix == "ab" && candidates.len() > 1
        ));
        // Unique even below four characters.
        assert_eq!(expand("aba").unwrap(), "abandon");
    }
}
