// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

/// All candidate characters, in fixed order:
/// decimal digits, then lowercase letters, then uppercase letters.
const SUPERSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Characters removed from the superset.
///
/// `0` is removed so that an identifier can never be misread as a number
/// with leading zeros.
/// `I` is removed because it renders like `l` in many fonts.
///
/// The removal set is exactly these two characters.
/// `O` and `l` deliberately stay in the alphabet.
/// Widening the set would shrink the alphabet and break the
/// cardinality sizing of the identifier length.
const EXCLUDED: &[u8] = b"0I";

/// Number of characters in the identifier alphabet.
pub const ALPHABET_LEN: usize = SUPERSET.len() - EXCLUDED.len();

/// The identifier alphabet: `SUPERSET` minus `EXCLUDED`, in superset order.
pub const ALPHABET: [u8; ALPHABET_LEN] = filter_superset();

const fn is_excluded(c: u8) -> bool {
    let mut i = 0;
    while i < EXCLUDED.len() {
        if EXCLUDED[i] == c {
            return true;
        }
        i += 1;
    }
    false
}

/// Build the alphabet at compile time.
///
/// Panics the build if `EXCLUDED` is not a subset of `SUPERSET`.
const fn filter_superset() -> [u8; ALPHABET_LEN] {
    let mut alphabet = [0; ALPHABET_LEN];
    let mut n = 0;
    let mut i = 0;
    while i < SUPERSET.len() {
        if !is_excluded(SUPERSET[i]) {
            alphabet[n] = SUPERSET[i];
            n += 1;
        }
        i += 1;
    }
    assert!(n == ALPHABET_LEN);
    alphabet
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_alphabet_content() {
        assert_eq!(ALPHABET.len(), 60);
        assert_eq!(ALPHABET.len(), ALPHABET_LEN);
        assert_eq!(
            ALPHABET.as_slice(),
            b"123456789abcdefghijklmnopqrstuvwxyzABCDEFGHJKLMNOPQRSTUVWXYZ"
        );
    }

    #[test]
    fn test_alphabet_has_no_duplicates() {
        for (i, a) in ALPHABET.iter().enumerate() {
            for b in &ALPHABET[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_no_leading_zero_confusion() {
        assert!(!ALPHABET.contains(&b'0'));
    }

    #[test]
    fn test_no_look_alike_pairs() {
        // Only one character of each confusable pair may be present.
        assert!(!(ALPHABET.contains(&b'I') && ALPHABET.contains(&b'l')));
        assert!(!(ALPHABET.contains(&b'0') && ALPHABET.contains(&b'O')));
        // The removal set is exactly { '0', 'I' }. The counterparts stay.
        assert!(ALPHABET.contains(&b'l'));
        assert!(ALPHABET.contains(&b'O'));
    }
}

// vim: ts=4 sw=4 expandtab
