// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

//! # Human friendly random identifiers
//!
//! An identifier is 28 characters long.
//! Each character is drawn independently and uniformly from a fixed
//! 60 character alphabet: the decimal digits and the latin letters,
//! minus `0` and `I`.
//!
//! The identifier space is `60^28`, which is bigger than the `16^40`
//! space of a 40 hex digit object id (for example a git commit hash).
//! 27 characters would not be enough for that.
//!
//! All randomness is drawn from the operating system's secure
//! entropy source. A failed entropy read is returned as an error.
//! Identifiers are not coordinated in any way. Collisions are
//! possible, but astronomically unlikely.

#![forbid(unsafe_code)]

mod alphabet;
mod random;

pub use alphabet::{ALPHABET, ALPHABET_LEN};
pub use random::{OsRandom, RandomIntSource};

use anyhow as ah;

/// Number of characters in a generated identifier.
pub const ID_LEN: usize = 28;

/// Generate one random identifier, drawing from the given integer source.
///
/// Draws [`ID_LEN`] integers in `[0, ALPHABET_LEN)` and maps each one
/// through the [`ALPHABET`], in draw order.
pub fn generate_id_with<R: RandomIntSource>(rng: &mut R) -> ah::Result<String> {
    let mut id = String::with_capacity(ID_LEN);
    for _ in 0..ID_LEN {
        let i = rng.random_int(0, ALPHABET_LEN as u32)?;
        id.push(ALPHABET[i as usize] as char);
    }
    Ok(id)
}

/// Generate one random identifier from the operating system entropy source.
pub fn generate_id() -> ah::Result<String> {
    generate_id_with(&mut OsRandom)
}


// vim: ts=4 sw=4 expandtab
