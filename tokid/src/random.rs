// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use anyhow::{self as ah, format_err as err};

/// A uniform random integer source.
///
/// Every call returns a value in the half-open range `[min, max)`,
/// uniformly distributed over that range.
pub trait RandomIntSource {
    fn random_int(&mut self, min: u32, max: u32) -> ah::Result<u32>;
}

/// The operating system's secure entropy source.
///
/// Stateless and reentrant. An entropy read failure is propagated
/// to the caller. There is no retry and no fallback to a
/// non-cryptographic generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomIntSource for OsRandom {
    fn random_int(&mut self, min: u32, max: u32) -> ah::Result<u32> {
        if min >= max {
            return Err(err!("random_int: Invalid range: [{min}, {max})"));
        }
        let range = u64::from(max - min);

        // Only accept draws below the largest multiple of the range,
        // so that the modulo reduction stays unbiased.
        let limit = ((1_u64 << 32) / range) * range;

        loop {
            // Get secure random bytes from the operating system.
            let mut buf = [0_u8; 4];
            getrandom::fill(&mut buf).map_err(|e| {
                err!("Failed to read secure random bytes from the operating system: {e}")
            })?;

            let value = u64::from(u32::from_be_bytes(buf));
            if value < limit {
                return Ok(min + (value % range) as u32);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_draws_stay_in_range() {
        let mut rng = OsRandom;
        for _ in 0..1000 {
            let v = rng.random_int(0, 60).unwrap();
            assert!(v < 60);
            let v = rng.random_int(10, 12).unwrap();
            assert!((10..12).contains(&v));
        }
    }

    #[test]
    fn test_range_of_one() {
        assert_eq!(OsRandom.random_int(7, 8).unwrap(), 7);
    }

    #[test]
    fn test_invalid_range() {
        assert!(OsRandom.random_int(5, 5).is_err());
        assert!(OsRandom.random_int(6, 5).is_err());
    }
}

// vim: ts=4 sw=4 expandtab
