//! Short identifier generation.
//!
//! Identifiers are derived from a time-based seed (Unix seconds) packed
//! together with a per-process sequence number and encoded in base62, so
//! they are short, URL-safe and purely alphanumeric.

use std::sync::atomic::{AtomicU16, Ordering};

use crate::error::AppError;

/// Base62 alphabet, `0-9A-Za-z`.
const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Low bits of the packed value reserved for the sequence number.
const SEQUENCE_BITS: u32 = 16;

/// Produces short identifiers from an integer seed.
#[cfg_attr(test, mockall::automock)]
pub trait GenerateShortId: Send + Sync {
    /// Encodes `seed` into a new identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the seed cannot be encoded.
    fn generate(&self, seed: i64) -> Result<String, AppError>;
}

/// Default generator: `base62(seed << 16 | sequence)`.
///
/// The sequence counter wraps and starts at a random point, so ids minted
/// in the same second by one process differ and separate processes are
/// unlikely to line up. Collisions across processes within one second are
/// still possible and are not retried.
#[derive(Debug)]
pub struct TimestampIdGenerator {
    sequence: AtomicU16,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::with_sequence_start(rand::random())
    }

    /// Creates a generator whose sequence starts at a known value.
    pub fn with_sequence_start(start: u16) -> Self {
        Self {
            sequence: AtomicU16::new(start),
        }
    }
}

impl Default for TimestampIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerateShortId for TimestampIdGenerator {
    fn generate(&self, seed: i64) -> Result<String, AppError> {
        let seed = u64::try_from(seed).map_err(|_| {
            tracing::error!(seed, "Cannot encode negative seed");
            AppError::internal()
        })?;

        if seed >> (u64::BITS - SEQUENCE_BITS) != 0 {
            tracing::error!(seed, "Seed too large to encode");
            return Err(AppError::internal());
        }

        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        Ok(encode_base62((seed << SEQUENCE_BITS) | u64::from(sequence)))
    }
}

fn encode_base62(mut n: u64) -> String {
    if n == 0 {
        return (BASE62_ALPHABET[0] as char).to_string();
    }

    let mut digits = Vec::with_capacity(11);
    while n > 0 {
        digits.push(BASE62_ALPHABET[(n % 62) as usize]);
        n /= 62;
    }

    digits.iter().rev().map(|&b| b as char).collect()
}
