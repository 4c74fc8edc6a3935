//! Deterministic parameter derivation.
//!
//! Every numeric parameter in a booklet comes from the student identifier
//! and a short label, never from a random source, so re-running a roster
//! always reproduces the same papers. The identifier and label are
//! concatenated, hashed with MD5, and the digest's hex form is consumed
//! two characters at a time as base-32 integers. Both the digest algorithm
//! and the radix are load-bearing: changing either regenerates every
//! student's paper.

use md5::{Digest, Md5};

use crate::error::{MillError, Result};

/// A 128-bit digest renders as 32 hex characters, so one seed yields at
/// most 16 two-character chunks.
pub const MAX_VALUES_PER_SEED: usize = 16;

/// Lowercase hex rendering of the MD5 digest of `identifier ++ label`.
fn seed_hex(identifier: &str, label: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(identifier.as_bytes());
    hasher.update(label.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Derives `count` integers in `low..=high` from the seed for
/// `identifier` and `label`.
///
/// The i-th value consumes hex characters `2i..2i+2` of the digest,
/// parsed in base 32 and folded into the range by modulo. Values beyond
/// the 16th have no digest material left and are rejected rather than
/// silently recycled.
pub fn derive_values(
    identifier: &str,
    label: &str,
    count: usize,
    low: i64,
    high: i64,
) -> Result<Vec<i64>> {
    if low > high {
        return Err(MillError::InvalidRange {
            label: label.to_string(),
            low,
            high,
        });
    }
    if count > MAX_VALUES_PER_SEED {
        return Err(MillError::InsufficientSeedEntropy {
            label: label.to_string(),
            requested: count,
        });
    }

    let hex = seed_hex(identifier, label);
    let span = high - low + 1;
    let mut values = Vec::with_capacity(count);
    for i in 0..count {
        let chunk = &hex[2 * i..2 * i + 2];
        // Hex digits are a subset of base-32 digits, so this cannot fail.
        let parsed = i64::from_str_radix(chunk, 32).expect("hex pair parses in base 32");
        values.push(parsed % span + low);
    }
    Ok(values)
}

/// Derives a single integer in `low..=high`, consuming only the first
/// digest chunk.
pub fn derive_value(identifier: &str, label: &str, low: i64, high: i64) -> Result<i64> {
    Ok(derive_values(identifier, label, 1, low, high)?[0])
}
