// 🔐 Reference Checksum - two-digit verifier over an alphanumeric string
//
// Each character is mapped to a digit, weighted right to left by
// 11, 13, 17, 19, 23 (repeating), summed, and reduced to `sum % 97 + 1`.
// The result is always "01".."97".

use serde::{Deserialize, Serialize};

use crate::constants::{REFERENCE_MODULUS, REFERENCE_WEIGHTS};
use crate::mapper::try_map_char;

/// Width of the checksum suffix on a full reference
pub const CHECKSUM_WIDTH: usize = 2;

/// A character the mapper could not translate; it contributed 0 to the sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmappedChar {
    /// Character index (not byte index) in the input
    pub position: usize,
    pub character: char,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecksumReport {
    pub checksum: String,
    pub weighted_sum: u64,
    pub unmapped: Vec<UnmappedChar>,
}

impl ChecksumReport {
    pub fn is_clean(&self) -> bool {
        self.unmapped.is_empty()
    }
}

fn weighted_sum_with<F>(s: &str, mut on_unmapped: F) -> u64
where
    F: FnMut(UnmappedChar),
{
    let len = s.chars().count();

    s.chars()
        .rev()
        .enumerate()
        .zip(REFERENCE_WEIGHTS.iter().cycle())
        .map(|((from_end, c), &w)| {
            let digit = try_map_char(c).unwrap_or_else(|| {
                on_unmapped(UnmappedChar {
                    position: len - 1 - from_end,
                    character: c,
                });
                0
            });
            digit as u64 * w as u64
        })
        .sum()
}

/// Compute the checksum, calling `on_unmapped` for every character the
/// mapper does not recognize.
pub fn checksum_with<F>(s: &str, on_unmapped: F) -> String
where
    F: FnMut(UnmappedChar),
{
    format_checksum(weighted_sum_with(s, on_unmapped))
}

/// Compute the checksum of `s`. Unrecognized characters are logged.
pub fn checksum(s: &str) -> String {
    checksum_with(s, |u| {
        tracing::warn!(
            position = u.position,
            character = %u.character,
            "unrecognized character in reference, counted as 0"
        );
    })
}

/// Compute the checksum and collect every unrecognized character.
pub fn checksum_report(s: &str) -> ChecksumReport {
    let mut unmapped = Vec::new();
    let weighted_sum = weighted_sum_with(s, |u| unmapped.push(u));

    ChecksumReport {
        checksum: format_checksum(weighted_sum),
        weighted_sum,
        unmapped,
    }
}

fn format_checksum(sum: u64) -> String {
    format!(
        "{:0width$}",
        sum % REFERENCE_MODULUS as u64 + 1,
        width = CHECKSUM_WIDTH
    )
}

/// Split a full reference into `(base, checksum)`.
///
/// The checksum is the last two characters, not bytes. Returns `None` when
/// the reference is shorter than four characters.
pub fn split_reference(full: &str) -> Option<(&str, &str)> {
    let trimmed = full.trim();
    if trimmed.chars().count() < CHECKSUM_WIDTH * 2 {
        return None;
    }
    let (at, _) = trimmed.char_indices().rev().nth(CHECKSUM_WIDTH - 1)?;
    Some(trimmed.split_at(at))
}

/// Check a stored reference: its last two characters must equal the
/// checksum of everything before them.
pub fn verify_reference(full: &str) -> bool {
    match split_reference(full) {
        Some((base, digits)) => checksum(base) == digits,
        None => false,
    }
}
