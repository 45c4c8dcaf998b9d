// 💰 Amount Compressor - payment amount → one check digit
//
// Amounts are held as integer cents so "2520.00" never drifts through binary
// floating point before the weighted sum.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::constants::AMOUNT_WEIGHTS;
use crate::error::{ReferenceError, ReferenceResult};

/// Non-negative monetary amount with at most two decimals, stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    cents: u64,
}

impl Amount {
    pub const ZERO: Amount = Amount { cents: 0 };

    pub fn from_cents(cents: u64) -> Self {
        Amount { cents }
    }

    /// Whole pesos plus cents, e.g. `Amount::new(2520, 0)`.
    pub fn new(whole: u64, cents: u8) -> ReferenceResult<Self> {
        if cents > 99 {
            return Err(ReferenceError::InvalidAmount(format!(
                "cents must be 0-99, got {}",
                cents
            )));
        }
        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents as u64))
            .map(Amount::from_cents)
            .ok_or_else(|| ReferenceError::InvalidAmount("amount too large".to_string()))
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    pub fn whole(&self) -> u64 {
        self.cents / 100
    }

    pub fn fraction(&self) -> u8 {
        (self.cents % 100) as u8
    }

    /// Integer digits followed by the two cent digits: 2520.00 → "252000".
    pub fn digit_string(&self) -> String {
        format!("{}{:02}", self.whole(), self.fraction())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.whole(), self.fraction())
    }
}

impl FromStr for Amount {
    type Err = ReferenceError;

    /// Accepts `2520`, `2520.5`, `2520.00` and `2,520.00`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();

        if cleaned.is_empty() {
            return Err(ReferenceError::InvalidAmount("empty amount".to_string()));
        }
        if cleaned.starts_with('-') {
            return Err(ReferenceError::InvalidAmount(format!(
                "negative amount {}",
                raw.trim()
            )));
        }

        let (whole_str, frac_str) = match cleaned.split_once('.') {
            Some((w, f)) => (w, f),
            None => (cleaned.as_str(), ""),
        };

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if whole_str.is_empty() || !all_digits(whole_str) || !all_digits(frac_str) {
            return Err(ReferenceError::InvalidAmount(format!(
                "'{}' is not a number",
                raw.trim()
            )));
        }
        if frac_str.len() > 2 {
            return Err(ReferenceError::InvalidAmount(format!(
                "'{}' has more than two decimals",
                raw.trim()
            )));
        }

        let whole: u64 = whole_str
            .parse()
            .map_err(|_| ReferenceError::InvalidAmount("amount too large".to_string()))?;
        let cents: u8 = match frac_str.len() {
            0 => 0,
            1 => frac_str.parse::<u8>().unwrap_or(0) * 10,
            _ => frac_str.parse::<u8>().unwrap_or(0),
        };

        Amount::new(whole, cents)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawAmount {
            Text(String),
            Number(serde_json::Number),
        }

        let text = match RawAmount::deserialize(deserializer)? {
            RawAmount::Text(s) => s,
            RawAmount::Number(n) => n.to_string(),
        };
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Compress an amount into a single digit.
///
/// The digit string (integer part + two cent digits) is weighted right to
/// left by 7, 3, 1 repeating, summed, and reduced mod 10.
pub fn compress_amount(amount: Amount) -> String {
    let sum: u32 = amount
        .digit_string()
        .bytes()
        .rev()
        .zip(AMOUNT_WEIGHTS.iter().cycle())
        .map(|(b, w)| (b - b'0') as u32 * w)
        .sum();

    (sum % 10).to_string()
}
