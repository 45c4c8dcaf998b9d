// 📌 Codec Constants - One place for every fixed number of the reference format
//
// These values are baked into references already issued to students, so the
// bank validates against them. Changing any of them breaks compatibility.

/// Institution ("plantel") code embedded after the plant year
pub const INSTITUTION_CODE: u32 = 2716;

/// Year zero of the compressed date encoding
pub const BASE_YEAR: i32 = 2014;

/// Days per compressed year (12 months × 31 days)
pub const DAYS_PER_YEAR: i64 = 372;

/// Days per compressed month
pub const DAYS_PER_MONTH: i64 = 31;

/// Minimum width of the compressed date token
pub const COMPRESSED_DATE_WIDTH: usize = 4;

/// Weights applied right to left over the amount digits
pub const AMOUNT_WEIGHTS: [u32; 3] = [7, 3, 1];

/// Weights applied right to left over the mapped reference digits
pub const REFERENCE_WEIGHTS: [u32; 5] = [11, 13, 17, 19, 23];

/// Modulus of the reference checksum (result is `sum % 97 + 1`)
pub const REFERENCE_MODULUS: u32 = 97;

/// Digit placed between the compressed amount and the checksum
pub const SPACER_DIGIT: char = '0';

/// Concept codes charged per subject (intersemester / semester advisory)
pub const ADVISORY_CONCEPTS: [&str; 2] = ["04", "05"];

/// Period label for February through July
pub const PERIOD_FEB_JUL: &str = "FEBJUL";

/// Period label for August through January
pub const PERIOD_AGO_DIC: &str = "AGODIC";

/// Letter → digit table, A through Z.
///
/// The third row starts at 2 (S=2), not 1. Issued references depend on it.
pub const LETTER_VALUES: [u8; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // A-I
    1, 2, 3, 4, 5, 6, 7, 8, 9, // J-R
    2, 3, 4, 5, 6, 7, 8, 9, // S-Z
];
