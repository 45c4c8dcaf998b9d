// 🔤 Character Mapper - alphanumeric character → single check digit
//
// Digits map to themselves, letters go through LETTER_VALUES. Anything else
// contributes 0; the checksum reports those so bad data shows up in logs.

use crate::constants::LETTER_VALUES;

/// Map a character to its digit, or `None` when it is not alphanumeric ASCII.
pub fn try_map_char(c: char) -> Option<u8> {
    if let Some(d) = c.to_digit(10) {
        return Some(d as u8);
    }

    let upper = c.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some(LETTER_VALUES[(upper as u8 - b'A') as usize])
    } else {
        None
    }
}

/// Map a character to its digit. Unrecognized characters map to 0.
pub fn map_char(c: char) -> u8 {
    try_map_char(c).unwrap_or(0)
}
