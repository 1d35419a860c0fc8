use log::{debug, warn};

use crate::rules::PLATE_DIGITS;
use crate::utils::errors::UtilsError;

/// Validate a plate string and split it into its digits.
///
/// # Errors
///
/// Returns an error if the string is empty, contains any non-ASCII-digit
/// characters, or is not exactly four digits long.
pub fn validate_plate(digit_string: &str) -> Result<[u8; PLATE_DIGITS], UtilsError> {
    debug!("Validating plate string: '{}'", digit_string);

    if digit_string.is_empty() {
        warn!("Digit string is empty");
        return Err(UtilsError::EmptyDigitString);
    }

    if !digit_string.chars().all(|c| c.is_ascii_digit()) {
        warn!(
            "Digit string contains non-digit characters: '{}'",
            digit_string
        );
        return Err(UtilsError::InvalidDigitString(digit_string.to_string()));
    }

    if digit_string.len() != PLATE_DIGITS {
        warn!(
            "Digit string has wrong length {}: '{}'",
            digit_string.len(),
            digit_string
        );
        return Err(UtilsError::WrongLength {
            expected: PLATE_DIGITS,
            actual: digit_string.len(),
        });
    }

    let mut digits = [0u8; PLATE_DIGITS];
    for (slot, byte) in digits.iter_mut().zip(digit_string.bytes()) {
        *slot = byte - b'0';
    }

    debug!("Plate string validation successful");
    Ok(digits)
}
