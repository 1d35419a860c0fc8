use crate::utils::{UtilsError, validate_plate};

#[test]
fn test_validate_plate_valid() {
    assert_eq!(validate_plate("1234"), Ok([1, 2, 3, 4]));
    assert_eq!(validate_plate("0000"), Ok([0, 0, 0, 0]));
    assert_eq!(validate_plate("9876"), Ok([9, 8, 7, 6]));
}

#[test]
fn test_validate_plate_rejects_empty() {
    assert_eq!(validate_plate(""), Err(UtilsError::EmptyDigitString));
}

#[test]
fn test_validate_plate_rejects_non_digits() {
    assert!(matches!(
        validate_plate("12a4"),
        Err(UtilsError::InvalidDigitString(_))
    ));
    assert!(matches!(
        validate_plate("12.4"),
        Err(UtilsError::InvalidDigitString(_))
    ));
    assert!(matches!(
        validate_plate("-123"),
        Err(UtilsError::InvalidDigitString(_))
    ));
}

#[test]
fn test_validate_plate_rejects_wrong_length() {
    assert_eq!(
        validate_plate("123"),
        Err(UtilsError::WrongLength {
            expected: 4,
            actual: 3
        })
    );
    assert_eq!(
        validate_plate("12345"),
        Err(UtilsError::WrongLength {
            expected: 4,
            actual: 5
        })
    );
}
