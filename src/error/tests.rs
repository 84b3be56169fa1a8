use super::*;

#[test]
fn test_display_formatting() {
    let err = Error::Length {
        context: "AES block",
        expected: 16,
        actual: 15,
    };
    assert_eq!(
        err.to_string(),
        "Invalid length for AES block: expected 16, got 15"
    );

    let err = Error::KeyLength { actual: 17 };
    assert_eq!(
        err.to_string(),
        "Invalid key length 17: expected 16, 24, or 32 bytes"
    );

    let err = Error::RoundKey {
        round: 11,
        limit: 11,
    };
    assert_eq!(
        err.to_string(),
        "Round key index 11 out of range: schedule holds 11 round keys"
    );
}

#[test]
fn test_validation_functions() {
    assert!(validate::length("buffer", 16, 16).is_ok());
    let err = validate::length("buffer", 15, 16).unwrap_err();
    match err {
        Error::Length {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "buffer");
            assert_eq!(expected, 16);
            assert_eq!(actual, 15);
        }
        _ => panic!("Expected Length error"),
    }

    assert!(validate::block_aligned("message", 48, 16).is_ok());
    assert!(validate::block_aligned("message", 0, 16).is_ok());
    let err = validate::block_aligned("message", 17, 16).unwrap_err();
    match err {
        Error::Length {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "message");
            assert_eq!(expected, 32);
            assert_eq!(actual, 17);
        }
        _ => panic!("Expected Length error"),
    }
}
