//! Property tests for phone validation.

use contact_directory::{is_valid_phone, PhoneNumber, ValidationError};
use proptest::prelude::*;

/// A phone in one of the accepted shapes, built from ten ASCII digits.
fn formatted_phone() -> impl Strategy<Value = String> {
    (
        "[0-9]{3}",
        "[0-9]{3}",
        "[0-9]{4}",
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(area, exchange, line, parens, dash1, dash2)| {
            let area = if parens {
                format!("({})", area)
            } else {
                area
            };
            format!(
                "{}{}{}{}{}",
                area,
                if dash1 { "-" } else { "" },
                exchange,
                if dash2 { "-" } else { "" },
                line
            )
        })
}

#[test]
fn test_listed_shapes() {
    for ok in ["1234567890", "123-456-7890", "(123)456-7890", "(123)-456-7890"] {
        assert!(is_valid_phone(ok), "{} should be accepted", ok);
    }
    for bad in ["12345", "abcdefghij"] {
        assert!(!is_valid_phone(bad), "{} should be rejected", bad);
    }
}

#[test]
fn test_non_latin_decimal_digits_accepted() {
    for ok in ["١٢٣٤٥٦٧٨٩٠", "१२३-४५६-७८९०"] {
        assert!(is_valid_phone(ok), "{} should be accepted", ok);
        assert_eq!(PhoneNumber::new(ok).unwrap().as_str(), ok);
    }
}

proptest! {
    /// Every string the validator rejects is refused by the constructor.
    #[test]
    fn prop_invalid_strings_are_rejected(candidate in ".{0,20}") {
        prop_assume!(!is_valid_phone(&candidate));
        let expected = Err(ValidationError::InvalidPhone(candidate.clone()));
        prop_assert_eq!(PhoneNumber::new(candidate), expected);
    }

    /// Valid shapes construct and keep their exact text.
    #[test]
    fn prop_valid_phone_keeps_value(phone in formatted_phone()) {
        let created = PhoneNumber::new(phone.clone());
        prop_assert!(created.is_ok());
        let created = created.unwrap();
        prop_assert_eq!(created.as_str(), phone.as_str());
        prop_assert_eq!(created.digits_only().len(), 10);
    }

    /// Text after a valid number does not affect acceptance.
    #[test]
    fn prop_trailing_text_is_ignored(phone in formatted_phone(), tail in ".{0,10}") {
        let candidate = format!("{}{}", phone, tail);
        prop_assert!(is_valid_phone(&candidate));
    }

    /// Fewer than ten digits is never a phone.
    #[test]
    fn prop_short_digit_runs_rejected(digits in "[0-9]{0,9}") {
        prop_assert!(!is_valid_phone(&digits));
    }
}
