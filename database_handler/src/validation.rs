use lazy_static::lazy_static;
use rand::{Rng, SeedableRng};
use regex::Regex;

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[\w.-]+@[\w.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid");
}

/// Checks local@domain.tld shape. Does not attempt full RFC 5322.
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Contact numbers are exactly 10 ASCII digits.
pub fn validate_contact_number(contact: &str) -> bool {
    contact.len() == 10 && contact.chars().all(|c| c.is_ascii_digit())
}

/// At least 8 characters, one digit and one uppercase letter.
pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_uppercase())
}

/// Draws a 10-digit account number uniformly from
/// [1000000000, 9999999999]. Uniqueness against existing rows is the
/// store's problem, not ours.
pub fn generate_account_number() -> String {
    let mut rng = rand::rngs::StdRng::from_entropy();
    rng.gen_range(1_000_000_000u64, 10_000_000_000u64).to_string()
}

#[cfg(test)]
mod validation_test {
    use super::*;

    #[test]
    fn contact_number_accepts_ten_digits() {
        assert!(validate_contact_number("0123456789"));
        assert!(validate_contact_number("9999999999"));
    }

    #[test]
    fn contact_number_rejects_wrong_shape() {
        assert!(!validate_contact_number("012345678"));
        assert!(!validate_contact_number("01234567890"));
        assert!(!validate_contact_number("01234abcde"));
        assert!(!validate_contact_number(""));
        assert!(!validate_contact_number("0123 56789"));
    }

    #[test]
    fn password_requires_all_three_conditions() {
        assert!(validate_password("Passw0rd"));
        // no digit, no uppercase
        assert!(!validate_password("password"));
        // too short
        assert!(!validate_password("PASS1"));
        // no uppercase
        assert!(!validate_password("passw0rdlong"));
        // no digit
        assert!(!validate_password("Passwordlong"));
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("a.b-c@d.com"));
        assert!(validate_email("test@example.co.uk"));
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("missing@tld."));
        assert!(!validate_email("@example.com"));
    }

    #[test]
    fn account_numbers_are_ten_decimal_digits() {
        for _ in 0..200 {
            let number = generate_account_number();
            assert_eq!(number.len(), 10);
            let value: u64 = number.parse().expect("account number is decimal");
            assert!(value >= 1_000_000_000 && value <= 9_999_999_999);
        }
    }
}
