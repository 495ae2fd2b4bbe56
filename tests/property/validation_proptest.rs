//! Property-based tests for form validation and the read counter
//!
//! Uses proptest to generate random inputs and verify properties

use proptest::prelude::*;

use cosmos_explorer::egui_app::ReadCounter;
use cosmos_explorer::shared::validation::{
    validate_confirm_password, validate_email, validate_password, validate_register_email,
    validate_register_password,
};

proptest! {
    #[test]
    fn test_well_formed_email_accepted(
        local in "[a-z0-9._]{1,12}",
        domain in "[a-z0-9]{1,12}",
        tld in "[a-z]{2,6}",
    ) {
        let email = format!("{}@{}.{}", local, domain, tld);
        prop_assert_eq!(validate_email(&email), "");
        prop_assert_eq!(validate_register_email(&email), "");
    }

    #[test]
    fn test_email_without_at_rejected(text in "[a-z0-9.]{0,24}") {
        prop_assert!(!validate_email(&text).is_empty());
        prop_assert!(!validate_register_email(&text).is_empty());
    }

    #[test]
    fn test_email_without_domain_dot_rejected(local in "[a-z0-9]{1,12}", domain in "[a-z0-9]{1,12}") {
        let email = format!("{}@{}", local, domain);
        prop_assert!(!validate_email(&email).is_empty());
        prop_assert!(!validate_register_email(&email).is_empty());
    }

    #[test]
    fn test_short_password_rejected(password in "[A-Za-z0-9]{0,5}") {
        prop_assert!(!validate_password(&password).is_empty());
        prop_assert!(!validate_register_password(&password).is_empty());
    }

    #[test]
    fn test_long_password_accepted_on_login(password in "[a-z]{6,32}") {
        prop_assert_eq!(validate_password(&password), "");
    }

    #[test]
    fn test_register_password_needs_upper_and_digit(
        lower in "[a-z]{6,16}",
        upper in "[A-Z]",
        digit in "[0-9]",
    ) {
        let with_upper = format!("{}{}", lower, upper);
        let with_digit = format!("{}{}", lower, digit);
        let complete = format!("{}{}{}", lower, upper, digit);

        prop_assert!(!validate_register_password(&lower).is_empty());
        prop_assert!(!validate_register_password(&with_upper).is_empty());
        prop_assert!(!validate_register_password(&with_digit).is_empty());
        prop_assert_eq!(validate_register_password(&complete), "");
    }

    #[test]
    fn test_confirm_password_empty_iff_equal_and_non_empty(a in "[a-zA-Z0-9]{0,8}", b in "[a-zA-Z0-9]{0,8}") {
        let message = validate_confirm_password(&a, &b);
        prop_assert_eq!(message.is_empty(), a == b && !a.is_empty());
    }

    #[test]
    fn test_counter_reset_after_any_increments(n in 0u64..500) {
        let mut counter = ReadCounter::new();
        for _ in 0..n {
            counter.increment();
        }
        prop_assert_eq!(counter.count(), n);
        prop_assert_eq!(counter.label(), format!("{} reads", n));

        counter.reset();
        prop_assert_eq!(counter.count(), 0);
    }
}
