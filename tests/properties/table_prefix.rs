//! Property tests for table prefix validation.

use proptest::prelude::*;

use voyager_install::TablePrefix;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Identifier-shaped prefixes are accepted unchanged.
    #[test]
    fn property_identifier_prefixes_accepted(value in "[A-Za-z_][A-Za-z0-9_]{0,15}") {
        let prefix = TablePrefix::new(value.clone()).unwrap();
        prop_assert_eq!(prefix.as_str(), value.as_str());
    }

    /// PROPERTY: A leading digit is always rejected.
    #[test]
    fn property_leading_digit_rejected(value in "[0-9][A-Za-z0-9_]{0,15}") {
        prop_assert!(TablePrefix::new(value).is_err());
    }

    /// PROPERTY: Quotes and separators never make it into a prefix.
    #[test]
    fn property_unsafe_characters_rejected(
        head in "[a-z_]{0,4}",
        bad in "['\"; \\-./]",
        tail in "[a-z_]{0,4}",
    ) {
        let prefix = format!("{head}{bad}{tail}");
        prop_assert!(TablePrefix::new(prefix).is_err());
    }
}
