//! Property tests for writing a table prefix into the package config.

use proptest::prelude::*;

use voyager_install::domain::services::{apply_prefix, current_prefix};
use voyager_install::TablePrefix;

fn table_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z_]{1,16}").unwrap()
}

fn prefix() -> impl Strategy<Value = TablePrefix> {
    proptest::string::string_regex("[a-z][a-z0-9]{0,6}_")
        .unwrap()
        .prop_map(|p| TablePrefix::new(p).unwrap())
}

fn hidden_list(tables: &[String]) -> String {
    tables
        .iter()
        .map(|t| format!("'{t}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn config_without_prefix_field(tables: &[String]) -> String {
    let hidden = hidden_list(tables);
    format!("<?php\n\nreturn [\n    'tables' => [\n        'hidden' => [{hidden}],\n    ],\n];\n")
}

fn config_with_hidden(tables: &[String]) -> String {
    let hidden = hidden_list(tables);
    format!(
        "<?php\n\nreturn [\n    'database' => [\n        'tables' => [\n            'hidden' => [{hidden}],\n        ],\n    ],\n\n    'table_prefix' => '',\n\n    'other' => ['untouched'],\n];\n"
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every hidden table is prefixed exactly once.
    #[test]
    fn property_hidden_tables_are_prefixed(
        tables in proptest::collection::vec(table_name(), 0..=8),
        prefix in prefix(),
    ) {
        prop_assume!(tables.iter().all(|t| !t.starts_with(prefix.as_str())));
        let out = apply_prefix(&config_with_hidden(&tables), &prefix);

        let expected = tables
            .iter()
            .map(|t| format!("'{prefix}{t}'"))
            .collect::<Vec<_>>()
            .join(", ");
        let hidden_line = format!("'hidden' => [{expected}],");
        prop_assert!(out.contains(&hidden_line), "missing {hidden_line} in\n{out}");
        prop_assert_eq!(current_prefix(&out), Some(prefix.as_str()));
        prop_assert!(out.contains("'other' => ['untouched'],"));
    }

    /// PROPERTY: Applying the same prefix twice is the same as applying it once.
    #[test]
    fn property_apply_prefix_is_idempotent(
        tables in proptest::collection::vec(table_name(), 0..=8),
        prefix in prefix(),
    ) {
        let once = apply_prefix(&config_with_hidden(&tables), &prefix);
        let twice = apply_prefix(&once, &prefix);
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: Idempotence holds without a `table_prefix` field to guard on.
    #[test]
    fn property_idempotent_without_prefix_field(
        tables in proptest::collection::vec(table_name(), 0..=8),
        prefix in prefix(),
    ) {
        let once = apply_prefix(&config_without_prefix_field(&tables), &prefix);
        let twice = apply_prefix(&once, &prefix);
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: Switching prefixes ends where a fresh install would.
    #[test]
    fn property_switching_prefix_matches_fresh_install(
        tables in proptest::collection::vec(table_name(), 0..=8),
        old in prefix(),
        new in prefix(),
    ) {
        prop_assume!(!old.as_str().starts_with(new.as_str()));
        prop_assume!(!new.as_str().starts_with(old.as_str()));
        prop_assume!(tables
            .iter()
            .all(|t| !t.starts_with(old.as_str()) && !t.starts_with(new.as_str())));
        let doc = config_with_hidden(&tables);

        let switched = apply_prefix(&apply_prefix(&doc, &old), &new);

        prop_assert_eq!(switched, apply_prefix(&doc, &new));
    }

    /// PROPERTY: Arbitrary documents never panic the rewriter.
    #[test]
    fn property_apply_prefix_never_panics(doc in ".{0,400}", prefix in prefix()) {
        let _ = apply_prefix(&doc, &prefix);
    }
}
