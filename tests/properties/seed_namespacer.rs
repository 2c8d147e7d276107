//! Property tests for seeder namespacing.

use proptest::prelude::*;

use voyager_install::domain::services::add_namespace;

fn class_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][A-Za-z]{0,20}Seeder").unwrap()
}

fn seeder(blank_line: bool, class: &str, crlf: bool) -> String {
    let nl = if crlf { "\r\n" } else { "\n" };
    let gap = if blank_line { nl } else { "" };
    format!(
        "<?php{nl}{gap}use Illuminate\\Database\\Seeder;{nl}{nl}class {class} extends Seeder{nl}{{{nl}}}{nl}"
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Both boilerplate spacings get the namespace, and the result
    /// is not rewritten again.
    #[test]
    fn property_namespace_added_once(
        blank_line in any::<bool>(),
        crlf in any::<bool>(),
        class in class_name(),
    ) {
        let source = seeder(blank_line, &class, crlf);
        let nl = if crlf { "\r\n" } else { "\n" };

        let patched = add_namespace(&source).expect("seeder boilerplate is recognised");

        let head = format!("<?php{nl}{nl}namespace Database\\Seeders;{nl}{nl}use ");
        prop_assert!(patched.starts_with(&head));
        let tail = format!("class {class} extends Seeder{nl}{{{nl}}}{nl}");
        prop_assert!(patched.ends_with(&tail));
        prop_assert_eq!(add_namespace(&patched), None);
    }

    /// PROPERTY: Arbitrary content never panics the namespacer.
    #[test]
    fn property_add_namespace_never_panics(content in ".{0,300}") {
        let _ = add_namespace(&content);
    }
}
