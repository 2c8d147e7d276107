//! Prefix rewriter - writes a table prefix into the persisted package config
//!
//! Two independent edits on the same text:
//! 1. The `'table_prefix' => '...'` field receives the prefix as its value.
//! 2. Inside the `'hidden' => [ ... ]` block (and only there) every quoted
//!    lower-case/underscore identifier is prefixed.
//!
//! Identifiers that already start with the prefix are left alone, so the
//! rewrite is idempotent whether or not the document has a scalar field.
//! When the scalar holds a different prefix, identifiers carrying that old
//! prefix are re-based onto the new one instead of stacking both.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::domain::value_objects::TablePrefix;

fn scalar_value_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"'table_prefix'(\s*)=>(\s*)'([^']*)'").expect("static regex is valid")
    })
}

// Field keyword anchored at line start; non-greedy up to the first `]`.
fn hidden_block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?ms)^([ \t]*'hidden'[ \t]*=>[ \t]*)(\[.*?\])").expect("static regex is valid")
    })
}

fn identifier_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"'([a-z_]+)'").expect("static regex is valid"))
}

/// Current value of the `table_prefix` field, if the field is present
pub fn current_prefix(document: &str) -> Option<&str> {
    scalar_value_re()
        .captures(document)
        .and_then(|caps| caps.get(3))
        .map(|m| m.as_str())
}

/// Inject `prefix` into the scalar prefix field and the hidden table list
pub fn apply_prefix(document: &str, prefix: &TablePrefix) -> String {
    let previous = current_prefix(document).filter(|p| !p.is_empty() && *p != prefix.as_str());

    let with_scalar = scalar_value_re().replace_all(document, |caps: &Captures<'_>| {
        format!("'table_prefix'{}=>{}'{}'", &caps[1], &caps[2], prefix)
    });

    hidden_block_re()
        .replace_all(&with_scalar, |caps: &Captures<'_>| {
            let block = identifier_re().replace_all(&caps[2], |ident: &Captures<'_>| {
                format!("'{}'", prefixed_table(&ident[1], prefix.as_str(), previous))
            });
            format!("{}{}", &caps[1], block)
        })
        .into_owned()
}

fn prefixed_table(table: &str, prefix: &str, previous: Option<&str>) -> String {
    if table.starts_with(prefix) {
        return table.to_string();
    }
    let bare = previous
        .and_then(|old| table.strip_prefix(old))
        .unwrap_or(table);
    format!("{prefix}{bare}")
}
