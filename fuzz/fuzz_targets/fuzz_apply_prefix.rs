#![no_main]

use libfuzzer_sys::fuzz_target;
use voyager_install::{apply_prefix, TablePrefix};

fuzz_target!(|data: &[u8]| {
    if let Ok(document) = std::str::from_utf8(data) {
        // Fuzz package config rewriting - this should never panic
        if let Ok(prefix) = TablePrefix::new("voy_") {
            let _ = apply_prefix(document, &prefix);
        }
    }
});
