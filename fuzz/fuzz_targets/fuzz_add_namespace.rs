#![no_main]

use libfuzzer_sys::fuzz_target;
use voyager_install::add_namespace;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Some(patched) = add_namespace(content) {
            assert!(add_namespace(&patched).is_none(), "namespace added twice");
        }
    }
});
