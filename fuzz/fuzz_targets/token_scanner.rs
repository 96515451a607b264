#![no_main]

use libfuzzer_sys::fuzz_target;
use propscope::TokenScanner;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let mut scanner = TokenScanner::new("${", "}", |key: &str| key.to_string());
        let _ = scanner.parse(text);
    }
});
