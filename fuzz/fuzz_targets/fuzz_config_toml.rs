#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and resolving a config must never panic
        if let Ok(config) = toml::from_str::<hgsync::Config>(content) {
            if let Ok(layout) = config.layout() {
                let _ = layout.resolve("/data", "RunA");
            }
        }
    }
});
