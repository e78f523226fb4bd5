#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(path) = std::str::from_utf8(data) {
        // Rule evaluation must terminate and never panic on arbitrary paths
        for direction in [hgsync::SyncDirection::Pull, hgsync::SyncDirection::Push] {
            let set = hgsync::build_filters(direction, false, true);
            let _ = set.transfers(path);
            let _ = set.admits(path, true);
        }
    }
});
