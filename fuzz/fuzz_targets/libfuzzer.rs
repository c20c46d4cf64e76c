#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    keypath_fuzz::test_sort_keys(data);
});
