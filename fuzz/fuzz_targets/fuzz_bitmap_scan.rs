#![no_main]

use bmpharvest::domain::services::BitmapScanner;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let records = BitmapScanner::new(1 << 16).scan(data);

    for record in &records {
        assert!(record.size() > 0);
        assert!(record.slice(data).is_some());
    }
    for pair in records.windows(2) {
        assert!(pair[0].end() <= pair[1].offset());
    }
});
