#![no_main]

use bmpharvest::application::PlanExtractionUseCase;
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

fuzz_target!(|data: &[u8]| {
    let pairing = PlanExtractionUseCase::default().execute(data);

    let mut seen = HashSet::new();
    for assignment in &pairing.assignments {
        assert!(seen.insert(assignment.filename().to_lowercase()));
    }
    assert_eq!(pairing.assignments.len(), pairing.bitmaps_found);
});
