//! Property tests for the scanner and pairer invariants

mod common;

use bmpharvest::domain::entities::{BitmapRecord, FilenameToken};
use bmpharvest::domain::services::{BitmapScanner, Pairer};
use proptest::prelude::*;
use std::collections::HashSet;

/// Either filler without any 'B' byte, or a bitmap of the given size
#[derive(Debug, Clone)]
enum Segment {
    Filler(Vec<u8>),
    Bitmap(u32),
}

fn segment() -> impl Strategy<Value = Segment> {
    prop_oneof![
        prop::collection::vec(any::<u8>().prop_filter("no B", |b| *b != b'B'), 0..64)
            .prop_map(Segment::Filler),
        (7u32..200).prop_map(Segment::Bitmap),
    ]
}

proptest! {
    #[test]
    fn records_are_bounded_ordered_and_disjoint(
        data in prop::collection::vec(any::<u8>(), 0..4096),
        max_size in 1u64..5000,
    ) {
        // Bias the input towards signatures
        let mut data = data;
        for i in (0..data.len().saturating_sub(1)).step_by(37) {
            data[i] = b'B';
            data[i + 1] = b'M';
        }

        let records = BitmapScanner::new(max_size).scan(&data);

        for record in &records {
            prop_assert!(record.size() > 0);
            prop_assert!(u64::from(record.size()) < max_size);
            prop_assert!(record.end() <= data.len() as u64);
            prop_assert_eq!(&data[record.range()][..2], b"BM");
        }
        for pair in records.windows(2) {
            prop_assert!(pair[0].offset() <= pair[1].offset());
            prop_assert!(pair[0].end() <= pair[1].offset());
            prop_assert!(!pair[0].overlaps(&pair[1]));
        }
    }

    #[test]
    fn planted_bitmaps_are_all_found(segments in prop::collection::vec(segment(), 0..24)) {
        let mut data = Vec::new();
        let mut planted = Vec::new();
        for segment in &segments {
            match segment {
                Segment::Filler(bytes) => data.extend_from_slice(bytes),
                Segment::Bitmap(size) => {
                    planted.push(BitmapRecord::new(data.len() as u64, *size));
                    data.extend(common::bitmap(*size, 0));
                }
            }
        }

        prop_assert_eq!(BitmapScanner::default().scan(&data), planted);
    }

    #[test]
    fn assigned_names_are_unique_ignoring_case(
        names in prop::collection::vec("[a-cA-C]{1,2}(_[12])?\\.(bmp|BMP)", 0..30),
        bitmap_count in 0usize..30,
    ) {
        let tokens: Vec<FilenameToken> = names
            .iter()
            .enumerate()
            .map(|(i, n)| FilenameToken::new(n.as_str(), i as u64))
            .collect();
        let records: Vec<BitmapRecord> = (0..bitmap_count)
            .map(|i| BitmapRecord::new(i as u64 * 100, 50))
            .collect();

        let pairing = Pairer::new().pair(&tokens, &records);

        prop_assert_eq!(pairing.assignments.len(), bitmap_count);
        prop_assert_eq!(pairing.paired, names.len().min(bitmap_count));

        let mut seen = HashSet::new();
        for assignment in &pairing.assignments {
            prop_assert!(seen.insert(assignment.filename().to_lowercase()));
        }
        for (assignment, record) in pairing.assignments.iter().zip(&records) {
            prop_assert_eq!(assignment.source(), record);
        }
    }
}
