mod common;

use common::{PositionFixture, move_word, record, sq};
use nnuebin::summary::DatasetSummary;
use nnuebin::{ReaderOptions, RecordReader};
use std::io::Cursor;

#[test]
fn test_summary_over_reader() {
    let kings = PositionFixture::kings(sq("e1"), sq("e8")).encode();
    let mut ep = PositionFixture::kings(sq("e1"), sq("e8"));
    ep.en_passant = Some(sq("c6"));

    let mut bytes = Vec::new();
    bytes.extend(record(&kings, 120, move_word(4, 3, 0, 0), 40, 1));
    bytes.extend(record(&ep.encode(), -80, move_word(52, 60, 3, 1), 61, -1));
    bytes.extend(record(&kings, 0, move_word(4, 5, 0, 0), 99, 0));
    bytes.extend(vec![0xFFu8; 40]);
    bytes.extend(vec![0u8; 11]);

    let mut reader = RecordReader::from_reader(Cursor::new(bytes), ReaderOptions::default()).unwrap();
    let mut summary = DatasetSummary::zero();
    for outcome in reader.samples() {
        summary.record(outcome).unwrap();
    }

    assert_eq!(summary.samples, 3);
    assert_eq!((summary.wins, summary.draws, summary.losses), (1, 1, 1));
    assert_eq!((summary.min_score, summary.max_score), (-80, 120));
    assert_eq!(summary.max_ply, 99);
    assert_eq!(summary.promotions, 1);
    assert_eq!(summary.with_en_passant, 1);
    assert_eq!(summary.corrupt, 1);
    assert_eq!(summary.truncated, 1);

    let text = summary.to_string();
    assert!(text.contains("wins/draws/losses 1 / 1 / 1"));
}
