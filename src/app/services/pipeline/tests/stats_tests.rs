//! Tests for stream statistics

use crate::app::services::pipeline::StreamStats;

#[test]
fn test_skip_rate() {
    let stats = StreamStats {
        lines_read: 12,
        records_read: 10,
        records_decoded: 9,
        records_skipped: 1,
        stopped_early: false,
    };

    assert_eq!(stats.skip_rate(), 10.0);
    assert!(!stats.is_clean());
}

#[test]
fn test_empty_stats() {
    let stats = StreamStats::new();

    assert_eq!(stats.records_read, 0);
    assert_eq!(stats.skip_rate(), 0.0);
    assert!(stats.is_clean());
    assert!(!stats.stopped_early);
}

#[test]
fn test_stats_serialize() {
    let stats = StreamStats {
        lines_read: 3,
        records_read: 2,
        records_decoded: 2,
        records_skipped: 0,
        stopped_early: true,
    };

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["records_decoded"], 2);
    assert_eq!(json["stopped_early"], true);
}
