use std::sync::Once;

use docscan_core::{ExpectedStatusMap, StatusTally, TOTAL_LABEL};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(scan_logging::initialize_for_tests);
}

fn builtin_tally() -> StatusTally {
    StatusTally::new(ExpectedStatusMap::builtin().vocabulary())
}

#[test]
fn fresh_tally_is_all_zero() {
    init_logging();
    let tally = builtin_tally();

    assert!(tally.is_zero());
    assert_eq!(tally.total(), 0);
    for (status, count) in tally.rows() {
        assert_eq!(count, 0, "{status} should start at zero");
    }
}

#[test]
fn record_increments_status_and_total_together() {
    init_logging();
    let mut tally = builtin_tally();

    tally.record("Final");
    tally.record("Final");
    tally.record("Active");

    assert_eq!(tally.count("Final"), 2);
    assert_eq!(tally.count("Active"), 1);
    assert_eq!(tally.total(), 3);
}

#[test]
fn total_equals_sum_of_named_counts() {
    init_logging();
    let mut tally = builtin_tally();
    for status in ["Accepted", "Final", "Withdrawn", "Final", "Draft"] {
        tally.record(status);
    }

    let named_sum: u64 = tally
        .rows()
        .iter()
        .filter(|(name, _)| name != TOTAL_LABEL)
        .map(|(_, count)| count)
        .sum();
    assert_eq!(named_sum, tally.total());
}

#[test]
fn rows_follow_vocabulary_order_with_total_last() {
    init_logging();
    let tally = builtin_tally();

    let names: Vec<String> = tally.rows().into_iter().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        vec![
            "Active",
            "Accepted",
            "Deferred",
            "Final",
            "Provisional",
            "Rejected",
            "Superseded",
            "Withdrawn",
            "Draft",
            TOTAL_LABEL,
        ]
    );
}

#[test]
fn unknown_status_gets_its_own_row_before_total() {
    init_logging();
    let mut tally = builtin_tally();
    tally.record("April Fool");

    assert_eq!(tally.count("April Fool"), 1);
    assert_eq!(tally.total(), 1);
    let rows = tally.rows();
    assert_eq!(rows[rows.len() - 1].0, TOTAL_LABEL);
    assert_eq!(rows[rows.len() - 2].0, "April Fool");
}
