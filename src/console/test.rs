use super::*;
use crate::sample;

#[test]
fn entry_formats() {
    let logs = sample::line_logs();
    assert_eq!(
        format_entry(&logs[0][0]),
        "Product ID: 453, Issue Code: 107, Date: 10, Time: 08:30"
    );
    assert_eq!(
        format_merged_entry(&logs[3][5]),
        "Product ID: 892, Issue Code: 410, Line Code: 4"
    );
}

#[test]
fn search_formats() {
    let hit = SearchHit {
        product_id: 291,
        issue_code: 123,
        line_code: 2,
    };
    assert_eq!(
        format_search(123, Some(hit)),
        vec![
            String::from("Earliest occurrence of Issue Code 123"),
            String::from("Product ID: 291, Issue Code: 123, Line Code: 2"),
        ]
    );
    assert_eq!(
        format_search(7, None),
        vec![String::from("Issue Code 7 not found in the log.")]
    );
}

#[test]
fn count_format() {
    let count = ProductCount {
        product_id: 116,
        count: 4,
    };
    assert_eq!(format_count(&count), "Product ID: 116, Issues Reported: 4");
}
