use super::*;
use crate::entry::{DateTime, ResolutionCode};
use crate::sample;

fn generate_entry(line_code: u32, product_id: u32, issue_code: u32) -> LineLogEntry {
    LineLogEntry {
        line_code,
        batch_code: 1,
        product_id,
        issue_code,
        date_time: DateTime::new(1, 0, 0),
        resolution: ResolutionCode {
            code: 101,
            description: String::from("Resolution description"),
        },
        issue_description: String::from("Issue description"),
        reporting_employee_id: 789,
    }
}

#[test]
fn concatenate_keeps_source_order() {
    let logs = vec![
        vec![generate_entry(1, 30, 1), generate_entry(1, 10, 2)],
        vec![generate_entry(2, 20, 3)],
        Vec::new(),
        vec![generate_entry(4, 5, 4), generate_entry(4, 50, 5)],
    ];

    let result = concatenate(&logs);

    let lines: Vec<u32> = result.iter().map(|it| it.line_code).collect();
    let products: Vec<u32> = result.iter().map(|it| it.product_id).collect();
    assert_eq!(lines, vec![1, 1, 2, 4, 4]);
    assert_eq!(products, vec![30, 10, 20, 5, 50]);
}

#[test]
fn search_returns_first_match() {
    let entries = vec![
        generate_entry(3, 100, 7),
        generate_entry(1, 200, 9),
        generate_entry(2, 300, 9),
    ];

    assert_eq!(
        find_first_issue(&entries, 9),
        Some(SearchHit {
            product_id: 200,
            issue_code: 9,
            line_code: 1
        })
    );
    assert_eq!(find_first_issue(&entries, 8), None);
    assert_eq!(find_first_issue(&[], 9), None);
}

#[test]
fn count_by_product_emits_runs() {
    let entries = vec![
        generate_entry(1, 116, 1),
        generate_entry(2, 116, 2),
        generate_entry(1, 200, 3),
        generate_entry(4, 321, 4),
        generate_entry(4, 321, 5),
        generate_entry(3, 321, 6),
    ];

    let summary = count_by_product(&entries);
    assert_eq!(
        summary,
        vec![
            ProductCount {
                product_id: 116,
                count: 2
            },
            ProductCount {
                product_id: 200,
                count: 1
            },
            ProductCount {
                product_id: 321,
                count: 3
            },
        ]
    );
}

#[test]
fn count_by_product_on_empty_input() {
    assert!(count_by_product(&[]).is_empty());
}

#[test]
fn count_by_product_single_entry() {
    let summary = count_by_product(&[generate_entry(1, 42, 1)]);
    assert_eq!(
        summary,
        vec![ProductCount {
            product_id: 42,
            count: 1
        }]
    );
}

#[test]
fn sample_lines_are_sorted_per_line() {
    let report = Report::build(sample::line_logs());

    assert_eq!(report.lines.len(), 4);
    for (raw, sorted) in report.raw_lines.iter().zip(report.lines.iter()) {
        assert_eq!(raw.len(), sorted.len());
        for pair in sorted.windows(2) {
            let left = (pair[0].product_id, pair[0].issue_code, pair[0].date_time);
            let right = (pair[1].product_id, pair[1].issue_code, pair[1].date_time);
            assert!(left <= right);
        }
        for entry in raw {
            assert!(sorted.contains(entry));
        }
    }

    let line_four = &report.lines[3];
    assert_eq!(line_four[0].product_id, 116);
    assert_eq!(line_four[0].date_time, DateTime::new(7, 14, 35));
    assert_eq!(line_four[1].date_time, DateTime::new(10, 20, 40));
}

#[test]
fn sample_merged_is_grouped_by_product() {
    let report = Report::build(sample::line_logs());

    assert_eq!(report.merged.len(), 24);
    for pair in report.merged.windows(2) {
        assert!(pair[0].product_id <= pair[1].product_id);
    }

    // same product keeps line order, then the line's own order
    let product_116: Vec<(u32, u32)> = report
        .merged
        .iter()
        .filter(|it| it.product_id == 116)
        .map(|it| (it.line_code, it.issue_code))
        .collect();
    assert_eq!(product_116, vec![(1, 103), (2, 203), (4, 499), (4, 499)]);

    let first = report.merged.iter().position(|it| it.product_id == 116);
    assert_eq!(first, Some(0));
    assert!(report.merged[..4].iter().all(|it| it.product_id == 116));
}

#[test]
fn sample_search() {
    let report = Report::build(sample::line_logs());

    assert_eq!(
        report.search(123),
        Some(SearchHit {
            product_id: 291,
            issue_code: 123,
            line_code: 2
        })
    );
    assert_eq!(
        report.search(302),
        Some(SearchHit {
            product_id: 981,
            issue_code: 302,
            line_code: 3
        })
    );
    assert_eq!(report.search(999), None);
}

#[test]
fn sample_summary() {
    let report = Report::build(sample::line_logs());

    let summary: Vec<(u32, usize)> = report
        .summary
        .iter()
        .map(|it| (it.product_id, it.count))
        .collect();
    assert_eq!(
        summary,
        vec![
            (116, 4),
            (200, 2),
            (291, 1),
            (292, 1),
            (321, 4),
            (343, 1),
            (453, 3),
            (702, 2),
            (892, 4),
            (981, 2),
        ]
    );

    let total: usize = report.summary.iter().map(|it| it.count).sum();
    assert_eq!(total, report.merged.len());
}

#[test]
fn build_with_no_lines() {
    let report = Report::build(Vec::new());
    assert!(report.merged.is_empty());
    assert!(report.summary.is_empty());
    assert_eq!(report.search(123), None);
}
