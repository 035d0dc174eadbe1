use super::*;
use crate::entry::{DateTime, ResolutionCode};

fn generate_entry(product_id: u32, issue_code: u32, date_time: (u32, u32, u32)) -> LineLogEntry {
    LineLogEntry {
        line_code: 1,
        batch_code: 1,
        product_id,
        issue_code,
        date_time: DateTime::new(date_time.0, date_time.1, date_time.2),
        resolution: ResolutionCode {
            code: 101,
            description: String::from("Resolution description"),
        },
        issue_description: String::from("Issue description"),
        reporting_employee_id: 789,
    }
}

#[test]
fn product_decides_first() {
    let low = generate_entry(116, 900, (30, 23, 59));
    let high = generate_entry(453, 100, (1, 0, 0));
    assert_eq!(by_product_issue_time(&low, &high), Ordering::Less);
    assert_eq!(by_product_issue_time(&high, &low), Ordering::Greater);
}

#[test]
fn issue_breaks_product_ties() {
    let low = generate_entry(453, 107, (11, 10, 0));
    let high = generate_entry(453, 166, (10, 8, 30));
    assert_eq!(by_product_issue_time(&low, &high), Ordering::Less);
}

#[test]
fn date_time_breaks_issue_ties() {
    let early = generate_entry(116, 499, (7, 14, 35));
    let late = generate_entry(116, 499, (10, 20, 40));
    assert_eq!(by_product_issue_time(&early, &late), Ordering::Less);

    let same_day_early = generate_entry(116, 499, (7, 14, 35));
    let same_day_late = generate_entry(116, 499, (7, 14, 36));
    assert_eq!(
        by_product_issue_time(&same_day_early, &same_day_late),
        Ordering::Less
    );
}

#[test]
fn identical_keys_are_equal() {
    let mut a = generate_entry(200, 301, (10, 10, 50));
    let b = generate_entry(200, 301, (10, 10, 50));
    a.batch_code = 9;
    a.line_code = 3;
    assert_eq!(by_product_issue_time(&a, &b), Ordering::Equal);
}

#[test]
fn by_product_ignores_other_keys() {
    let a = generate_entry(321, 193, (9, 15, 30));
    let b = generate_entry(321, 222, (1, 0, 0));
    assert_eq!(by_product(&a, &b), Ordering::Equal);
    assert_eq!(by_product(&generate_entry(291, 1, (1, 0, 0)), &a), Ordering::Less);
}
