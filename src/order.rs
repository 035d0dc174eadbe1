use crate::entry::LineLogEntry;
use std::cmp::Ordering;

#[cfg(test)]
mod test;

/// Per-line report order: product ID, then issue code, then date and time.
pub fn by_product_issue_time(a: &LineLogEntry, b: &LineLogEntry) -> Ordering {
    a.product_id
        .cmp(&b.product_id)
        .then(a.issue_code.cmp(&b.issue_code))
        .then(a.date_time.cmp(&b.date_time))
}

/// Cross-line report order. Entries with the same product keep whatever order they had.
pub fn by_product(a: &LineLogEntry, b: &LineLogEntry) -> Ordering {
    a.product_id.cmp(&b.product_id)
}
