use crate::entry::LineLogEntry;
use crate::mergesort::sort_with_buffer;
use crate::order::{by_product, by_product_issue_time};
use log::*;

#[cfg(test)]
mod test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub product_id: u32,
    pub issue_code: u32,
    pub line_code: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductCount {
    pub product_id: u32,
    pub count: usize,
}

/// Everything the pipeline produces for one run.
#[derive(Debug, Clone)]
pub struct Report {
    /// Line logs as they were supplied.
    pub raw_lines: Vec<Vec<LineLogEntry>>,
    /// Each line log sorted by product, issue and time.
    pub lines: Vec<Vec<LineLogEntry>>,
    /// All line logs concatenated, then sorted by product.
    pub merged: Vec<LineLogEntry>,
    pub summary: Vec<ProductCount>,
}

impl Report {
    pub fn build(line_logs: Vec<Vec<LineLogEntry>>) -> Report {
        let raw_lines = line_logs.clone();
        let mut lines = line_logs;

        let total = lines.iter().map(|it| it.len()).sum();
        let mut buffer: Vec<LineLogEntry> = Vec::with_capacity(total);

        for (i, line) in lines.iter_mut().enumerate() {
            sort_with_buffer(line, &mut buffer, by_product_issue_time);
            info!("Report::build - line log {} sorted, entries={}", i + 1, line.len());
        }

        let mut merged = concatenate(&lines);
        sort_with_buffer(&mut merged, &mut buffer, by_product);
        info!("Report::build - line logs merged, total count={}", merged.len());

        let summary = count_by_product(&merged);
        info!("Report::build - distinct products={}", summary.len());

        Report {
            raw_lines,
            lines,
            merged,
            summary,
        }
    }

    pub fn search(&self, issue_code: u32) -> Option<SearchHit> {
        let hit = find_first_issue(&self.merged, issue_code);
        match &hit {
            Some(found) => info!(
                "Report::search - issue_code={} found, product_id={}, line_code={}",
                issue_code, found.product_id, found.line_code
            ),
            None => info!("Report::search - issue_code={} not found", issue_code),
        }
        hit
    }
}

/// Appends the logs one after another, keeping the order inside each log.
pub fn concatenate(logs: &[Vec<LineLogEntry>]) -> Vec<LineLogEntry> {
    let total = logs.iter().map(|it| it.len()).sum();
    let mut result: Vec<LineLogEntry> = Vec::with_capacity(total);
    for log in logs {
        result.extend_from_slice(log);
    }
    result
}

/// First entry, scanning from the front, with the given issue code.
pub fn find_first_issue(entries: &[LineLogEntry], issue_code: u32) -> Option<SearchHit> {
    let entry = entries.iter().find(|it| it.issue_code == issue_code)?;
    debug!("find_first_issue - hit {}", entry);
    Some(SearchHit {
        product_id: entry.product_id,
        issue_code: entry.issue_code,
        line_code: entry.line_code,
    })
}

/// Run lengths of consecutive equal product IDs. Expects entries grouped by product;
/// an empty slice gives an empty summary.
pub fn count_by_product(entries: &[LineLogEntry]) -> Vec<ProductCount> {
    let mut result: Vec<ProductCount> = Vec::new();

    let mut iter = entries.iter();
    let mut last_seen = match iter.next() {
        Some(first) => first.product_id,
        None => return result,
    };
    let mut count: usize = 1;

    for entry in iter {
        if entry.product_id == last_seen {
            count += 1;
        } else {
            result.push(ProductCount {
                product_id: last_seen,
                count,
            });
            last_seen = entry.product_id;
            count = 1;
        }
    }

    result.push(ProductCount {
        product_id: last_seen,
        count,
    });
    result
}
