use crate::entry::LineLogEntry;
use crate::pipeline::{ProductCount, Report, SearchHit};
use log::*;
use std::io::{self, Write};

pub fn format_entry(entry: &LineLogEntry) -> String {
    format!(
        "Product ID: {}, Issue Code: {}, Date: {}, Time: {:02}:{:02}",
        entry.product_id,
        entry.issue_code,
        entry.date_time.day,
        entry.date_time.hour,
        entry.date_time.minute
    )
}

pub fn format_merged_entry(entry: &LineLogEntry) -> String {
    format!(
        "Product ID: {}, Issue Code: {}, Line Code: {}",
        entry.product_id, entry.issue_code, entry.line_code
    )
}

pub fn format_search(issue_code: u32, hit: Option<SearchHit>) -> Vec<String> {
    match hit {
        Some(hit) => vec![
            format!("Earliest occurrence of Issue Code {}", issue_code),
            format!(
                "Product ID: {}, Issue Code: {}, Line Code: {}",
                hit.product_id, hit.issue_code, hit.line_code
            ),
        ],
        None => vec![format!("Issue Code {} not found in the log.", issue_code)],
    }
}

pub fn format_count(count: &ProductCount) -> String {
    format!(
        "Product ID: {}, Issues Reported: {}",
        count.product_id, count.count
    )
}

/// Prints all four reports. Without `issue` the search target is read from stdin.
pub fn print_report(report: &Report, issue: Option<u32>) -> Result<(), io::Error> {
    println!("-------------------- TASK ONE --------------------");
    println!("Data from Line Log (sorted by product ID, issue code, date & time):\n");

    for (i, line) in report.raw_lines.iter().enumerate() {
        println!("------------ UNSORTED LOG LINE {} ------------\n", i + 1);
        line.iter().for_each(|it| println!("{}", format_entry(it)));
    }
    for (i, line) in report.lines.iter().enumerate() {
        println!("------------ SORTED LOG LINE {} ------------\n", i + 1);
        line.iter().for_each(|it| println!("{}", format_entry(it)));
    }

    println!("\n\n-------------------- TASK TWO --------------------");
    println!("Issue Codes sorted by Product ID & Line Code\n");
    report
        .merged
        .iter()
        .for_each(|it| println!("{}", format_merged_entry(it)));

    println!("\n\n-------------------- TASK THREE --------------------");
    println!("Search for earliest occurrence of an Issue Code\n");
    let issue_code = match issue {
        Some(code) => code,
        None => prompt_issue_code()?,
    };
    for text in format_search(issue_code, report.search(issue_code)) {
        println!("{}", text);
    }

    println!("\n\n-------------------- TASK FOUR --------------------");
    println!("Summarises the number of issues reported for each product id\n");
    report
        .summary
        .iter()
        .for_each(|it| println!("{}", format_count(it)));

    Ok(())
}

fn prompt_issue_code() -> Result<u32, io::Error> {
    print!("Enter Issue Code: ");
    io::stdout().flush()?;

    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;
    buffer.retain(|c| !c.is_whitespace());

    buffer.parse().map_err(|_| {
        warn!("prompt_issue_code - invalid input={:?}", buffer);
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("issue code must be a number, got={:?}", buffer),
        )
    })
}

#[cfg(test)]
mod test;
