use crate::entry::{LineLogEntry, ResolutionCode};
use crate::timestamp::*;
use log::*;
use std::fs;


const FIELD_COUNT: usize = 10;

/// A line-log file held in memory, with the offsets where each text line starts.
#[derive(Debug)]
pub struct LogFile {
    path: String,
    text: String,
    line_breaks: Vec<usize>,
}

impl LogFile {
    pub fn from_text(path: &str, text: String) -> LogFile {
        let line_breaks = get_line_breaks(&text);
        LogFile {
            path: path.to_string(),
            text,
            line_breaks,
        }
    }

    pub fn load(path: &str) -> Result<LogFile, LineError> {
        let text = fs::read_to_string(path)
            .map_err(|err| LineError::new(format!("cannot read file={}, {}", path, err)))?;
        Ok(LogFile::from_text(path, text))
    }

    pub fn get_ith_line(&self, i: usize) -> Result<&str, LineError> {
        if i >= self.len() {
            return Err(LineError::new(format!(
                "{}: no line {}, file has {} lines",
                self.path,
                i + 1,
                self.len()
            )));
        }

        let res = &self.text[self.line_breaks[i]..self.line_breaks[i + 1]];
        let res = res.strip_suffix('\n').unwrap_or(res);
        Ok(res.strip_suffix('\r').unwrap_or(res))
    }

    pub fn len(&self) -> usize {
        self.line_breaks.len() - 1
    }

    /// Parses every record in the file. Blank lines and `#` comments are skipped.
    pub fn entries(&self) -> Result<Vec<LineLogEntry>, LineError> {
        let mut result: Vec<LineLogEntry> = Vec::new();
        for i in 0..self.len() {
            let line = self.get_ith_line(i)?.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let entry = parse_entry(line).map_err(|err| {
                LineError::new(format!("{}:{}: {}", self.path, i + 1, err))
            })?;
            result.push(entry);
        }

        if let Some(first) = result.first() {
            if result.iter().any(|it| it.line_code != first.line_code) {
                warn!(
                    "LogFile::entries - {} mixes several line codes, first={}",
                    self.path, first.line_code
                );
            }
        }

        Ok(result)
    }
}

/// Reads each file as one line log, in the order given.
pub fn load_line_logs(paths: &[String]) -> Result<Vec<Vec<LineLogEntry>>, LineError> {
    let mut result: Vec<Vec<LineLogEntry>> = Vec::new();
    for path in paths {
        let entries = LogFile::load(path)?.entries()?;
        info!("load_line_logs - file={}, entries={}", path, entries.len());
        result.push(entries);
    }
    Ok(result)
}

// line_code|batch_code|product_id|issue_code|day|HH:MM|resolution_code|resolution_description|issue_description|reporting_employee_id
fn parse_entry(line: &str) -> Result<LineLogEntry, LineError> {
    let fields: Vec<&str> = line.split('|').map(|it| it.trim()).collect();
    if fields.len() != FIELD_COUNT {
        return Err(LineError::new(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        )));
    }

    Ok(LineLogEntry {
        line_code: parse_number("line_code", fields[0])?,
        batch_code: parse_number("batch_code", fields[1])?,
        product_id: parse_number("product_id", fields[2])?,
        issue_code: parse_number("issue_code", fields[3])?,
        date_time: parse_date_time(fields[4], fields[5])?,
        resolution: ResolutionCode {
            code: parse_number("resolution_code", fields[6])?,
            description: fields[7].to_string(),
        },
        issue_description: fields[8].to_string(),
        reporting_employee_id: parse_number("reporting_employee_id", fields[9])?,
    })
}

fn parse_number(name: &str, field: &str) -> Result<u32, LineError> {
    field
        .parse()
        .map_err(|_| LineError::new(format!("cannot parse {} '{}'", name, field)))
}

fn get_line_breaks(text_str: &str) -> Vec<usize> {
    let mut line_breaks: Vec<usize> = vec![0];
    let mut offset: usize = 0;
    while let Some(next) = text_str[offset..].find('\n') {
        offset += next + 1;
        line_breaks.push(offset);
    }
    if !text_str.ends_with('\n') {
        line_breaks.push(text_str.len());
    }
    line_breaks
}
