use core::fmt;


/// Event timestamp inside an implicit month. Orders by day, then hour, then minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionCode {
    pub code: u32,
    pub description: String,
}

/// One issue report produced by a production line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineLogEntry {
    pub line_code: u32,
    pub batch_code: u32,
    pub product_id: u32,
    pub issue_code: u32,
    pub date_time: DateTime,
    pub resolution: ResolutionCode,
    pub issue_description: String,
    pub reporting_employee_id: u32,
}

impl DateTime {
    pub fn new(day: u32, hour: u32, minute: u32) -> DateTime {
        DateTime { day, hour, minute }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02}:{:02}", self.day, self.hour, self.minute)
    }
}

impl fmt::Display for LineLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LineLogEntry({}, {}, {}, {})",
            self.line_code, self.product_id, self.issue_code, self.date_time
        )
    }
}
