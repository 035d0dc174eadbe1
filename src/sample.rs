use crate::entry::{DateTime, LineLogEntry, ResolutionCode};

fn entry(
    line_code: u32,
    batch_code: u32,
    product_id: u32,
    issue_code: u32,
    (day, hour, minute): (u32, u32, u32),
    resolution_code: u32,
    reporting_employee_id: u32,
) -> LineLogEntry {
    LineLogEntry {
        line_code,
        batch_code,
        product_id,
        issue_code,
        date_time: DateTime::new(day, hour, minute),
        resolution: ResolutionCode {
            code: resolution_code,
            description: String::from("Resolution description"),
        },
        issue_description: String::from("Issue description"),
        reporting_employee_id,
    }
}

/// The reference data set: four production lines with six reports each.
pub fn line_logs() -> Vec<Vec<LineLogEntry>> {
    vec![
        vec![
            entry(1, 2, 453, 107, (10, 8, 30), 101, 789),
            entry(1, 2, 892, 102, (10, 9, 15), 102, 987),
            entry(1, 1, 116, 103, (9, 11, 20), 106, 201),
            entry(1, 7, 453, 166, (11, 10, 0), 103, 654),
            entry(1, 4, 981, 123, (12, 18, 50), 104, 729),
            entry(1, 3, 321, 193, (9, 15, 30), 105, 223),
        ],
        vec![
            entry(2, 2, 116, 203, (8, 11, 15), 101, 789),
            entry(2, 3, 292, 123, (11, 18, 25), 102, 987),
            entry(2, 1, 453, 201, (11, 16, 20), 106, 201),
            entry(2, 8, 892, 205, (8, 8, 30), 103, 654),
            entry(2, 4, 321, 222, (10, 12, 40), 104, 729),
            entry(2, 1, 291, 123, (9, 15, 45), 105, 223),
        ],
        vec![
            entry(3, 6, 200, 301, (10, 10, 50), 101, 789),
            entry(3, 9, 981, 302, (11, 9, 55), 102, 987),
            entry(3, 1, 343, 332, (9, 16, 25), 106, 201),
            entry(3, 2, 321, 391, (9, 10, 20), 103, 654),
            entry(3, 4, 702, 221, (12, 13, 30), 104, 729),
            entry(3, 4, 702, 308, (9, 19, 10), 105, 223),
        ],
        vec![
            entry(4, 1, 321, 450, (9, 18, 10), 101, 789),
            entry(4, 2, 892, 401, (8, 9, 15), 102, 987),
            entry(4, 1, 200, 424, (9, 15, 50), 106, 201),
            entry(4, 3, 116, 499, (7, 14, 35), 103, 654),
            entry(4, 3, 116, 499, (10, 20, 40), 104, 729),
            entry(4, 6, 892, 410, (11, 11, 0), 105, 223),
        ],
    ]
}
