use crate::domain::OutreachRecord;
use crate::time::format_local_date;
use chrono::{NaiveDate, TimeZone};

pub const CSV_HEADERS: [&str; 7] = [
    "Client Name",
    "Platform",
    "Outreach Type",
    "Status",
    "Follow-up Date",
    "Notes",
    "Created At",
];

#[derive(Debug, Clone)]
pub struct CsvExport {
    pub data: String,
    pub count: usize,
}

/// Created-at is written as the local calendar date of each record.
pub fn export_csv<Tz: TimeZone>(records: &[OutreachRecord], tz: &Tz) -> CsvExport {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for record in records {
        let follow_up = record
            .follow_up_date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        let row = [
            quote(&record.client_name),
            quote(record.platform.label()),
            quote(record.outreach_type.label()),
            quote(record.status.label()),
            follow_up,
            quote(record.notes.as_deref().unwrap_or_default()),
            format_local_date(record.created_at, tz),
        ];
        lines.push(row.join(","));
    }

    CsvExport {
        data: lines.join("\n"),
        count: records.len(),
    }
}

pub fn csv_file_name(today: NaiveDate) -> String {
    format!("outreach_data_{}.csv", today.format("%Y-%m-%d"))
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
