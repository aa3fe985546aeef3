use super::schedule::PaymentScheduleEntry;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct ScheduleRow {
    #[serde(rename = "Sequence")]
    sequence: u32,
    #[serde(rename = "Due Date")]
    due_date: String,
    #[serde(rename = "Amount")]
    amount: u64,
    #[serde(rename = "Status")]
    status: &'static str,
}

impl ScheduleRow {
    fn from_entry(entry: &PaymentScheduleEntry) -> Self {
        let status = match (entry.is_prepayment, entry.is_paid) {
            (true, _) => "prepaid",
            (false, true) => "paid",
            (false, false) => "scheduled",
        };

        Self {
            sequence: entry.sequence,
            due_date: entry
                .due_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            amount: entry.amount,
            status,
        }
    }
}

/// Writes the schedule as CSV with a header row. Prepayments have an empty
/// due date.
pub fn write_schedule_csv<W: Write>(
    writer: W,
    entries: &[PaymentScheduleEntry],
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for entry in entries {
        csv_writer.serialize(ScheduleRow::from_entry(entry))?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::schedule::derive_schedule;
    use chrono::NaiveDate;

    #[test]
    fn csv_lists_every_entry_with_header() {
        let registration = NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date");
        let now = NaiveDate::from_ymd_opt(2025, 4, 1).expect("valid date");
        let entries = derive_schedule(39_800, registration, now);

        let mut buffer = Vec::new();
        write_schedule_csv(&mut buffer, &entries).expect("csv written");
        let text = String::from_utf8(buffer).expect("utf-8 output");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 83);
        assert_eq!(lines[0], "Sequence,Due Date,Amount,Status");
        assert_eq!(lines[1], "1,,39800,prepaid");
        assert_eq!(lines[3], "3,2025-03-05,39800,paid");
        assert_eq!(lines[4], "4,2025-04-05,39800,scheduled");
    }
}
