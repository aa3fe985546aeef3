use chrono::NaiveDate;
use norel_with::billing::{derive_schedule, ScheduleSummary, ScheduleTerms};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

#[test]
fn schedule_always_has_eighty_two_entries_with_two_prepayments() {
    let registrations = [date(2020, 2, 29), date(2024, 12, 1), date(2025, 1, 31)];
    let nows = [date(2019, 1, 1), date(2025, 6, 1), date(2040, 1, 1)];

    for registration in registrations {
        for now in nows {
            let entries = derive_schedule(39_800, registration, now);
            assert_eq!(entries.len(), 82);
            for entry in &entries[..2] {
                assert!(entry.is_prepayment);
                assert!(entry.is_paid);
                assert_eq!(entry.due_date, None);
            }
            for entry in &entries[2..] {
                assert!(!entry.is_prepayment);
                assert!(entry.due_date.is_some());
            }
            let sequences: Vec<u32> = entries.iter().map(|entry| entry.sequence).collect();
            assert_eq!(sequences, (1..=82).collect::<Vec<u32>>());
        }
    }
}

#[test]
fn withdrawals_start_two_months_after_registration_on_the_fifth() {
    let entries = derive_schedule(39_800, date(2025, 1, 15), date(2025, 1, 15));
    assert_eq!(entries[2].sequence, 3);
    assert_eq!(entries[2].due_date, Some(date(2025, 3, 5)));
    assert_eq!(entries[3].due_date, Some(date(2025, 4, 5)));
    assert_eq!(entries[2].year(), Some(2025));
    assert_eq!(entries[2].month(), Some(3));
    assert_eq!(entries[81].due_date, Some(date(2031, 10, 5)));
}

#[test]
fn paid_count_follows_strict_before_rule() {
    let entries = derive_schedule(39_800, date(2024, 12, 1), date(2025, 6, 1));
    let summary = ScheduleSummary::from_entries(&entries);

    // 2 prepayments + Feb, Mar, Apr, May withdrawals; Jun 5 is still ahead.
    assert_eq!(summary.paid_count, 6);
    assert_eq!(summary.paid_amount, 39_800 * 6);
    assert_eq!(summary.total_amount, 3_263_600);
    assert_eq!(summary.remaining_count, 76);
    assert_eq!(summary.remaining_amount, 3_263_600 - 39_800 * 6);
    assert_eq!(summary.next_due, Some(date(2025, 6, 5)));
    assert!((summary.progress - 6.0 / 82.0).abs() < 1e-12);
}

#[test]
fn fully_elapsed_plan_is_entirely_paid() {
    let entries = ScheduleTerms::default().derive(39_800, date(2015, 1, 1), date(2030, 1, 1));
    let summary = ScheduleSummary::from_entries(&entries);
    assert_eq!(summary.paid_count, 82);
    assert_eq!(summary.remaining_amount, 0);
    assert_eq!(summary.next_due, None);
    assert_eq!(summary.progress, 1.0);
}
