use chrono::NaiveDate;
use norel_with::billing::ScheduleTerms;
use norel_with::error::AppError;
use norel_with::journey::{decode_script, DecodedAction, NorelAction};
use std::fs;
use std::path::Path;
use tracing::warn;

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Loads a recorded session. Unrecognised entries are dropped with a warning
/// so the rest of the session still replays.
pub(crate) fn load_action_script(path: &Path) -> Result<Vec<NorelAction>, AppError> {
    let raw = fs::read_to_string(path)?;
    let decoded = decode_script(&raw)?;

    Ok(decoded
        .into_iter()
        .filter_map(|entry| match entry {
            DecodedAction::Action(action) => Some(action),
            DecodedAction::Skipped { index, reason } => {
                warn!(index, %reason, "skipping unrecognised action");
                None
            }
        })
        .collect())
}

/// Rejects monthly amounts whose plan total cannot be represented.
pub(crate) fn checked_monthly_amount(amount: u64, terms: &ScheduleTerms) -> Result<u64, AppError> {
    match terms.plan_total(amount) {
        Some(_) => Ok(amount),
        None => Err(AppError::AmountOutOfRange {
            amount,
            installments: terms.total_installments,
        }),
    }
}

pub(crate) fn format_yen(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("¥{grouped}")
}

const METER_WIDTH: usize = 20;

/// Text gauge for a 0.0..=1.0 meter position, e.g. `[#####---------------]`.
pub(crate) fn score_meter(fraction: f64) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * METER_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(METER_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_yen(0), "¥0");
        assert_eq!(format_yen(39_800), "¥39,800");
        assert_eq!(format_yen(3_263_600), "¥3,263,600");
    }

    #[test]
    fn oversized_amount_is_rejected_before_deriving() {
        let terms = ScheduleTerms::default();
        assert_eq!(checked_monthly_amount(39_800, &terms).expect("fits"), 39_800);

        let err = checked_monthly_amount(u64::MAX / 10, &terms).expect_err("overflows the plan");
        assert!(matches!(
            err,
            AppError::AmountOutOfRange {
                installments: 82,
                ..
            }
        ));
        assert!(err.to_string().contains("82 installments"));
    }

    #[test]
    fn meter_fills_with_the_score() {
        use norel_with::journey::score_fraction;

        assert_eq!(score_meter(score_fraction(300)), format!("[{}]", "-".repeat(20)));
        assert_eq!(score_meter(score_fraction(850)), format!("[{}]", "#".repeat(20)));
        // 750 sits at 450/550 of the range, 16.36 cells
        assert_eq!(
            score_meter(score_fraction(750)),
            format!("[{}{}]", "#".repeat(16), "-".repeat(4))
        );
    }

    #[test]
    fn parse_date_reports_input() {
        assert!(parse_date(" 2025-01-15 ").is_ok());
        let err = parse_date("15/01/2025").expect_err("wrong format rejected");
        assert!(err.contains("15/01/2025"));
    }
}
