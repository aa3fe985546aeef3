use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

/// Product constants shaping a subscription payment plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleTerms {
    /// Leading entries settled up front, before any bank withdrawal.
    pub prepayment_count: u32,
    /// Length of the whole plan, prepayments included.
    pub total_installments: u32,
    /// Months between registration and the first withdrawal.
    pub withdrawal_offset_months: u32,
    pub withdrawal_day: u32,
}

impl Default for ScheduleTerms {
    fn default() -> Self {
        Self {
            prepayment_count: 2,
            total_installments: 82,
            withdrawal_offset_months: 2,
            withdrawal_day: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentScheduleEntry {
    pub sequence: u32,
    pub due_date: Option<NaiveDate>,
    pub amount: u64,
    pub is_paid: bool,
    pub is_prepayment: bool,
}

impl PaymentScheduleEntry {
    pub fn year(&self) -> Option<i32> {
        self.due_date.map(|date| date.year())
    }

    pub fn month(&self) -> Option<u32> {
        self.due_date.map(|date| date.month())
    }
}

impl ScheduleTerms {
    /// First withdrawal: the registration month shifted by the offset, on the
    /// withdrawal day. Pinning the day keeps month arithmetic free of
    /// end-of-month clamping.
    pub fn withdrawal_start(&self, registration: NaiveDate) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(registration.year(), registration.month(), self.withdrawal_day)?
            .checked_add_months(Months::new(self.withdrawal_offset_months))
    }

    /// Sum of every installment, or `None` when it does not fit in a `u64`.
    pub fn plan_total(&self, monthly_amount: u64) -> Option<u64> {
        monthly_amount.checked_mul(u64::from(self.total_installments))
    }

    /// Builds the full plan. An entry is paid when its due date is strictly
    /// before `now`; prepayments are always paid.
    pub fn derive(
        &self,
        monthly_amount: u64,
        registration: NaiveDate,
        now: NaiveDate,
    ) -> Vec<PaymentScheduleEntry> {
        let prepayments = self.prepayment_count.min(self.total_installments);
        let start = self.withdrawal_start(registration);

        (1..=self.total_installments)
            .map(|sequence| {
                if sequence <= prepayments {
                    return PaymentScheduleEntry {
                        sequence,
                        due_date: None,
                        amount: monthly_amount,
                        is_paid: true,
                        is_prepayment: true,
                    };
                }

                let offset = sequence - prepayments - 1;
                let due_date = start.and_then(|start| start.checked_add_months(Months::new(offset)));
                PaymentScheduleEntry {
                    sequence,
                    due_date,
                    amount: monthly_amount,
                    is_paid: due_date.is_some_and(|date| date < now),
                    is_prepayment: false,
                }
            })
            .collect()
    }
}

/// Plan under the standard terms: two prepayments then eighty withdrawals.
pub fn derive_schedule(
    monthly_amount: u64,
    registration: NaiveDate,
    now: NaiveDate,
) -> Vec<PaymentScheduleEntry> {
    ScheduleTerms::default().derive(monthly_amount, registration, now)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleSummary {
    pub installments: usize,
    pub total_amount: u64,
    pub paid_count: usize,
    pub paid_amount: u64,
    pub remaining_count: usize,
    pub remaining_amount: u64,
    pub progress: f64,
    pub next_due: Option<NaiveDate>,
}

fn saturating_total<'a>(entries: impl Iterator<Item = &'a PaymentScheduleEntry>) -> u64 {
    entries.fold(0, |total, entry| total.saturating_add(entry.amount))
}

impl ScheduleSummary {
    /// Amounts saturate at `u64::MAX`; callers accepting arbitrary amounts
    /// should reject them up front with [`ScheduleTerms::plan_total`].
    pub fn from_entries(entries: &[PaymentScheduleEntry]) -> Self {
        let total_amount = saturating_total(entries.iter());
        let paid: Vec<&PaymentScheduleEntry> = entries.iter().filter(|entry| entry.is_paid).collect();
        let paid_amount = saturating_total(paid.iter().copied());
        let progress = if entries.is_empty() {
            0.0
        } else {
            paid.len() as f64 / entries.len() as f64
        };
        let next_due = entries
            .iter()
            .find(|entry| !entry.is_paid)
            .and_then(|entry| entry.due_date);

        Self {
            installments: entries.len(),
            total_amount,
            paid_count: paid.len(),
            paid_amount,
            remaining_count: entries.len() - paid.len(),
            remaining_amount: total_amount.saturating_sub(paid_amount),
            progress,
            next_due,
        }
    }
}
