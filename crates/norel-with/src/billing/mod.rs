pub mod documents;
mod export;
mod schedule;

pub use documents::{BillingItem, DocumentKind, InvoiceBreakdown};
pub use export::write_schedule_csv;
pub use schedule::{derive_schedule, PaymentScheduleEntry, ScheduleSummary, ScheduleTerms};
