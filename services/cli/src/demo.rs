use crate::infra::{
    checked_monthly_amount, format_yen, load_action_script, parse_date, score_meter,
};
use chrono::{Datelike, Local, NaiveDate};
use clap::Args;
use norel_with::billing::documents::{self, DocumentKind};
use norel_with::billing::{write_schedule_csv, InvoiceBreakdown, ScheduleSummary};
use norel_with::config::AppConfig;
use norel_with::error::AppError;
use norel_with::journey::{
    catalog, road_progress, score_fraction, station_index, AlertKind, MissionOutcome,
    NorelProvider, NorelState, ScoreTier,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Registration date used for the payment plan (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) registration: Option<NaiveDate>,
    /// Override the evaluation date (defaults to today).
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Raise a license renewal alert halfway through the journey.
    #[arg(long)]
    pub(crate) with_alert: bool,
}

#[derive(Args, Debug)]
pub(crate) struct JourneyArgs {
    /// JSON array of actions, e.g. [{"type":"LOGIN"},{"type":"SET_STEP","payload":3}]
    #[arg(long)]
    pub(crate) script: PathBuf,
    /// Print the final state as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScheduleArgs {
    /// Vehicle registration date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) registration: NaiveDate,
    /// Evaluation date for paid status (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Monthly amount in yen (defaults to the contract amount)
    #[arg(long)]
    pub(crate) amount: Option<u64>,
    /// Include every installment in the output
    #[arg(long)]
    pub(crate) list: bool,
    /// Write the schedule to a CSV file
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

pub(crate) fn run_journey(args: JourneyArgs) -> Result<(), AppError> {
    let JourneyArgs { script, json } = args;
    let actions = load_action_script(&script)?;

    let mut provider = NorelProvider::new();
    let store = provider.mount();
    for action in actions {
        store.dispatch(action);
    }
    info!(path = %script.display(), "action script replayed");

    let state = provider.store()?.state();
    if json {
        println!("{}", serde_json::to_string_pretty(state)?);
    } else {
        render_state(state);
    }

    Ok(())
}

pub(crate) fn run_schedule(args: ScheduleArgs, config: &AppConfig) -> Result<(), AppError> {
    let ScheduleArgs {
        registration,
        today,
        amount,
        list,
        csv,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let amount = checked_monthly_amount(
        amount.unwrap_or_else(|| catalog::default_payment_info().amount),
        &config.schedule,
    )?;
    let entries = config.schedule.derive(amount, registration, today);
    let summary = ScheduleSummary::from_entries(&entries);

    println!("Payment schedule (registered {registration}, as of {today})");
    render_summary(&summary);

    if list {
        println!("Installments:");
        for entry in &entries {
            let due = entry
                .due_date
                .map(|date| date.to_string())
                .unwrap_or_else(|| "prepayment".to_string());
            let status = if entry.is_paid { "paid" } else { "scheduled" };
            println!(
                "  - #{:>2} {:<10} {} [{}]",
                entry.sequence,
                due,
                format_yen(entry.amount),
                status
            );
        }
    }

    if let Some(path) = csv {
        let writer = BufWriter::new(File::create(&path)?);
        write_schedule_csv(writer, &entries)?;
        info!(path = %path.display(), rows = entries.len(), "schedule exported");
        println!("Schedule written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let DemoArgs {
        registration,
        today,
        with_alert,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let registration = registration.unwrap_or(today);

    let mut provider = NorelProvider::new();
    let store = provider.mount();
    store.login();

    println!("NOREL WITH journey demo");
    let score = store.state().norel_score;
    println!(
        "- NOREL SCORE {} ({}) {}",
        score,
        ScoreTier::for_score(score).label(),
        score_meter(score_fraction(score))
    );

    let mut alert_pending = with_alert;
    loop {
        let step = store.state().current_step;
        if alert_pending && step.get() == 5 {
            store.set_alert(Some(AlertKind::License));
            alert_pending = false;
        }

        let button = match store.state().alert {
            Some(alert) => {
                let alert_info = catalog::alert_info(alert);
                println!("\n  ! {}", alert_info.title);
                alert_info.button_label
            }
            None => {
                let step_info = catalog::step_info(step);
                let phase = catalog::phase_for(step);
                println!(
                    "\nStep {} [{} / {}] {}",
                    step,
                    step_info.phase.label(),
                    phase.name,
                    step_info.title
                );
                println!(
                    "  station {} of {} | road {:.0}%",
                    station_index(step) + 1,
                    catalog::stations().len(),
                    road_progress(step) * 100.0
                );
                step_info.button_label
            }
        };

        println!("  > {button}");
        match store.perform_mission_action() {
            MissionOutcome::AlertCleared { alert } => {
                println!("  alert cleared: {}", alert.label());
            }
            MissionOutcome::StepAdvanced { to, celebrate, .. } => {
                if celebrate {
                    println!("  milestone reached, moving to step {to}");
                }
            }
            MissionOutcome::RecommendVehicle => {
                let vehicle = &store.state().vehicle_info;
                println!(
                    "  trade-in estimate for {}: {}",
                    vehicle.name,
                    format_yen(vehicle.estimated_value)
                );
                break;
            }
        }
    }

    let amount = store.state().payment_info.amount;
    let entries = config.schedule.derive(amount, registration, today);
    println!("\nPayment plan (registered {registration}, as of {today})");
    render_summary(&ScheduleSummary::from_entries(&entries));

    println!("\nDocuments (issued by {})", documents::ISSUER.name);
    for (index, receipt) in documents::receipts().iter().enumerate() {
        println!(
            "  - {} {} {} -> {}.html",
            documents::document_number(DocumentKind::Receipt, today.year(), index as u32 + 1),
            receipt.period,
            format_yen(receipt.amount),
            documents::document_stem(DocumentKind::Receipt, receipt.period)
        );
    }
    for (index, invoice) in documents::invoices().iter().enumerate() {
        let breakdown = InvoiceBreakdown::from_total(invoice.amount);
        println!(
            "  - {} {} {} (tax {}, due {})",
            documents::document_number(DocumentKind::Invoice, today.year(), index as u32 + 1),
            invoice.period,
            format_yen(breakdown.total),
            format_yen(breakdown.tax),
            documents::INVOICE_DUE_NOTE
        );
    }

    provider.unmount();
    Ok(())
}

fn render_summary(summary: &ScheduleSummary) {
    println!(
        "- {} installments | total {} | paid {} ({}) | remaining {} ({})",
        summary.installments,
        format_yen(summary.total_amount),
        summary.paid_count,
        format_yen(summary.paid_amount),
        summary.remaining_count,
        format_yen(summary.remaining_amount)
    );
    println!("- progress {:.1}%", summary.progress * 100.0);
    if let Some(next_due) = summary.next_due {
        println!("- next withdrawal {next_due}");
    }
}

fn render_state(state: &NorelState) {
    let step_info = catalog::step_info(state.current_step);
    println!(
        "Authenticated: {}",
        if state.is_authenticated { "yes" } else { "no" }
    );
    println!(
        "Step {} of 8: {} ({})",
        state.current_step,
        step_info.title,
        catalog::phase_for(state.current_step).name
    );
    println!("Menu open: {}", state.is_menu_open);
    match state.alert {
        Some(alert) => println!("Alert: {}", catalog::alert_info(alert).title),
        None => println!("Alert: none"),
    }
    println!(
        "Profile: {} / {} / {}",
        state.user_profile.name, state.user_profile.phone, state.user_profile.address
    );
}
