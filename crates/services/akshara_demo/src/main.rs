// File: services/akshara_demo/src/main.rs
//
// Scripted walk through the booking widget: open the modal with the
// founder directory, pick a date and slot, fill the form, submit, and
// print the confirmation. Serves as the manual end-to-end harness for
// the engine; the real site shell is not part of this workspace.

use akshara_booking::{generate_time_slots, BookingModal, WidgetPhase};
use akshara_common::services::mock::MockBookingSubmitter;
use akshara_common::services::BookingSubmitter;
use akshara_common::{is_webhook_enabled, logging};
use akshara_config::load_config;
use akshara_content::{FOUNDERS, ORG};
use akshara_webhook::WebhookSubmitter;
use chrono::Local;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    logging::init();
    let config = Arc::new(load_config().expect("Failed to load config"));

    println!("{} — booking demo", ORG.name);
    println!("{}", ORG.short_intro);
    println!("Theme preference: {:?}", config.theme);

    let mut modal = BookingModal::new(FOUNDERS.to_vec());

    if is_webhook_enabled(&config) {
        let submitter =
            WebhookSubmitter::from_app_config(&config).expect("webhook configuration missing");
        run_booking(&mut modal, &submitter).await;
    } else {
        println!("Booking webhook disabled; submission will not leave this machine.");
        run_booking(&mut modal, &MockBookingSubmitter::succeeding()).await;
    }

    modal.close();
}

async fn run_booking<S: BookingSubmitter>(modal: &mut BookingModal, submitter: &S) {
    let today = Local::now().date_naive();
    modal.open(today, Some(FOUNDERS[0].id));

    println!("Staff options:");
    for option in modal.staff_options() {
        println!("  [{}] {}", option.value, option.label);
    }

    let state = modal.state_mut().expect("widget is open");
    let view = state.calendar().view();
    println!(
        "Viewing {}: {} leading blanks, {} day cells",
        view.label(),
        view.leading_blanks(),
        view.day_count()
    );

    // Mid-month day, late-morning slot.
    state.calendar_mut().select_day(15);
    let slots = generate_time_slots();
    state.calendar_mut().select_time(&slots[3]);

    let form = state.form_mut();
    form.name = "Demo Visitor".to_string();
    form.email = "demo@example.com".to_string();
    form.phone = "555-0100".to_string();
    form.message = "Walking through the booking flow end to end.".to_string();

    match state.submit(submitter).await {
        Ok(WidgetPhase::Success) => {
            let confirmation = state.confirmation().expect("confirmed booking has a view");
            println!("Booking confirmed for {}", confirmation.scheduled_for);
            println!("A confirmation email has been sent to {}", confirmation.email);
        }
        Ok(WidgetPhase::Form) => println!("Submission declined; the form is still open."),
        Err(err) => println!("{}", err),
    }
}
