//! Doctor directory commands for CLI.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use clap::Subcommand;
use eraya_core::directory::render::render_chips;
use eraya_core::{CategoryFilter, Config, DirectoryController, DirectoryEvent, ProviderId, TimeSlot};

use crate::host::TerminalHost;

#[derive(Subcommand)]
pub enum DoctorsAction {
    /// List doctors, optionally filtered by specialty and/or search text
    List {
        /// Specialty tag (gynecologist, endocrinologist, pcos, nutritionist,
        /// therapist) or "all"
        #[arg(long)]
        specialty: Option<CategoryFilter>,
        /// Search name, specialty, location and hospital
        #[arg(long)]
        search: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the category chips
    Chips {
        /// Active specialty (default: all)
        #[arg(long, default_value = "all")]
        specialty: CategoryFilter,
    },
    /// Show contact details for a doctor
    Contact {
        /// Doctor ID
        id: ProviderId,
        /// Open the dialer
        #[arg(long, conflicts_with = "email")]
        call: bool,
        /// Open the mail client
        #[arg(long)]
        email: bool,
        /// Print launch targets instead of opening them
        #[arg(long)]
        dry_run: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Book an appointment (nothing is stored)
    Book {
        /// Doctor ID
        id: ProviderId,
        /// Your full name
        #[arg(long)]
        name: Option<String>,
        /// Your phone number
        #[arg(long)]
        phone: Option<String>,
        /// Preferred date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Preferred time: 09:00, 10:00, 11:00, 14:00, 15:00 or 16:00
        #[arg(long)]
        time: Option<TimeSlot>,
        /// Reason for visit
        #[arg(long)]
        reason: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Call emergency services
    Emergency {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
        /// Print the dial target instead of opening it
        #[arg(long)]
        dry_run: bool,
    },
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn controller(json: bool, dry_run: bool) -> CliResult<DirectoryController<TerminalHost>> {
    let config = Config::load_or_default();
    let store = config.load_store()?;
    Ok(DirectoryController::new(
        store,
        config.directory_settings(),
        TerminalHost::new(json, dry_run),
    ))
}

fn print_event(event: &DirectoryEvent) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(event)?);
    Ok(())
}

fn confirm(prompt: &str) -> CliResult<bool> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}

pub fn run(action: DoctorsAction) -> CliResult<()> {
    match action {
        DoctorsAction::List { specialty, search, json } => {
            let mut c = controller(json, true)?;
            c.init();
            if let Some(category) = specialty {
                c.apply_filter(category);
            }
            if let Some(query) = search {
                c.host_mut().set_query(&query);
                c.search_from_input();
            }
            c.host().print_view()?;
        }
        DoctorsAction::Chips { specialty } => {
            let store = Config::load_or_default().load_store()?;
            for chip in render_chips(&specialty, &store) {
                let marker = if chip.active { "*" } else { " " };
                println!("{marker} {:<16} {}", chip.category.to_string(), chip.label);
            }
        }
        DoctorsAction::Contact { id, call, email, dry_run, json } => {
            let mut c = controller(json, dry_run)?;
            if c.contact(id).is_none() {
                return Ok(());
            }
            c.host().print_modal()?;
            if call {
                c.call_provider();
            } else if email {
                c.email_provider();
            }
        }
        DoctorsAction::Book { id, name, phone, date, time, reason, json } => {
            let mut c = controller(json, true)?;
            match c.book(id) {
                None => return Ok(()),
                Some(DirectoryEvent::BookingRejected { .. }) => std::process::exit(1),
                Some(_) => {}
            }
            if !json {
                c.host().print_modal()?;
            }
            c.update_draft(|draft| {
                draft.name = name.unwrap_or_default();
                draft.phone = phone.unwrap_or_default();
                draft.date = date;
                draft.time_slot = time;
                draft.reason = reason.filter(|r| !r.trim().is_empty());
            });
            let event = c.submit_booking()?;
            if json {
                print_event(&event)?;
            }
        }
        DoctorsAction::Emergency { yes, dry_run } => {
            let confirmed =
                yes || confirm("This will call emergency services. Do you want to proceed?")?;
            let mut c = controller(false, dry_run)?;
            if c.call_emergency(confirmed).is_none() {
                println!("cancelled");
            }
        }
    }
    Ok(())
}
