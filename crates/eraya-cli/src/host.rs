//! Terminal implementation of the directory host traits.

use eraya_core::directory::{Launcher, Notifier, NoticeKind, ViewHost};
use eraya_core::{DirectoryView, LaunchTarget, ModalView, Notice};
use tracing::warn;

/// Collects views while a command runs and prints them once at the end.
///
/// Notices and dry-run launch targets print immediately. Warnings always go
/// to stderr, and in JSON mode everything else does too so stdout stays
/// parseable.
pub struct TerminalHost {
    json: bool,
    dry_run: bool,
    query: String,
    view: Option<DirectoryView>,
    modal: Option<ModalView>,
}

impl TerminalHost {
    pub fn new(json: bool, dry_run: bool) -> Self {
        Self {
            json,
            dry_run,
            query: String::new(),
            view: None,
            modal: None,
        }
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn print_view(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(view) = &self.view {
            if self.json {
                println!("{}", serde_json::to_string_pretty(view)?);
            } else {
                print!("{view}");
            }
        }
        Ok(())
    }

    pub fn print_modal(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(modal) = &self.modal {
            if self.json {
                println!("{}", serde_json::to_string_pretty(modal)?);
            } else {
                print!("{modal}");
            }
        }
        Ok(())
    }
}

impl ViewHost for TerminalHost {
    fn mount(&mut self, view: &DirectoryView) {
        self.view = Some(view.clone());
    }

    fn show_modal(&mut self, modal: &ModalView) {
        self.modal = Some(modal.clone());
    }

    fn dispose_modal(&mut self) {
        self.modal = None;
    }

    fn read_query(&self) -> String {
        self.query.clone()
    }
}

impl Launcher for TerminalHost {
    fn launch(&mut self, target: &LaunchTarget) {
        if self.dry_run {
            if self.json {
                eprintln!("launch: {}", target.as_str());
            } else {
                println!("launch: {}", target.as_str());
            }
            return;
        }
        if let Err(e) = open::that(target.as_str()) {
            warn!(link = target.as_str(), error = %e, "could not open launch target");
            eprintln!("could not open {}: {e}", target.as_str());
        }
    }
}

impl Notifier for TerminalHost {
    fn notify(&mut self, notice: &Notice) {
        match notice.kind {
            NoticeKind::Info if !self.json => println!("{}", notice.text),
            _ => eprintln!("{}", notice.text),
        }
    }
}
