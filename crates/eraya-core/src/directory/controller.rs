//! Directory controller.
//!
//! Single owner of the transient directory state: the active filter and
//! query, and the open modal. Every host input goes through one of its
//! methods; nothing else mutates the state.

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use super::filter::ViewState;
use super::host::{Host, LaunchTarget, Notice};
use super::modal::{BookingDraft, BookingOpenOutcome, CloseReason, ModalController, ModalState};
use super::provider::{CategoryFilter, Provider, ProviderId};
use super::render::{
    dial_target, mail_target, render_booking, render_chips, render_contact, render_directory,
    ModalView,
};
use super::store::DirectoryStore;
use crate::error::BookingValidationError;
use crate::events::{DirectoryEvent, ModalKind};

/// Behavior switches for the directory view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySettings {
    /// Intersect search results with the active category.
    pub compose_search_with_filter: bool,
    /// Shown when no provider matches. `None` renders a blank grid.
    pub empty_state_message: Option<String>,
    pub emergency_number: String,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            compose_search_with_filter: false,
            empty_state_message: Some("No doctors match your search.".to_string()),
            emergency_number: "112".to_string(),
        }
    }
}

pub struct DirectoryController<H: Host> {
    store: DirectoryStore,
    settings: DirectorySettings,
    view: ViewState,
    modal: ModalController,
    host: H,
    today: Option<NaiveDate>,
}

impl<H: Host> DirectoryController<H> {
    pub fn new(store: DirectoryStore, settings: DirectorySettings, host: H) -> Self {
        let view = ViewState::new(settings.compose_search_with_filter);
        Self {
            store,
            settings,
            view,
            modal: ModalController::new(),
            host,
            today: None,
        }
    }

    /// Pin "today" instead of reading the clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn store(&self) -> &DirectoryStore {
        &self.store
    }

    pub fn settings(&self) -> &DirectorySettings {
        &self.settings
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn modal_state(&self) -> &ModalState {
        self.modal.state()
    }

    pub fn visible(&self) -> Vec<&Provider> {
        self.view.visible(&self.store)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Earliest bookable date: the pinned date, or the current UTC date.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }

    // ── Directory ────────────────────────────────────────────────────

    /// First render.
    pub fn init(&mut self) -> DirectoryEvent {
        let visible = self.render();
        DirectoryEvent::DirectoryRendered {
            visible,
            at: Utc::now(),
        }
    }

    pub fn apply_filter(&mut self, category: CategoryFilter) -> DirectoryEvent {
        self.view.apply_filter(category.clone());
        let visible = self.render();
        DirectoryEvent::FilterApplied {
            category,
            visible,
            at: Utc::now(),
        }
    }

    pub fn apply_search(&mut self, query: &str) -> DirectoryEvent {
        self.view.apply_search(query);
        let visible = self.render();
        DirectoryEvent::SearchApplied {
            query: query.to_string(),
            visible,
            at: Utc::now(),
        }
    }

    /// Search with whatever is in the host's query field.
    pub fn search_from_input(&mut self) -> DirectoryEvent {
        let query = self.host.read_query();
        self.apply_search(&query)
    }

    /// Key pressed in the search field. Only Enter triggers a search.
    pub fn search_key_pressed(&mut self, key: &str) -> Option<DirectoryEvent> {
        (key == "Enter").then(|| self.search_from_input())
    }

    fn render(&mut self) -> Vec<ProviderId> {
        let visible = self.view.visible(&self.store);
        let ids = visible.iter().map(|p| p.id).collect();
        let view = render_directory(
            &visible,
            render_chips(self.view.category(), &self.store),
            self.settings.empty_state_message.as_deref(),
        );
        self.host.mount(&view);
        ids
    }

    // ── Modals ───────────────────────────────────────────────────────

    /// Open the contact modal. Unknown ids are ignored.
    pub fn contact(&mut self, id: ProviderId) -> Option<DirectoryEvent> {
        let Some(provider) = self.store.get(id) else {
            debug!(provider_id = id, "contact for unknown provider ignored");
            return None;
        };
        let replaced = self.modal.open_contact(provider);
        let view = ModalView::Contact(render_contact(provider));
        self.replace_modal(replaced, &view);
        info!(provider_id = id, "contact modal opened");
        Some(DirectoryEvent::ModalOpened {
            kind: ModalKind::Contact,
            provider_id: id,
            at: Utc::now(),
        })
    }

    /// Open the booking form. Unknown ids are ignored; unavailable
    /// providers produce a notice and no modal.
    pub fn book(&mut self, id: ProviderId) -> Option<DirectoryEvent> {
        let today = self.today();
        let Some(provider) = self.store.get(id) else {
            debug!(provider_id = id, "booking for unknown provider ignored");
            return None;
        };
        match self.modal.open_booking(provider) {
            (BookingOpenOutcome::Unavailable(notice), _) => {
                warn!(provider_id = id, "booking rejected: provider unavailable");
                self.host.notify(&Notice::warning(notice));
                Some(DirectoryEvent::BookingRejected {
                    provider_id: id,
                    notice: notice.to_string(),
                    at: Utc::now(),
                })
            }
            (BookingOpenOutcome::Opened, replaced) => {
                let view = ModalView::Booking(render_booking(provider, today));
                self.replace_modal(replaced, &view);
                info!(provider_id = id, "booking modal opened");
                Some(DirectoryEvent::ModalOpened {
                    kind: ModalKind::Booking,
                    provider_id: id,
                    at: Utc::now(),
                })
            }
        }
    }

    fn replace_modal(&mut self, replaced: Option<ModalState>, view: &ModalView) {
        if let Some(previous) = replaced {
            debug!(provider_id = ?previous.provider_id(), "closing modal before opening another");
            self.host.dispose_modal();
        }
        self.host.show_modal(view);
    }

    /// Close the open modal. No-op when nothing is open.
    pub fn close_modal(&mut self, reason: CloseReason) -> Option<DirectoryEvent> {
        let closed = self.modal.close()?;
        self.host.dispose_modal();
        let (kind, provider_id) = match closed {
            ModalState::ContactOpen { provider_id } => (ModalKind::Contact, provider_id),
            ModalState::BookingOpen { provider_id, .. } => (ModalKind::Booking, provider_id),
            ModalState::Closed => return None,
        };
        info!(provider_id, ?reason, "modal closed");
        Some(DirectoryEvent::ModalClosed {
            kind,
            provider_id,
            reason,
            at: Utc::now(),
        })
    }

    /// Edit the booking draft. Returns `false` when no booking form is open.
    pub fn update_draft(&mut self, edit: impl FnOnce(&mut BookingDraft)) -> bool {
        match self.modal.draft_mut() {
            Some(draft) => {
                edit(draft);
                true
            }
            None => false,
        }
    }

    /// Submit the booking form.
    ///
    /// # Errors
    ///
    /// Returns a validation error when required fields are empty or the
    /// date is in the past; the form stays open with its entries intact.
    pub fn submit_booking(&mut self) -> Result<DirectoryEvent, BookingValidationError> {
        let today = self.today();
        let provider_id = match self.modal.state() {
            ModalState::BookingOpen { provider_id, .. } => *provider_id,
            _ => return Err(BookingValidationError::NoBookingOpen),
        };
        let Some(provider) = self.store.get(provider_id) else {
            return Err(BookingValidationError::NoBookingOpen);
        };

        let confirmation = self.modal.submit(provider, today).inspect_err(|e| {
            debug!(provider_id, error = %e, "booking submission blocked");
        })?;

        self.host.notify(&Notice::info(confirmation.message.clone()));
        self.host.dispose_modal();
        info!(
            provider_id,
            date = %confirmation.date,
            slot = %confirmation.time_slot,
            "booking confirmed"
        );
        Ok(DirectoryEvent::BookingConfirmed {
            provider_id,
            date: confirmation.date,
            time_slot: confirmation.time_slot,
            message: confirmation.message,
            at: Utc::now(),
        })
    }

    // ── Launch targets ───────────────────────────────────────────────

    /// "Call Now" from the open contact modal.
    pub fn call_provider(&mut self) -> Option<DirectoryEvent> {
        let provider = self.contact_provider()?;
        let target = LaunchTarget::Dial(dial_target(&provider.phone));
        Some(self.launch(target))
    }

    /// "Send Email" from the open contact modal.
    pub fn email_provider(&mut self) -> Option<DirectoryEvent> {
        let provider = self.contact_provider()?;
        let target = LaunchTarget::Mail(mail_target(&provider.email));
        Some(self.launch(target))
    }

    /// Dial the emergency number once the user has confirmed.
    pub fn call_emergency(&mut self, confirmed: bool) -> Option<DirectoryEvent> {
        if !confirmed {
            return None;
        }
        let target = LaunchTarget::Dial(dial_target(&self.settings.emergency_number));
        warn!(dial = target.as_str(), "emergency call requested");
        Some(self.launch(target))
    }

    fn contact_provider(&self) -> Option<&Provider> {
        match self.modal.state() {
            ModalState::ContactOpen { provider_id } => self.store.get(*provider_id),
            _ => None,
        }
    }

    fn launch(&mut self, target: LaunchTarget) -> DirectoryEvent {
        self.host.launch(&target);
        DirectoryEvent::ContactLaunched {
            target: target.as_str().to_string(),
            at: Utc::now(),
        }
    }
}
