//! Contact/booking modal state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Closed -> ContactOpen -> Closed      (close button, backdrop)
//! Closed -> BookingOpen -> Closed      (cancel, close button, backdrop, submit)
//! ```
//!
//! Only one modal is open at a time: opening a modal replaces whatever was
//! open before. Booking an unavailable provider leaves the state unchanged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::provider::{Provider, ProviderId};
use crate::error::BookingValidationError;

/// Notice shown when booking an unavailable provider.
pub const UNAVAILABLE_NOTICE: &str =
    "Sorry, this doctor is not available today. Please try another day or contact them directly.";

/// Preferred appointment time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "09:00")]
    Nine,
    #[serde(rename = "10:00")]
    Ten,
    #[serde(rename = "11:00")]
    Eleven,
    #[serde(rename = "14:00")]
    Fourteen,
    #[serde(rename = "15:00")]
    Fifteen,
    #[serde(rename = "16:00")]
    Sixteen,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 6] = [
        TimeSlot::Nine,
        TimeSlot::Ten,
        TimeSlot::Eleven,
        TimeSlot::Fourteen,
        TimeSlot::Fifteen,
        TimeSlot::Sixteen,
    ];

    /// 24-hour value, e.g. `"14:00"`.
    pub fn value(self) -> &'static str {
        match self {
            TimeSlot::Nine => "09:00",
            TimeSlot::Ten => "10:00",
            TimeSlot::Eleven => "11:00",
            TimeSlot::Fourteen => "14:00",
            TimeSlot::Fifteen => "15:00",
            TimeSlot::Sixteen => "16:00",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::Nine => "09:00 AM",
            TimeSlot::Ten => "10:00 AM",
            TimeSlot::Eleven => "11:00 AM",
            TimeSlot::Fourteen => "02:00 PM",
            TimeSlot::Fifteen => "03:00 PM",
            TimeSlot::Sixteen => "04:00 PM",
        }
    }
}

impl FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        TimeSlot::ALL
            .into_iter()
            .find(|slot| slot.value() == s || slot.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let valid: Vec<&str> = TimeSlot::ALL.iter().map(|t| t.value()).collect();
                format!(
                    "unknown time slot '{s}' (expected one of {})",
                    valid.join(", ")
                )
            })
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Required fields of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingField {
    Name,
    Phone,
    Date,
    TimeSlot,
}

impl BookingField {
    pub fn label(self) -> &'static str {
        match self {
            BookingField::Name => "Your Name",
            BookingField::Phone => "Phone Number",
            BookingField::Date => "Preferred Date",
            BookingField::TimeSlot => "Preferred Time",
        }
    }
}

/// In-progress booking form. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub name: String,
    pub phone: String,
    pub date: Option<NaiveDate>,
    pub time_slot: Option<TimeSlot>,
    pub reason: Option<String>,
}

impl BookingDraft {
    /// Empty required fields, in form order.
    pub fn missing_fields(&self) -> Vec<BookingField> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(BookingField::Name);
        }
        if self.phone.trim().is_empty() {
            missing.push(BookingField::Phone);
        }
        if self.date.is_none() {
            missing.push(BookingField::Date);
        }
        if self.time_slot.is_none() {
            missing.push(BookingField::TimeSlot);
        }
        missing
    }

    pub fn validate(&self, today: NaiveDate) -> Result<(), BookingValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(BookingValidationError::MissingFields(missing));
        }
        match self.date {
            Some(date) if date < today => Err(BookingValidationError::DateInPast { date, today }),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ModalState {
    #[default]
    Closed,
    ContactOpen {
        provider_id: ProviderId,
    },
    BookingOpen {
        provider_id: ProviderId,
        draft: BookingDraft,
    },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn provider_id(&self) -> Option<ProviderId> {
        match self {
            ModalState::Closed => None,
            ModalState::ContactOpen { provider_id }
            | ModalState::BookingOpen { provider_id, .. } => Some(*provider_id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    /// The × button.
    CloseButton,
    /// Click outside the modal content.
    Backdrop,
    /// Cancel button on the booking form.
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOpenOutcome {
    Opened,
    /// Provider is not taking bookings. Carries the notice text.
    Unavailable(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub provider_id: ProviderId,
    pub provider_name: String,
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
    pub message: String,
}

impl BookingConfirmation {
    fn new(provider: &Provider, date: NaiveDate, time_slot: TimeSlot) -> Self {
        Self {
            provider_id: provider.id,
            provider_name: provider.name.clone(),
            date,
            time_slot,
            message: format!(
                "Appointment booked successfully with {}!\n\nYou will receive a confirmation email shortly.",
                provider.name
            ),
        }
    }
}

/// Owns the single modal slot.
#[derive(Debug, Clone, Default)]
pub struct ModalController {
    state: ModalState,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// Open the contact modal. Returns the modal it replaced, if any.
    pub fn open_contact(&mut self, provider: &Provider) -> Option<ModalState> {
        let previous = self.take_open();
        self.state = ModalState::ContactOpen {
            provider_id: provider.id,
        };
        previous
    }

    /// Open the booking form, or refuse for an unavailable provider.
    ///
    /// On refusal the current modal, if any, is left as it was.
    pub fn open_booking(
        &mut self,
        provider: &Provider,
    ) -> (BookingOpenOutcome, Option<ModalState>) {
        if !provider.available {
            return (BookingOpenOutcome::Unavailable(UNAVAILABLE_NOTICE), None);
        }
        let previous = self.take_open();
        self.state = ModalState::BookingOpen {
            provider_id: provider.id,
            draft: BookingDraft::default(),
        };
        (BookingOpenOutcome::Opened, previous)
    }

    /// Mutable access to the draft while the booking form is open.
    pub fn draft_mut(&mut self) -> Option<&mut BookingDraft> {
        match &mut self.state {
            ModalState::BookingOpen { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Close whatever is open. Returns the closed state, `None` if nothing
    /// was open.
    pub fn close(&mut self) -> Option<ModalState> {
        self.take_open()
    }

    /// Validate and submit the booking form.
    ///
    /// `provider` must be the provider the form was opened for. On error
    /// the form stays open with the draft intact.
    pub fn submit(
        &mut self,
        provider: &Provider,
        today: NaiveDate,
    ) -> Result<BookingConfirmation, BookingValidationError> {
        let ModalState::BookingOpen { provider_id, draft } = &self.state else {
            return Err(BookingValidationError::NoBookingOpen);
        };
        if *provider_id != provider.id {
            return Err(BookingValidationError::NoBookingOpen);
        }
        draft.validate(today)?;

        let (Some(date), Some(slot)) = (draft.date, draft.time_slot) else {
            let missing = draft.missing_fields();
            return Err(BookingValidationError::MissingFields(missing));
        };
        let confirmation = BookingConfirmation::new(provider, date, slot);
        // Draft is dropped here; bookings are not stored.
        self.state = ModalState::Closed;
        Ok(confirmation)
    }

    fn take_open(&mut self) -> Option<ModalState> {
        match std::mem::take(&mut self.state) {
            ModalState::Closed => None,
            open => Some(open),
        }
    }
}
