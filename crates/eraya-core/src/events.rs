use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::directory::{CategoryFilter, CloseReason, ProviderId, TimeSlot};

/// Which modal variant an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalKind {
    Contact,
    Booking,
}

/// Every state change in the directory produces an Event.
/// Hosts may log them or forward them; the CLI prints them as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DirectoryEvent {
    DirectoryRendered {
        visible: Vec<ProviderId>,
        at: DateTime<Utc>,
    },
    FilterApplied {
        category: CategoryFilter,
        visible: Vec<ProviderId>,
        at: DateTime<Utc>,
    },
    SearchApplied {
        query: String,
        visible: Vec<ProviderId>,
        at: DateTime<Utc>,
    },
    ModalOpened {
        kind: ModalKind,
        provider_id: ProviderId,
        at: DateTime<Utc>,
    },
    ModalClosed {
        kind: ModalKind,
        provider_id: ProviderId,
        reason: CloseReason,
        at: DateTime<Utc>,
    },
    /// Booking refused because the provider is unavailable.
    BookingRejected {
        provider_id: ProviderId,
        notice: String,
        at: DateTime<Utc>,
    },
    BookingConfirmed {
        provider_id: ProviderId,
        date: NaiveDate,
        time_slot: TimeSlot,
        message: String,
        at: DateTime<Utc>,
    },
    /// Dial or mail target handed to the launcher.
    ContactLaunched {
        target: String,
        at: DateTime<Utc>,
    },
}
