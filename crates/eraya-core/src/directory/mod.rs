//! Doctor directory: provider store, filter/search, rendering and the
//! contact/booking modal flow.

pub mod controller;
pub mod filter;
pub mod host;
pub mod modal;
pub mod provider;
pub mod render;
pub mod store;

pub use controller::{DirectoryController, DirectorySettings};
pub use filter::{LastApplied, ViewState};
pub use host::{Host, LaunchTarget, Launcher, Notice, NoticeKind, Notifier, RecordingHost, ViewHost};
pub use modal::{
    BookingConfirmation, BookingDraft, BookingField, BookingOpenOutcome, CloseReason,
    ModalController, ModalState, TimeSlot, UNAVAILABLE_NOTICE,
};
pub use provider::{CategoryFilter, Provider, ProviderId, Specialty};
pub use render::{
    Availability, BookingFormView, CardAction, ContactView, DirectoryView, FilterChip, Link,
    ModalView, ProviderCard,
};
pub use store::DirectoryStore;
