//! # Eraya Core Library
//!
//! This library provides the doctor directory behind the Eraya period
//! wellness app. All logic lives here; a front end (the `eraya` CLI, or a
//! browser/desktop shell) only implements the host traits and forwards
//! user input to the controller.
//!
//! ## Architecture
//!
//! - **Directory Store**: the immutable provider list with lookup by id
//! - **Filter/Search**: category filter and case-insensitive search
//! - **Renderer**: pure mapping from providers to view models
//! - **Modal Controller**: contact/booking state machine, one modal at a time
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`DirectoryController`]: owner of all transient directory state
//! - [`Host`]: view, launcher and notification collaborators
//! - [`Config`]: application configuration management

pub mod directory;
pub mod error;
pub mod events;
pub mod storage;

pub use directory::{
    BookingDraft, CategoryFilter, CloseReason, DirectoryController, DirectorySettings,
    DirectoryStore, DirectoryView, Host, LaunchTarget, ModalState, ModalView, Notice, Provider,
    ProviderId, RecordingHost, Specialty, TimeSlot,
};
pub use error::{BookingValidationError, ConfigError, CoreError, DirectoryError};
pub use events::{DirectoryEvent, ModalKind};
pub use storage::Config;
