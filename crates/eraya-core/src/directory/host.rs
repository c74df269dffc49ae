//! Collaborator traits implemented by whatever displays the directory.
//!
//! The core never draws anything itself. It hands view models to a
//! [`ViewHost`], dial/mail targets to a [`Launcher`] and user-facing
//! messages to a [`Notifier`].

use serde::{Deserialize, Serialize};

use super::render::{DirectoryView, ModalView};

/// Target for the platform dialer or mail client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "lowercase")]
pub enum LaunchTarget {
    Dial(String),
    Mail(String),
}

impl LaunchTarget {
    pub fn as_str(&self) -> &str {
        match self {
            LaunchTarget::Dial(t) | LaunchTarget::Mail(t) => t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Warning,
}

/// Blocking message for the user (alert-style).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            text: text.into(),
        }
    }
}

pub trait ViewHost {
    /// Replace the mounted directory with `view`.
    fn mount(&mut self, view: &DirectoryView);
    fn show_modal(&mut self, modal: &ModalView);
    fn dispose_modal(&mut self);
    /// Current contents of the search input.
    fn read_query(&self) -> String;
}

pub trait Launcher {
    fn launch(&mut self, target: &LaunchTarget);
}

pub trait Notifier {
    fn notify(&mut self, notice: &Notice);
}

/// Everything the directory controller needs from its environment.
pub trait Host: ViewHost + Launcher + Notifier {}

impl<T: ViewHost + Launcher + Notifier> Host for T {}

/// Host that records every call. Useful for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    pub query: String,
    pub mounted: Option<DirectoryView>,
    pub mount_count: usize,
    pub modal: Option<ModalView>,
    pub disposed: usize,
    pub launched: Vec<LaunchTarget>,
    pub notices: Vec<Notice>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of the currently mounted cards.
    pub fn mounted_ids(&self) -> Vec<u32> {
        self.mounted
            .as_ref()
            .map(|v| v.cards.iter().map(|c| c.id).collect())
            .unwrap_or_default()
    }
}

impl ViewHost for RecordingHost {
    fn mount(&mut self, view: &DirectoryView) {
        self.mounted = Some(view.clone());
        self.mount_count += 1;
    }

    fn show_modal(&mut self, modal: &ModalView) {
        self.modal = Some(modal.clone());
    }

    fn dispose_modal(&mut self) {
        self.modal = None;
        self.disposed += 1;
    }

    fn read_query(&self) -> String {
        self.query.clone()
    }
}

impl Launcher for RecordingHost {
    fn launch(&mut self, target: &LaunchTarget) {
        self.launched.push(target.clone());
    }
}

impl Notifier for RecordingHost {
    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}
