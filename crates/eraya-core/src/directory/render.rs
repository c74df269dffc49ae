//! View models for the directory.
//!
//! Rendering is a pure mapping from provider records to view structs. A
//! host decides how to draw them; the `Display` impls give a plain-text
//! rendering for terminals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::modal::TimeSlot;
use super::provider::{CategoryFilter, Provider, ProviderId, Specialty};
use super::store::DirectoryStore;

const STAR: &str = "⭐";

/// Availability badge, two mutually exclusive states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Unavailable,
}

impl Availability {
    pub fn label(self) -> &'static str {
        match self {
            Availability::Available => "Available Today",
            Availability::Unavailable => "Not Available",
        }
    }
}

impl From<bool> for Availability {
    fn from(available: bool) -> Self {
        if available {
            Availability::Available
        } else {
            Availability::Unavailable
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailIcon {
    Location,
    Experience,
    Hospital,
    Fee,
}

impl DetailIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            DetailIcon::Location => "📍",
            DetailIcon::Experience => "💼",
            DetailIcon::Hospital => "🏥",
            DetailIcon::Fee => "💰",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRow {
    pub icon: DetailIcon,
    pub text: String,
}

/// Action trigger attached to a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "provider_id", rename_all = "lowercase")]
pub enum CardAction {
    Contact(ProviderId),
    Book(ProviderId),
}

/// One rendered provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderCard {
    pub id: ProviderId,
    pub avatar: String,
    pub name: String,
    pub specialty_label: String,
    pub stars: String,
    pub rating_text: String,
    pub availability: Availability,
    pub details: Vec<DetailRow>,
    pub actions: [CardAction; 2],
}

/// A category filter control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChip {
    pub category: CategoryFilter,
    pub label: String,
    pub active: bool,
}

/// The full directory view. Replaces whatever was mounted before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryView {
    pub chips: Vec<FilterChip>,
    pub cards: Vec<ProviderCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

/// Link to be handed to the dialer or mail client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactView {
    pub provider_id: ProviderId,
    pub title: String,
    pub phone: Link,
    pub email: Link,
    pub hospital: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotOption {
    pub slot: TimeSlot,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingFormView {
    pub provider_id: ProviderId,
    pub title: String,
    pub min_date: NaiveDate,
    pub slots: Vec<SlotOption>,
    pub consultation_fee: String,
}

/// Whatever the modal layer currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum ModalView {
    Contact(ContactView),
    Booking(BookingFormView),
}

impl ModalView {
    pub fn provider_id(&self) -> ProviderId {
        match self {
            ModalView::Contact(v) => v.provider_id,
            ModalView::Booking(v) => v.provider_id,
        }
    }
}

/// `tel:` target with whitespace removed.
pub fn dial_target(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}

pub fn mail_target(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

pub fn render_card(provider: &Provider) -> ProviderCard {
    let star_count = provider.rating.floor().clamp(0.0, 5.0) as usize;
    ProviderCard {
        id: provider.id,
        avatar: provider.avatar.clone(),
        name: provider.name.clone(),
        specialty_label: provider.specialty.label().to_string(),
        stars: STAR.repeat(star_count),
        rating_text: format!("{} ({} reviews)", provider.rating, provider.reviews),
        availability: provider.available.into(),
        details: vec![
            DetailRow {
                icon: DetailIcon::Location,
                text: provider.location.clone(),
            },
            DetailRow {
                icon: DetailIcon::Experience,
                text: format!("{} years experience", provider.experience_years),
            },
            DetailRow {
                icon: DetailIcon::Hospital,
                text: provider.hospital.clone(),
            },
            DetailRow {
                icon: DetailIcon::Fee,
                text: format!("Consultation: {}", provider.consultation_fee),
            },
        ],
        actions: [
            CardAction::Contact(provider.id),
            CardAction::Book(provider.id),
        ],
    }
}

/// Chips for "All", every known specialty, then any other specialty found
/// in the store or named by the active filter. Exactly one is active.
pub fn render_chips(active: &CategoryFilter, store: &DirectoryStore) -> Vec<FilterChip> {
    let mut categories = vec![CategoryFilter::All];
    categories.extend(Specialty::KNOWN.iter().cloned().map(CategoryFilter::Only));
    let extra = store
        .providers()
        .iter()
        .map(|p| CategoryFilter::Only(p.specialty.clone()))
        .chain(std::iter::once(active.clone()));
    for category in extra {
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    categories
        .into_iter()
        .map(|category| FilterChip {
            label: category.label().to_string(),
            active: &category == active,
            category,
        })
        .collect()
}

pub fn render_directory(
    providers: &[&Provider],
    chips: Vec<FilterChip>,
    empty_message: Option<&str>,
) -> DirectoryView {
    let cards: Vec<ProviderCard> = providers.iter().map(|p| render_card(p)).collect();
    let empty_message = if cards.is_empty() {
        empty_message.map(str::to_string)
    } else {
        None
    };
    DirectoryView {
        chips,
        cards,
        empty_message,
    }
}

pub fn render_contact(provider: &Provider) -> ContactView {
    ContactView {
        provider_id: provider.id,
        title: format!("Contact {}", provider.name),
        phone: Link {
            label: provider.phone.clone(),
            target: dial_target(&provider.phone),
        },
        email: Link {
            label: provider.email.clone(),
            target: mail_target(&provider.email),
        },
        hospital: provider.hospital.clone(),
        location: provider.location.clone(),
    }
}

pub fn render_booking(provider: &Provider, today: NaiveDate) -> BookingFormView {
    BookingFormView {
        provider_id: provider.id,
        title: format!("Book Appointment with {}", provider.name),
        min_date: today,
        slots: TimeSlot::ALL
            .iter()
            .map(|&slot| SlotOption {
                slot,
                label: slot.label().to_string(),
            })
            .collect(),
        consultation_fee: provider.consultation_fee.clone(),
    }
}

// ── Terminal text ───────────────────────────────────────────────────

impl fmt::Display for ProviderCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}] {}", self.avatar, self.id, self.name)?;
        writeln!(f, "   {}", self.specialty_label)?;
        writeln!(f, "   {} {}", self.stars, self.rating_text)?;
        writeln!(f, "   {}", self.availability.label())?;
        for row in &self.details {
            writeln!(f, "   {} {}", row.icon.glyph(), row.text)?;
        }
        Ok(())
    }
}

impl fmt::Display for DirectoryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chips: Vec<String> = self
            .chips
            .iter()
            .map(|c| {
                if c.active {
                    format!("[{}]", c.label)
                } else {
                    c.label.clone()
                }
            })
            .collect();
        writeln!(f, "{}", chips.join("  "))?;
        writeln!(f)?;
        if let Some(msg) = &self.empty_message {
            writeln!(f, "{msg}")?;
        }
        for card in &self.cards {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ContactView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ContactView { phone, email, .. } = self;
        writeln!(f, "{}", self.title)?;
        writeln!(f, "  📱 Phone:    {} <{}>", phone.label, phone.target)?;
        writeln!(f, "  📧 Email:    {} <{}>", email.label, email.target)?;
        writeln!(f, "  🏥 Hospital: {}", self.hospital)?;
        writeln!(f, "  📍 Location: {}", self.location)
    }
}

impl fmt::Display for BookingFormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "  Earliest date: {}", self.min_date)?;
        let slots: Vec<&str> = self.slots.iter().map(|s| s.label.as_str()).collect();
        writeln!(f, "  Time slots: {}", slots.join(", "))?;
        writeln!(f, "  Consultation Fee: {}", self.consultation_fee)
    }
}

impl fmt::Display for ModalView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModalView::Contact(v) => fmt::Display::fmt(v, f),
            ModalView::Booking(v) => fmt::Display::fmt(v, f),
        }
    }
}
