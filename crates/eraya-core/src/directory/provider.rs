//! Provider records and specialty tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DirectoryError;

/// Stable provider identifier.
pub type ProviderId = u32;

/// Medical specialty of a provider.
///
/// Known tags map to a display label. Unknown tags are kept as-is and
/// rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Specialty {
    Gynecologist,
    Endocrinologist,
    Pcos,
    Nutritionist,
    Therapist,
    Other(String),
}

impl Specialty {
    /// Specialties offered as filter chips, in chip order.
    pub const KNOWN: [Specialty; 5] = [
        Specialty::Gynecologist,
        Specialty::Endocrinologist,
        Specialty::Pcos,
        Specialty::Nutritionist,
        Specialty::Therapist,
    ];

    /// Machine tag, e.g. `"pcos"`.
    pub fn tag(&self) -> &str {
        match self {
            Specialty::Gynecologist => "gynecologist",
            Specialty::Endocrinologist => "endocrinologist",
            Specialty::Pcos => "pcos",
            Specialty::Nutritionist => "nutritionist",
            Specialty::Therapist => "therapist",
            Specialty::Other(tag) => tag,
        }
    }

    /// Human-readable label. Unmapped tags pass through unchanged.
    pub fn label(&self) -> &str {
        match self {
            Specialty::Gynecologist => "Gynecologist",
            Specialty::Endocrinologist => "Endocrinologist",
            Specialty::Pcos => "PCOS Specialist",
            Specialty::Nutritionist => "Nutritionist",
            Specialty::Therapist => "Therapist",
            Specialty::Other(tag) => tag,
        }
    }
}

impl From<String> for Specialty {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "gynecologist" => Specialty::Gynecologist,
            "endocrinologist" => Specialty::Endocrinologist,
            "pcos" => Specialty::Pcos,
            "nutritionist" => Specialty::Nutritionist,
            "therapist" => Specialty::Therapist,
            _ => Specialty::Other(tag),
        }
    }
}

impl From<&str> for Specialty {
    fn from(tag: &str) -> Self {
        Specialty::from(tag.to_string())
    }
}

impl From<Specialty> for String {
    fn from(s: Specialty) -> Self {
        s.tag().to_string()
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Category filter: everything, or exactly one specialty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "specialty")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Specialty),
}

impl CategoryFilter {
    pub fn matches(&self, provider: &Provider) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(s) => &provider.specialty == s,
        }
    }

    /// Chip label for this filter.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(s) => s.label(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = DirectoryError;

    /// Parses `"all"` or a specialty tag. Blank input is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DirectoryError::UnknownCategory(s.to_string()));
        }
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Ok(CategoryFilter::Only(Specialty::from(s.to_lowercase())))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(s) => f.write_str(s.tag()),
        }
    }
}

/// A medical professional shown in the directory.
///
/// Immutable once seeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: ProviderId,
    pub name: String,
    pub specialty: Specialty,
    pub avatar: String,
    /// 0.0 ..= 5.0
    pub rating: f64,
    pub reviews: u32,
    #[serde(alias = "experience")]
    pub experience_years: u32,
    pub location: String,
    pub hospital: String,
    pub phone: String,
    pub email: String,
    pub available: bool,
    /// Currency-formatted display string, never parsed.
    pub consultation_fee: String,
}

impl Provider {
    /// Case-insensitive substring match over name, specialty tag,
    /// location and hospital. `needle` must already be lowercase.
    pub(crate) fn matches_query(&self, needle: &str) -> bool {
        [
            self.name.as_str(),
            self.specialty.tag(),
            self.location.as_str(),
            self.hospital.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}
