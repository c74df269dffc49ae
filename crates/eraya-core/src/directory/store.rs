//! Read-only provider directory.
//!
//! The provider set is fixed at construction: there is no create, update
//! or delete. Identifiers are unique for the lifetime of the store.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::provider::{Provider, ProviderId, Specialty};
use crate::error::DirectoryError;

/// Ordered, immutable provider list with lookup by id.
///
/// Serializes as a plain provider array. Deserializing goes through
/// [`DirectoryStore::from_providers`], so the same validation applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Provider>", into = "Vec<Provider>")]
pub struct DirectoryStore {
    providers: Vec<Provider>,
}

impl DirectoryStore {
    /// Build a store from a provider list, validating ids and ratings.
    ///
    /// # Errors
    ///
    /// Returns an error if two providers share an id or a rating falls
    /// outside 0..=5.
    pub fn from_providers(providers: Vec<Provider>) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::with_capacity(providers.len());
        for p in &providers {
            if !seen.insert(p.id) {
                return Err(DirectoryError::DuplicateProviderId(p.id));
            }
            if !p.rating.is_finite() || !(0.0..=5.0).contains(&p.rating) {
                return Err(DirectoryError::InvalidRating {
                    id: p.id,
                    rating: p.rating,
                });
            }
        }
        debug!(count = providers.len(), "directory store built");
        Ok(Self { providers })
    }

    /// Load a JSON array of providers from disk.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::LoadFailed`] if the file cannot be read or
    /// parsed, or a validation error from [`DirectoryStore::from_providers`].
    pub fn load_json(path: &Path) -> Result<Self, DirectoryError> {
        let content = std::fs::read_to_string(path).map_err(|e| DirectoryError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let providers: Vec<Provider> =
            serde_json::from_str(&content).map_err(|e| DirectoryError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Self::from_providers(providers).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "rejected provider file");
        })
    }

    /// The built-in provider list.
    pub fn seeded() -> Self {
        Self {
            providers: seed_providers(),
        }
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Look up a provider. `None` for unknown ids.
    pub fn get(&self, id: ProviderId) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == id)
    }
}

impl TryFrom<Vec<Provider>> for DirectoryStore {
    type Error = DirectoryError;

    fn try_from(providers: Vec<Provider>) -> Result<Self, Self::Error> {
        Self::from_providers(providers)
    }
}

impl From<DirectoryStore> for Vec<Provider> {
    fn from(store: DirectoryStore) -> Self {
        store.providers
    }
}

impl Default for DirectoryStore {
    fn default() -> Self {
        Self::seeded()
    }
}

const DOCTOR_F: &str = "👩‍⚕️";
const DOCTOR_M: &str = "👨‍⚕️";

fn seed_providers() -> Vec<Provider> {
    vec![
        Provider {
            id: 1,
            name: "Dr. Priya Sharma".into(),
            specialty: Specialty::Gynecologist,
            avatar: DOCTOR_F.into(),
            rating: 4.9,
            reviews: 150,
            experience_years: 15,
            location: "Kātpādi, Tamil Nadu".into(),
            hospital: "Apollo Hospital".into(),
            phone: "+91 98765 43210".into(),
            email: "priya.sharma@apollo.com".into(),
            available: true,
            consultation_fee: "₹800".into(),
        },
        Provider {
            id: 2,
            name: "Dr. Rajesh Kumar".into(),
            specialty: Specialty::Endocrinologist,
            avatar: DOCTOR_M.into(),
            rating: 4.8,
            reviews: 120,
            experience_years: 12,
            location: "Vellore, Tamil Nadu".into(),
            hospital: "CMC Vellore".into(),
            phone: "+91 98765 43211".into(),
            email: "rajesh.kumar@cmc.com".into(),
            available: true,
            consultation_fee: "₹1000".into(),
        },
        Provider {
            id: 3,
            name: "Dr. Meera Patel".into(),
            specialty: Specialty::Pcos,
            avatar: DOCTOR_F.into(),
            rating: 5.0,
            reviews: 200,
            experience_years: 18,
            location: "Kātpādi, Tamil Nadu".into(),
            hospital: "Fortis Hospital".into(),
            phone: "+91 98765 43212".into(),
            email: "meera.patel@fortis.com".into(),
            available: true,
            consultation_fee: "₹1200".into(),
        },
        Provider {
            id: 4,
            name: "Dr. Ananya Reddy".into(),
            specialty: Specialty::Nutritionist,
            avatar: DOCTOR_F.into(),
            rating: 4.7,
            reviews: 95,
            experience_years: 10,
            location: "Vellore, Tamil Nadu".into(),
            hospital: "Wellness Clinic".into(),
            phone: "+91 98765 43213".into(),
            email: "ananya.reddy@wellness.com".into(),
            available: false,
            consultation_fee: "₹600".into(),
        },
        Provider {
            id: 5,
            name: "Dr. Arun Verma".into(),
            specialty: Specialty::Therapist,
            avatar: DOCTOR_M.into(),
            rating: 4.6,
            reviews: 85,
            experience_years: 8,
            location: "Kātpādi, Tamil Nadu".into(),
            hospital: "Mind Care Center".into(),
            phone: "+91 98765 43214".into(),
            email: "arun.verma@mindcare.com".into(),
            available: true,
            consultation_fee: "₹700".into(),
        },
        Provider {
            id: 6,
            name: "Dr. Lakshmi Nair".into(),
            specialty: Specialty::Gynecologist,
            avatar: DOCTOR_F.into(),
            rating: 4.9,
            reviews: 165,
            experience_years: 20,
            location: "Vellore, Tamil Nadu".into(),
            hospital: "Apollo Speciality".into(),
            phone: "+91 98765 43215".into(),
            email: "lakshmi.nair@apollo.com".into(),
            available: true,
            consultation_fee: "₹900".into(),
        },
    ]
}
