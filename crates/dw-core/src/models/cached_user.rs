use crate::models::identity_attributes::IdentityAttributes;
use crate::models::onboarding_status::OnboardingStatus;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Local mirror of the authenticated profile.
///
/// The identifier is two-phase: `local_id` exists from the first sign-in, `remote_id`
/// is assigned once the backend registers the user. The cache is keyed by
/// `remote_id ?? local_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedUser {
    pub local_id: String,
    pub remote_id: Option<String>,

    // Identity
    pub email: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub phone: Option<String>,
    pub document_type: Option<String>,
    pub document_number: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub address: Option<String>,
    pub is_pep: bool,

    pub onboarding_status: OnboardingStatus,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CachedUser {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            local_id: Uuid::new_v4().to_string(),
            remote_id: None,
            email: None,
            given_name: None,
            family_name: None,
            phone: None,
            document_type: None,
            document_number: None,
            birth_date: None,
            nationality: None,
            address: None,
            is_pep: false,
            onboarding_status: OnboardingStatus::InProgress,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn from_identity(attributes: &IdentityAttributes) -> Self {
        Self {
            email: attributes.email.clone(),
            given_name: attributes.given_name.clone(),
            family_name: attributes.family_name.clone(),
            phone: attributes.phone_number.clone(),
            ..Self::new()
        }
    }

    pub fn cache_key(&self) -> &str {
        self.remote_id.as_deref().unwrap_or(&self.local_id)
    }

    pub fn is_registered(&self) -> bool {
        self.remote_id.is_some()
    }

    pub fn display_name(&self) -> String {
        match (&self.given_name, &self.family_name) {
            (Some(given), Some(family)) => format!("{given} {family}"),
            (Some(given), None) => given.clone(),
            (None, Some(family)) => family.clone(),
            (None, None) => self.email.clone().unwrap_or_default(),
        }
    }
}

impl Default for CachedUser {
    fn default() -> Self {
        Self::new()
    }
}
