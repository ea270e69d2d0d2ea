use dw_core::UserContact;

use serde::{Deserialize, Serialize};

/// Partitioned directory search response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSearchResult {
    /// Contacts with transaction history
    #[serde(default)]
    pub contacts: Vec<UserContact>,
    /// App users without history
    #[serde(default)]
    pub users: Vec<UserContact>,
    /// External (non-app) accounts
    #[serde(default)]
    pub external: Vec<UserContact>,
}

impl ContactSearchResult {
    /// History first, then app users, then external accounts.
    pub fn into_ranked(self) -> Vec<UserContact> {
        let mut ranked = self.contacts;
        ranked.extend(self.users);
        ranked.extend(self.external);
        ranked
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty() && self.users.is_empty() && self.external.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddContactRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AddContactRequest {
    pub fn for_contact(contact: &UserContact, notes: Option<String>) -> Self {
        Self {
            contact_id: contact.contact_id.clone(),
            cvu: contact.cvu.clone(),
            alias: contact.alias.clone(),
            notes,
        }
    }

    pub fn has_identifier(&self) -> bool {
        self.contact_id.is_some() || self.cvu.is_some()
    }
}

/// An exact phone match in the user directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryUser {
    pub user_id: String,
    pub full_name: String,
    pub phone: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl DirectoryUser {
    /// Provisional, unsaved contact for a phone match
    pub fn into_contact(self) -> UserContact {
        UserContact {
            contact_id: Some(self.user_id),
            phone: Some(self.phone),
            avatar: self.avatar,
            has_dolar_app: true,
            is_saved: false,
            ..UserContact::new(self.full_name)
        }
    }
}

/// Backend user record as returned by the provisioning API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub onboarding_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatedUser {
    pub id: String,
}

/// Bearer tokens issued by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTokens {
    pub access_token: String,
    #[serde(default)]
    pub id_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Unix seconds
    #[serde(default)]
    pub expires_at: Option<i64>,
}

impl SessionTokens {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            id_token: None,
            refresh_token: None,
            expires_at: None,
        }
    }

    pub fn is_expired(&self, now_unix: i64) -> bool {
        self.expires_at.is_some_and(|at| at <= now_unix)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpOutcome {
    pub user_sub: String,
    pub confirmation_required: bool,
}
