use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const SURROGATE_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2a9e_8d4b_4c71_9a3e_52d0_b7e4_1f88);

/// A transfer destination: either a registered app user or an external account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContact {
    /// Present iff the contact is a registered app user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    /// External account identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvu: Option<String>,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub has_dolar_app: bool,
    #[serde(default)]
    pub is_saved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transaction_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_count: Option<i64>,

    /// Stable key assigned at ingestion; never derived from nullable fields later
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub surrogate_key: String,
}

impl UserContact {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            contact_id: None,
            cvu: None,
            full_name: full_name.into(),
            alias: None,
            phone: None,
            avatar: None,
            has_dolar_app: false,
            is_saved: false,
            last_transaction_date: None,
            transaction_count: None,
            surrogate_key: String::new(),
        }
    }

    /// Assign the surrogate key if the contact does not carry one yet.
    ///
    /// The key hashes every identifying field plus the ingestion sequence, so two
    /// external contacts sharing a name never collide.
    pub fn ingest(mut self, sequence: u64) -> Self {
        if self.surrogate_key.is_empty() {
            self.surrogate_key = Self::surrogate_for(&self, sequence);
        }
        self
    }

    fn surrogate_for(contact: &UserContact, sequence: u64) -> String {
        let material = format!(
            "{}|{}|{}|{}|{}|{}",
            contact.contact_id.as_deref().unwrap_or(""),
            contact.cvu.as_deref().unwrap_or(""),
            contact.full_name,
            contact.alias.as_deref().unwrap_or(""),
            contact.phone.as_deref().unwrap_or(""),
            sequence
        );
        Uuid::new_v5(&SURROGATE_NAMESPACE, material.as_bytes()).to_string()
    }

    /// Key used for persistence and de-duplication: `contactId ?? cvu ?? surrogate`.
    pub fn identity_key(&self) -> &str {
        self.contact_id
            .as_deref()
            .or(self.cvu.as_deref())
            .unwrap_or(&self.surrogate_key)
    }

    /// A contact can only be saved when it carries an app or account identifier.
    pub fn is_addressable(&self) -> bool {
        self.contact_id.is_some() || self.cvu.is_some()
    }

    /// Whether two contacts denote the same recipient.
    pub fn same_recipient(&self, other: &UserContact) -> bool {
        if let (Some(a), Some(b)) = (&self.contact_id, &other.contact_id) {
            return a == b;
        }
        if let (Some(a), Some(b)) = (&self.cvu, &other.cvu) {
            return a == b;
        }
        if let (Some(a), Some(b)) = (&self.phone, &other.phone) {
            return digits_only(a) == digits_only(b);
        }
        false
    }

    /// Case-insensitive substring match over name, alias, phone and cvu.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            Some(self.full_name.as_str()),
            self.alias.as_deref(),
            self.phone.as_deref(),
            self.cvu.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}
