//! Contact resolution for the `enviar` flow.
//!
//! Combines the local cache, the remote directory search and exact phone lookups.
//! Remote failures never surface: searches degrade to empty results and the full
//! contact list degrades to the cached copy.

use crate::Debouncer;

use dw_api::{AddContactRequest, ContactsApi};
use dw_config::SearchConfig;
use dw_core::{ActionResult, Currency, DomainEvent, EventSink, UserContact};
use dw_db::CacheStore;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

/// Digits a query needs, after stripping separators, to be tried as a phone number
pub const MIN_PHONE_DIGITS: usize = 8;

const PHONE_SEPARATORS: [char; 5] = [' ', '-', '.', '(', ')'];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactBook {
    pub all: Vec<UserContact>,
    /// Latest counterparts first
    pub recurrent: Vec<UserContact>,
}

/// Normalised phone number when `query` is phone-shaped.
///
/// Separators and one leading `+` are stripped; what remains must be at least
/// eight digits and nothing else.
pub fn phone_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    let (plus, rest) = match trimmed.strip_prefix('+') {
        Some(rest) => ("+", rest),
        None => ("", trimmed),
    };
    let digits: String = rest.chars().filter(|c| !PHONE_SEPARATORS.contains(c)).collect();

    if digits.len() < MIN_PHONE_DIGITS || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(format!("{plus}{digits}"))
}

/// Contacts with a last transaction, most recent first, at most `limit`.
pub fn recurrent_contacts(contacts: &[UserContact], limit: usize) -> Vec<UserContact> {
    let mut recurrent: Vec<UserContact> = contacts
        .iter()
        .filter(|c| c.last_transaction_date.is_some())
        .cloned()
        .collect();
    recurrent.sort_by(|a, b| b.last_transaction_date.cmp(&a.last_transaction_date));
    recurrent.truncate(limit);
    recurrent
}

pub struct ContactResolver {
    api: Arc<dyn ContactsApi>,
    store: CacheStore,
    sink: Arc<dyn EventSink>,
    result_limit: u32,
    recurrent_limit: usize,
    debouncer: Debouncer,
    loaded: RwLock<ContactBook>,
    sequence: AtomicU64,
}

impl ContactResolver {
    pub fn new(
        api: Arc<dyn ContactsApi>,
        store: CacheStore,
        config: &SearchConfig,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            api,
            store,
            sink,
            result_limit: config.result_limit,
            recurrent_limit: config.recurrent_limit,
            debouncer: Debouncer::new(config.debounce()),
            loaded: RwLock::new(ContactBook::default()),
            sequence: AtomicU64::new(0),
        }
    }

    /// Contacts from the last [`ContactResolver::load`]
    pub async fn book(&self) -> ContactBook {
        self.loaded.read().await.clone()
    }

    /// Fetch every contact for `currency` and compute the recurrent list.
    ///
    /// Fetched contacts are written back to the cache; on a network failure the
    /// cached contacts are used instead.
    pub async fn load(&self, currency: Currency) -> ContactBook {
        let all = match self.api.all(currency).await {
            Ok(contacts) => {
                let contacts = self.ingest(contacts);
                self.write_back(&contacts).await;
                contacts
            }
            Err(e) => {
                self.degraded("load_contacts", e.to_string());
                match self.store.contacts().find_all().await {
                    Ok(cached) => cached,
                    Err(e) => {
                        self.degraded("load_cached_contacts", e.to_string());
                        Vec::new()
                    }
                }
            }
        };

        let book = ContactBook {
            recurrent: recurrent_contacts(&all, self.recurrent_limit),
            all,
        };
        *self.loaded.write().await = book.clone();
        book
    }

    /// Search once the query has been stable for the debounce delay.
    ///
    /// Returns `None` when a newer query superseded this one.
    pub async fn search_debounced(
        &self,
        query: &str,
        currency: Currency,
    ) -> Option<Vec<UserContact>> {
        if !self.debouncer.settle().await {
            return None;
        }
        Some(self.search(query, currency).await)
    }

    /// Resolve `query` to a ranked list of recipients.
    ///
    /// An empty query returns the loaded contacts without touching the network. A
    /// phone-shaped query runs an exact directory lookup alongside the text search and
    /// puts the match on top, ahead of the text results.
    pub async fn search(&self, query: &str, currency: Currency) -> Vec<UserContact> {
        let query = query.trim();
        if query.is_empty() {
            return self.loaded.read().await.all.clone();
        }

        let Some(phone) = phone_query(query) else {
            return self.text_search(query, currency).await;
        };

        let (lookup, results) = tokio::join!(
            self.api.lookup_phone(&phone),
            self.text_search(query, currency)
        );

        match lookup {
            Ok(Some(user)) => {
                let matched = self.ingest_one(user.into_contact());
                let mut merged = vec![matched.clone()];
                merged.extend(results.into_iter().filter(|c| !c.same_recipient(&matched)));
                merged
            }
            Ok(None) => results,
            Err(e) => {
                self.degraded("lookup_phone", e.to_string());
                results
            }
        }
    }

    async fn text_search(&self, query: &str, currency: Currency) -> Vec<UserContact> {
        match self.api.search(query, currency, self.result_limit).await {
            Ok(result) => self.ingest(result.into_ranked()),
            Err(e) => {
                self.degraded("search_contacts", e.to_string());
                Vec::new()
            }
        }
    }

    /// Save `contact` remotely, then in the cache with `is_saved` set.
    pub async fn add_contact(
        &self,
        contact: &UserContact,
        alias: Option<String>,
        notes: Option<String>,
    ) -> ActionResult<UserContact> {
        let mut request = AddContactRequest::for_contact(contact, notes);
        if alias.is_some() {
            request.alias = alias;
        }
        if !request.has_identifier() {
            return ActionResult::failure("This contact has no user id or CVU to save");
        }

        let saved = match self.api.add_contact(&request).await {
            Ok(saved) => saved,
            Err(e) => {
                log::warn!("add_contact failed: {e}");
                return ActionResult::failure(e.user_message());
            }
        };

        let mut saved = UserContact {
            is_saved: true,
            ..self.ingest_one(saved)
        };
        match self.store.contacts().save(&saved).await {
            Ok(stored) => saved = stored,
            Err(e) => self.degraded("cache_contact", e.to_string()),
        }

        let mut book = self.loaded.write().await;
        book.all.retain(|c| !c.same_recipient(&saved));
        book.all.insert(0, saved.clone());

        ActionResult::ok_with_message(saved, "Contact saved")
    }

    async fn write_back(&self, contacts: &[UserContact]) {
        let addressable: Vec<UserContact> = contacts
            .iter()
            .filter(|c| c.is_addressable())
            .cloned()
            .collect();
        if let Err(e) = self.store.contacts().cache_remote(&addressable).await {
            self.degraded("cache_contacts", e.to_string());
        }
    }

    fn ingest(&self, contacts: Vec<UserContact>) -> Vec<UserContact> {
        contacts.into_iter().map(|c| self.ingest_one(c)).collect()
    }

    fn ingest_one(&self, contact: UserContact) -> UserContact {
        contact.ingest(self.sequence.fetch_add(1, Ordering::Relaxed))
    }

    fn degraded(&self, operation: &'static str, reason: String) {
        self.sink.emit(DomainEvent::Degraded { operation, reason });
    }
}
