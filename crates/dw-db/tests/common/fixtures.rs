#![allow(dead_code)]

use dw_core::{CachedUser, Message, MessageRole, UserContact};

use chrono::{Duration, Utc};

/// Pre-registration profile with just enough identity to be displayed
pub fn create_test_user() -> CachedUser {
    CachedUser {
        email: Some("ana@example.com".to_string()),
        given_name: Some("Ana".to_string()),
        family_name: Some("Suárez".to_string()),
        phone: Some("+59899000111".to_string()),
        ..CachedUser::new()
    }
}

/// Message for `user_id` stamped `offset_secs` after a fixed base time
pub fn create_test_message(user_id: &str, content: &str, offset_secs: i64) -> Message {
    let mut message = Message::new(user_id, MessageRole::User, content);
    message.timestamp = Utc::now() - Duration::hours(1) + Duration::seconds(offset_secs);
    message
}

pub fn create_app_contact(contact_id: &str, name: &str) -> UserContact {
    UserContact {
        contact_id: Some(contact_id.to_string()),
        has_dolar_app: true,
        ..UserContact::new(name)
    }
}

pub fn create_external_contact(cvu: &str, name: &str) -> UserContact {
    UserContact {
        cvu: Some(cvu.to_string()),
        ..UserContact::new(name)
    }
}
