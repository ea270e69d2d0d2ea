mod common;

use common::{create_app_contact, create_empty_store, create_test_message, create_test_user};

use dw_db::CacheStore;

use googletest::prelude::*;
use tempfile::TempDir;

#[tokio::test]
async fn given_new_store_when_opened_then_fixture_contacts_are_seeded() {
    // Given/When: A fresh in-memory store
    let store = CacheStore::in_memory().await.unwrap();

    // Then: The bundled contacts are present
    let count = store.contacts().count().await.unwrap();
    assert_that!(count, eq(6));
}

#[tokio::test]
async fn given_seeded_store_when_seeding_again_then_nothing_is_written() {
    // Given: A store that already seeded itself
    let store = CacheStore::in_memory().await.unwrap();

    // When: Seeding a second time
    let written = store.seed_if_empty().await.unwrap();

    // Then: The row-count guard skips the seed
    assert_that!(written, eq(0));
    assert_that!(store.contacts().count().await.unwrap(), eq(6));
}

#[tokio::test]
async fn given_file_store_when_reopened_then_data_persists_without_reseed() {
    // Given: A file-backed store with one extra contact
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("cache.db");
    {
        let store = CacheStore::open(&path).await.unwrap();
        store
            .contacts()
            .save(&create_app_contact("usr_extra", "Extra Contact"))
            .await
            .unwrap();
        store.close().await;
    }

    // When: Opening the same file again
    let store = CacheStore::open(&path).await.unwrap();

    // Then: Seven contacts, none duplicated by a second seed
    assert_that!(store.contacts().count().await.unwrap(), eq(7));
}

#[tokio::test]
async fn given_populated_store_when_clearing_all_data_then_every_table_is_empty() {
    // Given: A store with a user, a message and the seeded contacts
    let store = CacheStore::in_memory().await.unwrap();
    let user = create_test_user();
    store.users().create(&user).await.unwrap();
    store
        .messages()
        .create(&create_test_message(user.cache_key(), "hola", 0))
        .await
        .unwrap();

    // When: Clearing everything
    store.clear_all_data().await.unwrap();

    // Then: Every query returns nothing
    assert_that!(store.users().count().await.unwrap(), eq(0));
    assert_that!(store.messages().count().await.unwrap(), eq(0));
    assert_that!(store.contacts().count().await.unwrap(), eq(0));
    assert_that!(store.contacts().find_all().await.unwrap(), is_empty());
    assert_that!(store.users().find_latest().await.unwrap(), none());
}

#[tokio::test]
async fn given_empty_store_when_clearing_all_data_then_succeeds() {
    let store = create_empty_store().await;

    let result = store.clear_all_data().await;

    assert_that!(result, ok(anything()));
}
