use dw_db::CacheStore;

/// In-memory store with migrations applied and the contact fixture seeded
pub async fn create_test_store() -> CacheStore {
    CacheStore::in_memory()
        .await
        .expect("Failed to create in-memory cache store")
}

/// In-memory store with every table emptied, for tests that need exact counts
pub async fn create_empty_store() -> CacheStore {
    let store = create_test_store().await;
    store
        .clear_all_data()
        .await
        .expect("Failed to clear seeded data");
    store
}
