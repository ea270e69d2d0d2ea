mod common;

use common::create_test_store;

use dw_api::{ConnectivityChecker, ConnectivityStatus};
use dw_app::Diagnostics;

use std::time::Duration;

use googletest::prelude::*;

#[tokio::test]
async fn given_backend_down_when_diagnosed_then_reports_unhealthy_with_cache_counts() {
    // Given
    let checker = ConnectivityChecker::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
    let diagnostics = Diagnostics::new(checker, create_test_store().await);

    // When
    let report = diagnostics.run().await;

    // Then
    assert!(!report.is_healthy());
    assert!(matches!(
        report.connectivity,
        ConnectivityStatus::Unreachable { .. } | ConnectivityStatus::TimedOut { .. }
    ));
    let cache = report.cache.unwrap();
    assert_that!(cache.contacts, eq(6));
    assert_that!(cache.users, eq(0));
    assert_that!(report.api_base_url, eq("http://127.0.0.1:9/health"));
}

#[tokio::test]
async fn given_closed_store_when_diagnosed_then_cache_section_is_missing() {
    // Given
    let store = create_test_store().await;
    let checker = ConnectivityChecker::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
    let diagnostics = Diagnostics::new(checker, store.clone());
    store.close().await;

    // When
    let report = diagnostics.run().await;

    // Then
    assert_that!(report.cache, none());
}
