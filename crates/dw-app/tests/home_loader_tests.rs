mod common;

use common::fixtures::{identity, raw_balances};
use common::mocks::{CallLog, MockBank, MockIdentity, MockProvisioning};
use common::{create_test_store, memory_sink};

use dw_app::{HomeLoader, Outcome, Provisioner, ScreenLifetime};
use dw_core::{Balance, Currency, DomainEvent, MemoryEventSink};

use std::sync::Arc;
use std::time::Duration;

use googletest::prelude::*;

async fn loader(log: &CallLog, bank: MockBank) -> (HomeLoader, Arc<MemoryEventSink>) {
    let (events, sink) = memory_sink();
    let provisioner = Provisioner::new(
        Arc::new(MockIdentity::new(log.clone(), identity())),
        Arc::new(MockProvisioning::new(log.clone())),
        create_test_store().await,
        Arc::clone(&sink),
    );
    let bank = Arc::new(bank);
    let loader = HomeLoader::new(Arc::new(provisioner), bank.clone(), bank, sink);
    (loader, events)
}

fn bank(log: &CallLog) -> MockBank {
    MockBank {
        log: log.clone(),
        balances: raw_balances(),
        ..MockBank::default()
    }
}

#[tokio::test]
async fn given_new_user_when_home_loads_then_profile_is_provisioned_before_balances() {
    // Given
    let log = CallLog::default();
    let (loader, _) = loader(&log, bank(&log)).await;

    // When
    let snapshot = loader
        .load(&ScreenLifetime::new("home"))
        .await
        .completed()
        .unwrap();

    // Then
    let calls = log.calls();
    let created = calls.iter().position(|c| c.starts_with("create_user")).unwrap();
    let balances = calls.iter().position(|c| c.starts_with("get_balances")).unwrap();
    let movements = calls.iter().position(|c| c.starts_with("get_movements")).unwrap();
    assert!(created < balances && created < movements, "{calls:?}");
    assert_that!(calls[balances], eq("get_balances:usr_2k9RemoteA1"));
    assert_that!(calls[movements], eq("get_movements:usr_2k9RemoteA1:20:0"));
    assert!(snapshot.profile.is_some());
}

#[tokio::test]
async fn given_shuffled_balances_when_home_loads_then_balances_are_in_display_order() {
    // Given
    let log = CallLog::default();
    let (loader, _) = loader(&log, bank(&log)).await;

    // When
    let snapshot = loader
        .load(&ScreenLifetime::new("home"))
        .await
        .completed()
        .unwrap();

    // Then
    let currencies: Vec<Currency> = snapshot.balances.iter().map(|b| b.currency).collect();
    assert_that!(
        currencies,
        elements_are![eq(&Currency::Uyu), eq(&Currency::Usd), eq(&Currency::Usdc)]
    );
}

#[tokio::test]
async fn given_balance_outage_when_home_loads_then_placeholder_and_degraded_event() {
    // Given
    let log = CallLog::default();
    let mut failing = bank(&log);
    failing.fail_balances = true;
    failing.fail_movements = true;
    let (loader, events) = loader(&log, failing).await;

    // When
    let snapshot = loader
        .load(&ScreenLifetime::new("home"))
        .await
        .completed()
        .unwrap();

    // Then
    assert_that!(snapshot.balances, elements_are![eq(&Balance::placeholder())]);
    assert_that!(snapshot.movements, is_empty());
    let degraded: Vec<&'static str> = events
        .events()
        .into_iter()
        .filter_map(|e| match e {
            DomainEvent::Degraded { operation, .. } => Some(operation),
            _ => None,
        })
        .collect();
    assert_that!(
        degraded,
        unordered_elements_are![eq(&"get_balances"), eq(&"get_movements")]
    );
}

#[tokio::test]
async fn given_identity_failure_when_home_loads_then_no_balance_request_is_made() {
    // Given
    let log = CallLog::default();
    let (events, sink) = memory_sink();
    let mut identity_mock = MockIdentity::new(log.clone(), identity());
    identity_mock.fail_attributes = true;
    let provisioner = Provisioner::new(
        Arc::new(identity_mock),
        Arc::new(MockProvisioning::new(log.clone())),
        create_test_store().await,
        Arc::clone(&sink),
    );
    let bank = Arc::new(bank(&log));
    let loader = HomeLoader::new(Arc::new(provisioner), bank.clone(), bank, sink);

    // When
    let snapshot = loader
        .load(&ScreenLifetime::new("home"))
        .await
        .completed()
        .unwrap();

    // Then
    assert_that!(snapshot.profile, none());
    assert_that!(snapshot.balances, elements_are![eq(&Balance::placeholder())]);
    assert_that!(log.count("get_balances"), eq(0));
    assert_that!(events.events().len(), eq(1));
}

#[tokio::test]
async fn given_load_in_flight_when_loaded_again_then_second_call_is_skipped() {
    // Given
    let log = CallLog::default();
    let mut slow = bank(&log);
    slow.delay = Duration::from_millis(300);
    let (loader, events) = loader(&log, slow).await;
    let lifetime = ScreenLifetime::new("home");

    // When
    let (first, second) = tokio::join!(loader.load(&lifetime), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        loader.load(&lifetime).await
    });

    // Then
    assert!(matches!(first, Outcome::Completed(_)));
    assert_that!(second, eq(&Outcome::Skipped));
    assert_that!(log.count("get_balances"), eq(1));
    assert!(
        events
            .events()
            .contains(&DomainEvent::LoadSkipped { operation: "load_home" })
    );
}

#[tokio::test]
async fn given_screen_ends_mid_load_when_awaited_then_aborted_silently_and_flag_released() {
    // Given
    let log = CallLog::default();
    let mut slow = bank(&log);
    slow.delay = Duration::from_secs(5);
    let (loader, events) = loader(&log, slow).await;
    let lifetime = ScreenLifetime::new("home");

    // When
    let (outcome, _) = tokio::join!(loader.load(&lifetime), async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        lifetime.end();
    });

    // Then
    assert_that!(outcome, eq(&Outcome::Aborted));
    assert!(!loader.in_flight().is_active("load_home"));
    assert_that!(events.events(), is_empty());
}

#[tokio::test]
async fn given_ended_screen_when_refreshing_balances_then_nothing_is_requested() {
    // Given
    let log = CallLog::default();
    let (loader, _) = loader(&log, bank(&log)).await;
    let lifetime = ScreenLifetime::new("home");
    lifetime.end();

    // When
    let outcome = loader.refresh_balances(&lifetime, "usr_1").await;

    // Then
    assert_that!(outcome, eq(&Outcome::Aborted));
    assert_that!(log.count("get_balances"), eq(0));
}
