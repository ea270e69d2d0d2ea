use crate::{Outcome, ScreenLifetime};

use std::time::Duration;

use googletest::prelude::*;

#[tokio::test]
async fn given_live_screen_when_work_finishes_then_completed() {
    let lifetime = ScreenLifetime::new("home");

    let outcome = lifetime.run(async { 42 }).await;

    assert_that!(outcome, eq(&Outcome::Completed(42)));
}

#[tokio::test(start_paused = true)]
async fn given_pending_work_when_screen_ends_then_aborted() {
    // Given
    let lifetime = ScreenLifetime::new("contacts");
    let ender = lifetime.clone();

    // When
    let (outcome, _) = tokio::join!(
        lifetime.run(tokio::time::sleep(Duration::from_secs(30))),
        async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            ender.end();
        }
    );

    // Then
    assert!(outcome.is_aborted());
    assert!(lifetime.is_ended());
}

#[tokio::test]
async fn given_ended_screen_when_work_starts_then_it_never_runs() {
    // Given
    let lifetime = ScreenLifetime::new("home");
    lifetime.end();
    let mut ran = false;

    // When
    let outcome = lifetime.run(async { ran = true }).await;

    // Then
    assert_that!(outcome, eq(&Outcome::Aborted));
    assert!(!ran);
}

#[tokio::test(start_paused = true)]
async fn given_guard_when_every_lifetime_dropped_then_wait_returns() {
    // Given
    let lifetime = ScreenLifetime::new("amount");
    let mut guard = lifetime.guard();

    // When
    drop(lifetime);

    // Then
    let waited = tokio::time::timeout(Duration::from_millis(10), guard.wait()).await;
    assert!(waited.is_ok());
}

#[test]
fn given_new_lifetime_when_polled_then_not_ended() {
    let lifetime = ScreenLifetime::new("home");

    assert!(!lifetime.guard().poll_ended());
    assert_that!(Outcome::<u8>::Skipped.completed(), none());
}
