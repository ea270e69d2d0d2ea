use crate::OnboardingStatus;

use std::str::FromStr;

#[test]
fn test_onboarding_status_round_trips_through_str() {
    for status in [
        OnboardingStatus::InProgress,
        OnboardingStatus::PendingValidation,
        OnboardingStatus::Completed,
        OnboardingStatus::Failed,
        OnboardingStatus::Abandoned,
    ] {
        assert_eq!(OnboardingStatus::from_str(status.as_str()).unwrap(), status);
    }
    assert!(OnboardingStatus::from_str("done").is_err());
}

#[test]
fn test_onboarding_status_default_and_terminal() {
    assert_eq!(OnboardingStatus::default(), OnboardingStatus::InProgress);
    assert!(!OnboardingStatus::PendingValidation.is_terminal());
    assert!(OnboardingStatus::Abandoned.is_terminal());
}
