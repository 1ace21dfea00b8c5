//! Promotion status derivation against the evaluation instant.

use jiff::{Timestamp, ToSpan};
use testresult::TestResult;

use promodesk::prelude::*;

fn now() -> Result<Timestamp, jiff::Error> {
    "2024-06-15T12:00:00Z".parse()
}

fn promotion(starts_at: Timestamp) -> Promotion {
    Promotion {
        id: "disc_01".to_string(),
        code: "CODE".to_string(),
        is_disabled: false,
        starts_at,
        ends_at: None,
        valid_duration: None,
        usage_count: 0,
        usage_limit: None,
        rule: PromotionRule {
            rule_type: RuleType::Percentage,
            value: 10,
            description: String::new(),
            conditions: Vec::new(),
        },
        regions: Vec::new(),
    }
}

#[test]
fn disabled_overrides_every_other_signal() -> TestResult {
    let now = now()?;

    let mut scheduled = promotion(now.checked_add(1.hour())?);
    scheduled.is_disabled = true;

    let mut ended = promotion(now.checked_sub(48.hours())?);
    ended.is_disabled = true;
    ended.ends_at = Some(now.checked_sub(1.hour())?);
    ended.usage_limit = Some(0);

    assert_eq!(classify(&scheduled, now)?, PromotionStatus::Disabled);
    assert_eq!(classify(&ended, now)?, PromotionStatus::Disabled);

    Ok(())
}

#[test]
fn future_start_is_scheduled() -> TestResult {
    let now = now()?;
    let promo = promotion(now.checked_add(1.second())?);

    assert_eq!(classify(&promo, now)?, PromotionStatus::Scheduled);

    Ok(())
}

#[test]
fn start_equal_to_now_is_active() -> TestResult {
    let now = now()?;

    assert_eq!(classify(&promotion(now), now)?, PromotionStatus::Active);

    Ok(())
}

#[test]
fn end_boundary() -> TestResult {
    let now = now()?;

    let mut ended = promotion(now.checked_sub(24.hours())?);
    ended.ends_at = Some(now.checked_sub(1.second())?);

    let mut ending = promotion(now.checked_sub(24.hours())?);
    ending.ends_at = Some(now.checked_add(1.second())?);

    let mut ending_now = promotion(now.checked_sub(24.hours())?);
    ending_now.ends_at = Some(now);

    assert_eq!(classify(&ended, now)?, PromotionStatus::Expired);
    assert_eq!(classify(&ending, now)?, PromotionStatus::Active);
    assert_eq!(classify(&ending_now, now)?, PromotionStatus::Active);

    Ok(())
}

#[test]
fn validity_window_boundary() -> TestResult {
    let now = now()?;

    let mut lapsed = promotion(now.checked_sub(25.hours())?);
    lapsed.valid_duration = Some("P1D".to_string());

    let mut running = promotion(now.checked_sub(23.hours())?);
    running.valid_duration = Some("P1D".to_string());

    assert_eq!(classify(&lapsed, now)?, PromotionStatus::Expired);
    assert_eq!(classify(&running, now)?, PromotionStatus::Active);

    Ok(())
}

#[test]
fn usage_limit_expires_only_on_exact_match() -> TestResult {
    let now = now()?;
    let mut promo = promotion(now.checked_sub(1.hour())?);
    promo.usage_limit = Some(10);

    promo.usage_count = 9;
    assert_eq!(classify(&promo, now)?, PromotionStatus::Active);

    promo.usage_count = 10;
    assert_eq!(classify(&promo, now)?, PromotionStatus::Expired);

    promo.usage_count = 11;
    assert_eq!(classify(&promo, now)?, PromotionStatus::Active);

    Ok(())
}

#[test]
fn end_and_window_are_independent() -> TestResult {
    let now = now()?;

    let mut window_only = promotion(now.checked_sub(90.minutes())?);
    window_only.ends_at = Some(now.checked_add(1.hour())?);
    window_only.valid_duration = Some("PT1H".to_string());

    assert_eq!(classify(&window_only, now)?, PromotionStatus::Expired);
    assert_eq!(
        expires_at(&window_only)?,
        Some(now.checked_sub(30.minutes())?)
    );

    Ok(())
}

#[test]
fn malformed_window_is_reported_only_when_reached() -> TestResult {
    let now = now()?;

    let mut scheduled = promotion(now.checked_add(1.hour())?);
    scheduled.valid_duration = Some("one day".to_string());

    let mut started = promotion(now.checked_sub(1.hour())?);
    started.valid_duration = Some("one day".to_string());

    assert_eq!(classify(&scheduled, now)?, PromotionStatus::Scheduled);
    assert!(matches!(
        classify(&started, now),
        Err(PromotionError::Duration { ref code, .. }) if code == "CODE"
    ));

    Ok(())
}

#[test]
fn non_iso_window_is_an_error() -> TestResult {
    let now = now()?;

    for input in ["1 day", "1d", "2h 30m", "-P1D"] {
        let mut promo = promotion(now.checked_sub(25.hours())?);
        promo.valid_duration = Some(input.to_string());

        assert!(
            matches!(
                classify(&promo, now),
                Err(PromotionError::Duration { ref code, .. }) if code == "CODE"
            ),
            "{input:?} should not classify"
        );
    }

    Ok(())
}

#[test]
fn time_remaining_counts_down_to_earliest_end() -> TestResult {
    let now = now()?;

    let mut promo = promotion(now.checked_sub(1.hour())?);
    promo.valid_duration = Some("PT3H".to_string());
    promo.ends_at = Some(now.checked_add(5.hours())?);

    assert_eq!(
        time_remaining(&promo, now)?,
        Some(std::time::Duration::from_secs(2 * 60 * 60))
    );

    promo.is_disabled = true;

    assert_eq!(time_remaining(&promo, now)?, None);

    Ok(())
}

#[test]
fn classification_is_idempotent() -> TestResult {
    let now = now()?;
    let mut promo = promotion(now.checked_sub(1.hour())?);
    promo.valid_duration = Some("P1M".to_string());

    let first = classify(&promo, now)?;
    let second = classify(&promo, now)?;

    assert_eq!(first, second);
    assert_eq!(first.indicator(), second.indicator());

    Ok(())
}

#[test]
fn status_indicators() {
    let cases = [
        (PromotionStatus::Scheduled, "Scheduled", Severity::Warning),
        (PromotionStatus::Expired, "Expired", Severity::Danger),
        (PromotionStatus::Active, "Active", Severity::Success),
        (PromotionStatus::Disabled, "Disabled", Severity::Neutral),
    ];

    for (status, label, severity) in cases {
        assert_eq!(
            status.indicator(),
            StatusIndicator::new(label, severity),
            "indicator for {status:?}"
        );
    }
}
