//! Promotion Status
//!
//! A promotion's status is never stored; it is derived on read from the
//! promotion's flags, validity window and usage counters relative to an
//! explicit `now`.

use std::{fmt, time::Duration};

use jiff::Timestamp;
use thiserror::Error;

use crate::{
    duration::{DurationError, end_of},
    promotions::Promotion,
    status::{Severity, StatusIndicator},
};

/// Errors raised while deriving a promotion's status.
#[derive(Debug, Error)]
pub enum PromotionError {
    /// The promotion's `valid_duration` could not be applied.
    #[error("promotion {code}: {source}")]
    Duration {
        /// Promotion code
        code: String,

        /// Underlying duration error
        #[source]
        source: DurationError,
    },
}

/// Derived status of a promotion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionStatus {
    /// Starts in the future
    Scheduled,

    /// Ended, ran out of its validity window, or hit its usage limit
    Expired,

    /// Currently redeemable
    Active,

    /// Switched off by an admin
    Disabled,
}

impl PromotionStatus {
    /// Status dot for this status.
    pub const fn indicator(self) -> StatusIndicator {
        match self {
            Self::Scheduled => StatusIndicator::new("Scheduled", Severity::Warning),
            Self::Expired => StatusIndicator::new("Expired", Severity::Danger),
            Self::Active => StatusIndicator::new("Active", Severity::Success),
            Self::Disabled => StatusIndicator::new("Disabled", Severity::Neutral),
        }
    }
}

impl fmt::Display for PromotionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.indicator().label)
    }
}

/// Derive the status of `promotion` at `now`.
///
/// Checks run in precedence order: disabled, scheduled, expired, active. The
/// usage limit only expires a promotion when the count equals the limit
/// exactly; a count that overshoots the limit stays active.
///
/// # Errors
///
/// Returns [`PromotionError::Duration`] if the duration check is reached and
/// `valid_duration` is malformed or overflows.
pub fn classify(promotion: &Promotion, now: Timestamp) -> Result<PromotionStatus, PromotionError> {
    if promotion.is_disabled {
        return Ok(PromotionStatus::Disabled);
    }

    if promotion.starts_at > now {
        return Ok(PromotionStatus::Scheduled);
    }

    if promotion.ends_at.is_some_and(|ends_at| ends_at < now) {
        return Ok(PromotionStatus::Expired);
    }

    if let Some(valid_until) = validity_end(promotion)?
        && now > valid_until
    {
        return Ok(PromotionStatus::Expired);
    }

    if promotion
        .usage_limit
        .is_some_and(|limit| promotion.usage_count == limit)
    {
        return Ok(PromotionStatus::Expired);
    }

    Ok(PromotionStatus::Active)
}

/// The earliest configured end of the promotion (`ends_at` or the end of `valid_duration`).
///
/// # Errors
///
/// Returns [`PromotionError::Duration`] if `valid_duration` is malformed or overflows.
pub fn expires_at(promotion: &Promotion) -> Result<Option<Timestamp>, PromotionError> {
    let valid_until = validity_end(promotion)?;

    Ok(match (promotion.ends_at, valid_until) {
        (Some(ends_at), Some(valid_until)) => Some(ends_at.min(valid_until)),
        (ends_at, valid_until) => ends_at.or(valid_until),
    })
}

/// Time left before an active promotion ends, `None` if it is not active or never ends.
///
/// # Errors
///
/// Returns [`PromotionError::Duration`] if `valid_duration` is malformed or overflows.
pub fn time_remaining(
    promotion: &Promotion,
    now: Timestamp,
) -> Result<Option<Duration>, PromotionError> {
    if classify(promotion, now)? != PromotionStatus::Active {
        return Ok(None);
    }

    let Some(end) = expires_at(promotion)? else {
        return Ok(None);
    };

    Ok(Duration::try_from(end.duration_since(now)).ok())
}

fn validity_end(promotion: &Promotion) -> Result<Option<Timestamp>, PromotionError> {
    promotion
        .valid_duration
        .as_deref()
        .map(|duration| end_of(duration, promotion.starts_at))
        .transpose()
        .map_err(|source| PromotionError::Duration {
            code: promotion.code.clone(),
            source,
        })
}
