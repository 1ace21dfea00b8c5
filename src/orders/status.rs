//! Order Statuses
//!
//! Stored order, payment and fulfillment statuses with their indicator tables.
//! Wire values this dashboard does not know deserialize to `Unknown` and, like
//! members without a table entry, render no indicator.

use serde::Deserialize;

use crate::status::{Severity, StatusIndicator};

/// Overall order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed, not yet completed
    Pending,

    /// Completed
    Completed,

    /// Archived
    Archived,

    /// Canceled
    Canceled,

    /// Needs admin action
    RequiresAction,

    /// Unrecognised wire value
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Status dot for this status, if it has one.
    ///
    /// The labels are the ones the dashboard has always shown, even though
    /// "Published", "Proposed" and "Rejected" read like another entity's table.
    pub const fn indicator(self) -> Option<StatusIndicator> {
        match self {
            Self::Completed => Some(StatusIndicator::new("Published", Severity::Success)),
            Self::Pending => Some(StatusIndicator::new("Processing", Severity::Neutral)),
            Self::Canceled => Some(StatusIndicator::new("Proposed", Severity::Warning)),
            Self::RequiresAction => Some(StatusIndicator::new("Rejected", Severity::Danger)),
            Self::Archived | Self::Unknown => None,
        }
    }
}

/// Payment status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Nothing paid
    NotPaid,

    /// Authorized, awaiting capture
    Awaiting,

    /// Captured
    Captured,

    /// Partially refunded
    PartiallyRefunded,

    /// Refunded
    Refunded,

    /// Canceled
    Canceled,

    /// Needs admin action
    RequiresAction,

    /// Unrecognised wire value
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    /// Status dot for this status, if it has one.
    pub const fn indicator(self) -> Option<StatusIndicator> {
        match self {
            Self::Captured => Some(StatusIndicator::new("Paid", Severity::Success)),
            Self::Awaiting => Some(StatusIndicator::new("Awaiting", Severity::Neutral)),
            Self::Canceled => Some(StatusIndicator::new("Canceled", Severity::Danger)),
            Self::RequiresAction => Some(StatusIndicator::new("Requires Action", Severity::Danger)),
            Self::NotPaid | Self::PartiallyRefunded | Self::Refunded | Self::Unknown => None,
        }
    }
}

/// Fulfillment status of an order, claim or swap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    /// Nothing fulfilled yet
    NotFulfilled,

    /// Some items fulfilled
    PartiallyFulfilled,

    /// All items fulfilled
    Fulfilled,

    /// Some items shipped
    PartiallyShipped,

    /// All items shipped
    Shipped,

    /// Some items returned
    PartiallyReturned,

    /// All items returned
    Returned,

    /// Canceled
    Canceled,

    /// Needs admin action
    RequiresAction,

    /// Unrecognised wire value
    #[serde(other)]
    Unknown,
}

impl FulfillmentStatus {
    /// Status dot for this status, if it has one.
    pub const fn indicator(self) -> Option<StatusIndicator> {
        match self {
            Self::Shipped => Some(StatusIndicator::new("Shipped", Severity::Success)),
            Self::Fulfilled => Some(StatusIndicator::new("Fulfilled", Severity::Warning)),
            Self::Canceled => Some(StatusIndicator::new("Canceled", Severity::Danger)),
            Self::PartiallyFulfilled => Some(StatusIndicator::new(
                "Partially fulfilled",
                Severity::Warning,
            )),
            Self::RequiresAction => Some(StatusIndicator::new("Requires Action", Severity::Danger)),
            Self::NotFulfilled
            | Self::PartiallyShipped
            | Self::PartiallyReturned
            | Self::Returned
            | Self::Unknown => None,
        }
    }
}
