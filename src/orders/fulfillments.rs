//! Order Fulfillments
//!
//! Fulfillments of the order itself, of its claims and of its swaps are shown
//! together as a single list, in that order.

use std::fmt;

use smallvec::SmallVec;

use crate::orders::{Fulfillment, Order, TrackingLink, status::FulfillmentStatus};

/// Where a fulfillment came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FulfillmentOrigin {
    /// The original order
    Default,

    /// A claim raised against the order
    Claim,

    /// A swap raised against the order
    Swap,
}

impl FulfillmentOrigin {
    /// Title prefix used when numbering fulfillments of this origin.
    pub const fn title_prefix(self) -> &'static str {
        match self {
            Self::Default => "Fulfillment",
            Self::Claim => "Claim Fulfillment",
            Self::Swap => "Swap Fulfillment",
        }
    }

    /// Wire name of the origin.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Claim => "claim",
            Self::Swap => "swap",
        }
    }
}

impl fmt::Display for FulfillmentOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request needed to cancel a fulfillment, depending on its origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelTarget<'a> {
    /// Cancel a fulfillment of the order
    Order {
        /// Fulfillment id
        fulfillment_id: &'a str,
    },

    /// Cancel a fulfillment of a claim
    Claim {
        /// Claim id
        claim_id: &'a str,

        /// Fulfillment id
        fulfillment_id: &'a str,
    },

    /// Cancel a fulfillment of a swap
    Swap {
        /// Swap id
        swap_id: &'a str,

        /// Fulfillment id
        fulfillment_id: &'a str,
    },
}

/// A fulfillment tagged with its origin and display title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FulfillmentEntry<'a> {
    /// Display title, e.g. `"Claim Fulfillment #2"`
    pub title: String,

    /// Origin of the fulfillment
    pub origin: FulfillmentOrigin,

    /// Id of the claim or swap the fulfillment belongs to
    pub parent_id: Option<&'a str>,

    /// The fulfillment itself
    pub fulfillment: &'a Fulfillment,
}

impl<'a> FulfillmentEntry<'a> {
    fn numbered(
        origin: FulfillmentOrigin,
        parent_id: Option<&'a str>,
        index: usize,
        fulfillment: &'a Fulfillment,
    ) -> Self {
        Self {
            title: format!("{} #{}", origin.title_prefix(), index + 1),
            origin,
            parent_id,
            fulfillment,
        }
    }

    /// Request needed to cancel this fulfillment.
    pub fn cancel_target(&self) -> CancelTarget<'a> {
        let fulfillment_id = self.fulfillment.id.as_str();

        match (self.origin, self.parent_id) {
            (FulfillmentOrigin::Claim, Some(claim_id)) => CancelTarget::Claim {
                claim_id,
                fulfillment_id,
            },
            (FulfillmentOrigin::Swap, Some(swap_id)) => CancelTarget::Swap {
                swap_id,
                fulfillment_id,
            },
            _ => CancelTarget::Order { fulfillment_id },
        }
    }
}

/// Gather the fulfillments of an order, its claims and its swaps into one list.
///
/// Numbering is 1-based and restarts for the order and for each claim or
/// swap. Claims and swaps that are not fulfilled yet are skipped.
pub fn gather_fulfillments(order: &Order) -> SmallVec<[FulfillmentEntry<'_>; 4]> {
    let own = order
        .fulfillments
        .iter()
        .enumerate()
        .map(|(idx, f)| FulfillmentEntry::numbered(FulfillmentOrigin::Default, None, idx, f));

    let claims = order
        .claims
        .iter()
        .filter(|claim| claim.fulfillment_status != FulfillmentStatus::NotFulfilled)
        .flat_map(|claim| {
            claim.fulfillments.iter().enumerate().map(move |(idx, f)| {
                FulfillmentEntry::numbered(FulfillmentOrigin::Claim, Some(claim.id.as_str()), idx, f)
            })
        });

    let swaps = order
        .swaps
        .iter()
        .filter(|swap| swap.fulfillment_status != FulfillmentStatus::NotFulfilled)
        .flat_map(|swap| {
            swap.fulfillments.iter().enumerate().map(move |(idx, f)| {
                FulfillmentEntry::numbered(FulfillmentOrigin::Swap, Some(swap.id.as_str()), idx, f)
            })
        });

    own.chain(claims).chain(swaps).collect()
}

/// Action available on a fulfillment row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FulfillmentAction {
    /// Record the shipment
    MarkShipped,

    /// Cancel the fulfillment
    Cancel,

    /// Expand or collapse a canceled fulfillment
    ToggleDetails,
}

/// Tracking details of a shipped fulfillment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tracking<'a> {
    /// Carrier links
    Links(&'a [TrackingLink]),

    /// Bare tracking numbers, comma separated
    Numbers(String),
}

/// Display state of one fulfillment row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FulfillmentView<'a> {
    /// Headline text
    pub headline: String,

    /// Whether the row starts expanded
    pub expanded: bool,

    /// Note shown when notification settings differ from the order's
    pub notification_note: Option<&'static str>,

    /// `"Not shipped"` or `"Tracking"`
    pub shipping_line: &'static str,

    /// Tracking details, if any
    pub tracking: Option<Tracking<'a>>,

    /// Actions offered for the row
    pub actions: SmallVec<[FulfillmentAction; 2]>,
}

impl<'a> FulfillmentView<'a> {
    /// Derive the display state of `entry` within `order`.
    pub fn new(entry: &FulfillmentEntry<'a>, order: &Order) -> Self {
        let fulfillment = entry.fulfillment;
        let canceled = fulfillment.canceled_at.is_some();
        let shipped = fulfillment.shipped_at.is_some();

        let headline = if canceled {
            format!("{} has been canceled", entry.title)
        } else {
            format!(
                "{} Fulfilled by provider {}",
                entry.title, fulfillment.provider_id
            )
        };

        let fulfillment_muted = fulfillment.no_notification.unwrap_or(false);
        let notification_note = (fulfillment_muted != order.no_notification.unwrap_or(false))
            .then_some(if fulfillment_muted {
                "Notifications related to this fulfillment are disabled."
            } else {
                "Notifications related to this fulfillment are enabled."
            });

        let tracking = if shipped && !fulfillment.tracking_links.is_empty() {
            Some(Tracking::Links(&fulfillment.tracking_links))
        } else if fulfillment.tracking_numbers.is_empty() {
            None
        } else {
            Some(Tracking::Numbers(fulfillment.tracking_numbers.join(", ")))
        };

        let actions = match (canceled, shipped) {
            (true, _) => SmallVec::from_slice(&[FulfillmentAction::ToggleDetails]),
            (false, false) => {
                SmallVec::from_slice(&[FulfillmentAction::MarkShipped, FulfillmentAction::Cancel])
            }
            (false, true) => SmallVec::new(),
        };

        Self {
            headline,
            expanded: !canceled,
            notification_note,
            shipping_line: if shipped { "Tracking" } else { "Not shipped" },
            tracking,
            actions,
        }
    }
}
