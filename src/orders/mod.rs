//! Orders
//!
//! Order records as returned by the admin API. Statuses are stored on the
//! order; the dashboard only maps them to indicators.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::orders::status::{FulfillmentStatus, OrderStatus, PaymentStatus};

pub mod fulfillments;
pub mod status;
pub mod summary;

/// An order
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    /// Order id
    pub id: String,

    /// Human-facing order number
    #[serde(default)]
    pub display_id: Option<u64>,

    /// Overall order status
    pub status: OrderStatus,

    /// Payment status
    pub payment_status: PaymentStatus,

    /// Fulfillment status
    pub fulfillment_status: FulfillmentStatus,

    /// Customer email
    #[serde(default)]
    pub email: String,

    /// Lower-case ISO-4217 currency code
    pub currency_code: String,

    /// Tax rate in percent, when prices are shown tax inclusive
    #[serde(default)]
    pub tax_rate: Option<Decimal>,

    /// Sum of line items
    #[serde(default)]
    pub subtotal: i64,

    /// Total discount
    #[serde(default)]
    pub discount_total: i64,

    /// Total shipping
    #[serde(default)]
    pub shipping_total: i64,

    /// Total tax
    #[serde(default)]
    pub tax_total: i64,

    /// Grand total
    #[serde(default)]
    pub total: i64,

    /// Line items
    #[serde(default)]
    pub items: Vec<LineItem>,

    /// Applied discount codes
    #[serde(default)]
    pub discounts: Vec<AppliedDiscount>,

    /// Fulfillments of the original order
    #[serde(default)]
    pub fulfillments: Vec<Fulfillment>,

    /// Payments
    #[serde(default)]
    pub payments: Vec<Payment>,

    /// Selected shipping methods
    #[serde(default)]
    pub shipping_methods: Vec<ShippingMethod>,

    /// Claims raised against the order
    #[serde(default)]
    pub claims: Vec<ClaimOrder>,

    /// Swaps raised against the order
    #[serde(default)]
    pub swaps: Vec<Swap>,

    /// Shipping address
    #[serde(default)]
    pub shipping_address: Option<Address>,

    /// Billing address
    #[serde(default)]
    pub billing_address: Option<Address>,

    /// Suppress customer notifications
    #[serde(default)]
    pub no_notification: Option<bool>,

    /// Creation time
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// A line item
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LineItem {
    /// Item title
    pub title: String,

    /// Unit price in minor units
    pub unit_price: i64,

    /// Quantity ordered
    pub quantity: u32,

    /// Purchased variant
    #[serde(default)]
    pub variant: Option<Variant>,
}

/// Product variant
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Variant {
    /// Stock keeping unit
    #[serde(default)]
    pub sku: Option<String>,
}

/// A discount code applied to an order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppliedDiscount {
    /// Discount code
    pub code: String,
}

/// A shipment of some or all of an order's items
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Fulfillment {
    /// Fulfillment id
    pub id: String,

    /// Fulfillment provider
    #[serde(default)]
    pub provider_id: String,

    /// When the fulfillment was canceled
    #[serde(default)]
    pub canceled_at: Option<Timestamp>,

    /// When the fulfillment was shipped
    #[serde(default)]
    pub shipped_at: Option<Timestamp>,

    /// Tracking links
    #[serde(default)]
    pub tracking_links: Vec<TrackingLink>,

    /// Bare tracking numbers
    #[serde(default)]
    pub tracking_numbers: Vec<String>,

    /// Suppress customer notifications for this fulfillment
    #[serde(default)]
    pub no_notification: Option<bool>,
}

/// Carrier tracking link
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackingLink {
    /// Tracking number
    pub tracking_number: String,

    /// Carrier URL
    #[serde(default)]
    pub url: Option<String>,
}

/// A payment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Payment {
    /// Payment id
    pub id: String,

    /// Amount in minor units
    #[serde(default)]
    pub amount: i64,

    /// Payment provider
    #[serde(default)]
    pub provider_id: String,

    /// Creation time
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// A shipping method chosen at checkout
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShippingMethod {
    /// Underlying shipping option
    #[serde(default)]
    pub shipping_option: Option<ShippingOptionRef>,

    /// Provider-specific data
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Shipping option referenced by a shipping method
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShippingOptionRef {
    /// Option name
    #[serde(default)]
    pub name: String,
}

/// A claim (replacement / refund for damaged or missing items)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClaimOrder {
    /// Claim id
    pub id: String,

    /// Fulfillment status of the claim
    pub fulfillment_status: FulfillmentStatus,

    /// Fulfillments of the claim
    #[serde(default)]
    pub fulfillments: Vec<Fulfillment>,
}

/// A swap (exchange of items)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Swap {
    /// Swap id
    pub id: String,

    /// Fulfillment status of the swap
    pub fulfillment_status: FulfillmentStatus,

    /// Fulfillments of the swap
    #[serde(default)]
    pub fulfillments: Vec<Fulfillment>,
}

/// Postal address
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Address {
    /// First name
    pub first_name: Option<String>,

    /// Last name
    pub last_name: Option<String>,

    /// Address line 1
    pub address_1: Option<String>,

    /// Address line 2
    pub address_2: Option<String>,

    /// City
    pub city: Option<String>,

    /// Province / state
    pub province: Option<String>,

    /// Postal code
    pub postal_code: Option<String>,

    /// ISO-3166 country code
    pub country_code: Option<String>,

    /// Phone number
    pub phone: Option<String>,
}
