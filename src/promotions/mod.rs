//! Promotions
//!
//! Promotion (discount code) records as returned by the admin API, along with
//! their derived status and table summaries.

use jiff::Timestamp;
use serde::Deserialize;

use crate::promotions::conditions::DiscountCondition;

pub mod conditions;
pub mod status;
pub mod summary;

/// A promotion / discount code
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Promotion {
    /// Promotion id
    #[serde(default)]
    pub id: String,

    /// Unique code customers enter at checkout
    pub code: String,

    /// Manually disabled by an admin
    #[serde(default)]
    pub is_disabled: bool,

    /// Start of the promotion
    pub starts_at: Timestamp,

    /// Optional fixed end of the promotion
    #[serde(default)]
    pub ends_at: Option<Timestamp>,

    /// Optional ISO-8601 validity window, measured from `starts_at`
    #[serde(default)]
    pub valid_duration: Option<String>,

    /// Number of redemptions so far
    #[serde(default)]
    pub usage_count: u64,

    /// Optional maximum number of redemptions
    #[serde(default)]
    pub usage_limit: Option<u64>,

    /// Discount rule
    pub rule: PromotionRule,

    /// Regions the promotion is valid in, first region drives the currency
    #[serde(default)]
    pub regions: Vec<Region>,
}

impl Promotion {
    /// Currency code of the first associated region, if any.
    pub fn currency_code(&self) -> Option<&str> {
        self.regions.first().map(|region| region.currency_code.as_str())
    }
}

/// Discount rule attached to a promotion
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PromotionRule {
    /// Rule type
    #[serde(rename = "type")]
    pub rule_type: RuleType,

    /// Minor units for `fixed`, percent points for `percentage`, unused for `free_shipping`
    #[serde(default)]
    pub value: i64,

    /// Free-text description shown in the discount table
    #[serde(default)]
    pub description: String,

    /// Product / customer conditions limiting where the rule applies
    #[serde(default)]
    pub conditions: Vec<DiscountCondition>,
}

/// Kind of discount a rule grants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    /// Fixed amount off
    Fixed,

    /// Percentage off
    Percentage,

    /// Free shipping
    FreeShipping,

    /// Any rule type this dashboard does not know about
    #[serde(other)]
    Unknown,
}

/// Region a promotion is valid in
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Region {
    /// Region id
    #[serde(default)]
    pub id: String,

    /// Region name
    #[serde(default)]
    pub name: String,

    /// Lower-case ISO-4217 currency code
    pub currency_code: String,
}
