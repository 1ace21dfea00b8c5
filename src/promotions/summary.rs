//! Promotion Summaries
//!
//! Text projections shown in the discount table columns.

use std::fmt;

use crate::{
    money::format_amount,
    promotions::{Promotion, RuleType, conditions::DiscountCondition},
};

/// Label shown for free shipping rules.
pub const FREE_SHIPPING: &str = "Free Shipping";

/// Label shown when a rule has no conditions.
pub const ALL_PRODUCTS: &str = "all products apply";

/// Discount amount text (e.g. `"$5.00"`, `"10%"`, `"Free Shipping"`).
///
/// Fixed amounts use the currency of the first region and render empty when
/// there is no region or its currency is not recognised. Unknown rule types
/// render empty.
pub fn amount_text(promotion: &Promotion) -> String {
    match promotion.rule.rule_type {
        RuleType::Fixed => promotion
            .currency_code()
            .and_then(|code| format_amount(promotion.rule.value, code).ok())
            .unwrap_or_default(),
        RuleType::Percentage => format!("{}%", promotion.rule.value),
        RuleType::FreeShipping => FREE_SHIPPING.to_string(),
        RuleType::Unknown => String::new(),
    }
}

/// Upper-cased currency code for fixed amount rules, empty otherwise.
pub fn currency_text(promotion: &Promotion) -> String {
    match promotion.rule.rule_type {
        RuleType::Fixed => promotion
            .currency_code()
            .map(str::to_ascii_uppercase)
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Redemption count, or `"-"` when the promotion has never been redeemed.
pub fn redemptions_text(promotion: &Promotion) -> String {
    if promotion.usage_count > 0 {
        promotion.usage_count.to_string()
    } else {
        "-".to_string()
    }
}

/// Summary of the products a promotion applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductsSummary {
    /// No conditions, every product qualifies
    AllProducts,

    /// First condition entry plus a count of the remaining entries
    Conditions {
        /// Text of the first entry of the first condition
        headline: String,

        /// Entries across all conditions beyond the headline
        more: usize,
    },
}

impl ProductsSummary {
    /// Summarise the conditions of `promotion`.
    pub fn of(promotion: &Promotion) -> Self {
        let conditions = &promotion.rule.conditions;

        let Some(first) = conditions.first() else {
            return Self::AllProducts;
        };

        let total: usize = conditions.iter().map(DiscountCondition::len).sum();

        Self::Conditions {
            headline: first.headline().unwrap_or_default().to_string(),
            more: total.saturating_sub(1),
        }
    }

    /// Headline text.
    pub fn text(&self) -> &str {
        match self {
            Self::AllProducts => ALL_PRODUCTS,
            Self::Conditions { headline, .. } => headline,
        }
    }

    /// Number of entries not shown in the headline.
    pub fn more(&self) -> usize {
        match self {
            Self::AllProducts => 0,
            Self::Conditions { more, .. } => *more,
        }
    }
}

impl fmt::Display for ProductsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())?;

        match self.more() {
            0 => Ok(()),
            more => write!(f, " +{more} more"),
        }
    }
}
