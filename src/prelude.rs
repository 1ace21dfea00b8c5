//! Promodesk prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    duration::{DurationError, end_of, parse_duration},
    fixtures::{Fixture, FixtureError},
    money::{AmountError, format_amount, format_amount_with_tax},
    orders::{
        Order,
        fulfillments::{
            CancelTarget, FulfillmentAction, FulfillmentEntry, FulfillmentOrigin, FulfillmentView,
            Tracking, gather_fulfillments,
        },
        status::{FulfillmentStatus, OrderStatus, PaymentStatus},
        summary::{Contact, OrderSummary, PaymentLine, ShippingMethodLine},
    },
    promotions::{
        Promotion, PromotionRule, Region, RuleType,
        conditions::DiscountCondition,
        status::{PromotionError, PromotionStatus, classify, expires_at, time_remaining},
        summary::{ProductsSummary, amount_text, currency_text, redemptions_text},
    },
    report::{DiscountTable, OrderReport, ReportError},
    shipping::{
        FulfillmentChoice, FulfillmentProvider, NewShippingOption, ShippingOptionError,
        ShippingOptionForm, ShippingRegion, build_payload, fulfillment_choices,
    },
    status::{Severity, StatusIndicator},
};
