//! Promodesk
//!
//! Promodesk derives the display state of a store admin's discount and order
//! views: promotion statuses and table summaries, order, payment and
//! fulfillment indicators, order summaries and shipping option payloads.
//!
//! The derivation core is pure. Every time-dependent function takes the
//! evaluation instant as an argument.

pub mod config;
pub mod duration;
pub mod fixtures;
pub mod logging;
pub mod money;
pub mod orders;
pub mod prelude;
pub mod promotions;
pub mod report;
pub mod shipping;
pub mod status;
