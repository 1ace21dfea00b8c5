//! Reports
//!
//! Terminal renderings of the discount table and the order detail view.

use std::fmt::Write;

use tabled::settings::Color;
use thiserror::Error;

use crate::{
    money::AmountError,
    promotions::status::PromotionError,
    status::{Severity, StatusIndicator},
};

pub mod discounts;
pub mod order;

pub use discounts::DiscountTable;
pub use order::OrderReport;

/// Errors that can occur when rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A promotion's status could not be derived.
    #[error(transparent)]
    Promotion(#[from] PromotionError),

    /// An amount could not be formatted.
    #[error(transparent)]
    Amount(#[from] AmountError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// Status cell text: a dot followed by the label.
pub(crate) fn indicator_cell(indicator: StatusIndicator) -> String {
    format!("● {}", indicator.label)
}

/// Foreground colour for a severity.
pub(crate) fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Warning => Color::FG_YELLOW,
        Severity::Danger => Color::FG_RED,
        Severity::Success => Color::FG_GREEN,
        Severity::Neutral => color_dark_grey(),
    }
}

/// ANSI dark grey foreground.
pub(crate) fn color_dark_grey() -> Color {
    Color::new("\x1b[90m", "\x1b[0m")
}

/// Paint runs of box drawing characters dark grey.
pub(crate) fn colorize_borders(table: &str) -> String {
    let mut out = String::with_capacity(table.len() + 256);
    let mut in_run = false;

    for ch in table.chars() {
        let box_char = ('\u{2500}'..='\u{257F}').contains(&ch);

        if box_char && !in_run {
            _ = out.write_str("\x1b[90m");
            in_run = true;
        } else if !box_char && in_run {
            _ = out.write_str("\x1b[0m");
            in_run = false;
        }

        out.push(ch);
    }

    if in_run {
        _ = out.write_str("\x1b[0m");
    }

    out
}
