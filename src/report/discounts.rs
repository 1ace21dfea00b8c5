//! Discount table

use std::{io, time::Duration};

use humanize_duration::{Truncate, prelude::DurationExt};
use jiff::Timestamp;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use tracing::debug;

use crate::{
    promotions::{
        Promotion,
        status::{PromotionStatus, classify, time_remaining},
        summary::{ProductsSummary, amount_text, currency_text, redemptions_text},
    },
    report::{ReportError, colorize_borders, indicator_cell, severity_color},
};

const HEADER: [&str; 8] = [
    "Code",
    "Description",
    "Amount",
    "Currency",
    "Status",
    "Products",
    "Redemptions",
    "Ends in",
];

const STATUS_COLUMN: usize = 4;

/// One row of the discount table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountRow {
    /// Discount code
    pub code: String,

    /// Rule description
    pub description: String,

    /// Amount text
    pub amount: String,

    /// Currency text
    pub currency: String,

    /// Derived status
    pub status: PromotionStatus,

    /// Products the discount applies to
    pub products: ProductsSummary,

    /// Redemption count text
    pub redemptions: String,

    /// Time left for active discounts with an end
    pub ends_in: Option<Duration>,
}

impl DiscountRow {
    /// Project `promotion` at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Promotion`] if the status cannot be derived.
    pub fn new(promotion: &Promotion, now: Timestamp) -> Result<Self, ReportError> {
        Ok(Self {
            code: promotion.code.clone(),
            description: promotion.rule.description.clone(),
            amount: amount_text(promotion),
            currency: currency_text(promotion),
            status: classify(promotion, now)?,
            products: ProductsSummary::of(promotion),
            redemptions: redemptions_text(promotion),
            ends_in: time_remaining(promotion, now)?,
        })
    }

    fn ends_in_text(&self) -> String {
        self.ends_in.map_or_else(
            || "-".to_string(),
            |remaining| format!("{}", remaining.human(Truncate::Minute)),
        )
    }
}

/// Discount table evaluated at a fixed instant
#[derive(Debug, Clone)]
pub struct DiscountTable {
    rows: Vec<DiscountRow>,
}

impl DiscountTable {
    /// Build the table for `promotions` at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Promotion`] if any promotion's status cannot be derived.
    pub fn new(promotions: &[Promotion], now: Timestamp) -> Result<Self, ReportError> {
        let rows = promotions
            .iter()
            .map(|promotion| DiscountRow::new(promotion, now))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows })
    }

    /// Rows in promotion order
    pub fn rows(&self) -> &[DiscountRow] {
        &self.rows
    }

    /// Number of rows with the given status
    pub fn count(&self, status: PromotionStatus) -> usize {
        self.rows.iter().filter(|row| row.status == status).count()
    }

    /// Write the table to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::IO`] if writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReportError> {
        let mut builder = Builder::default();

        builder.push_record(HEADER);

        for row in &self.rows {
            builder.push_record([
                row.code.clone(),
                row.description.clone(),
                row.amount.clone(),
                row.currency.clone(),
                indicator_cell(row.status.indicator()),
                row.products.to_string(),
                row.redemptions.clone(),
                row.ends_in_text(),
            ]);
        }

        let mut table = builder.build();

        table.with(Theme::from(Style::modern_rounded()));
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..3), Alignment::right());
        table.modify(Columns::new(6..7), Alignment::right());

        for (idx, row) in self.rows.iter().enumerate() {
            table.modify(
                (idx + 1, STATUS_COLUMN),
                severity_color(row.status.indicator().severity),
            );
        }

        debug!(row_count = self.rows.len(), "rendered discount table");

        writeln!(out, "\n{}", colorize_borders(&table.to_string())).map_err(|_err| ReportError::IO)
    }
}
