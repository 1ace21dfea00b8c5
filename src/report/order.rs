//! Order detail report

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use tracing::debug;

use crate::{
    orders::{
        Order,
        fulfillments::{FulfillmentAction, FulfillmentView, Tracking, gather_fulfillments},
        summary::OrderSummary,
    },
    report::{ReportError, colorize_borders, indicator_cell, severity_color},
    status::StatusIndicator,
};

/// Detail view of a single order
#[derive(Debug, Clone)]
pub struct OrderReport<'a> {
    order: &'a Order,
    summary: OrderSummary,
}

impl<'a> OrderReport<'a> {
    /// Prepare the report for `order`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Amount`] if the order's amounts cannot be formatted.
    pub fn new(order: &'a Order) -> Result<Self, ReportError> {
        Ok(Self {
            order,
            summary: OrderSummary::new(order)?,
        })
    }

    /// The order summary shown in the report
    pub fn summary(&self) -> &OrderSummary {
        &self.summary
    }

    /// Write the report to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::IO`] if writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReportError> {
        write_table(&mut out, &self.header_table())?;
        write_table(&mut out, &self.items_table())?;
        write_table(&mut out, &self.payments_table())?;
        write_table(&mut out, &self.shipping_methods_table())?;
        write_table(&mut out, &self.fulfillments_table())?;
        write_table(&mut out, &self.customer_table())?;

        debug!(order_id = %self.order.id, "rendered order report");

        Ok(())
    }

    fn header_table(&self) -> tabled::Table {
        let order = self.order;
        let title = order
            .display_id
            .map_or_else(|| order.id.clone(), |id| format!("Order #{id}"));

        let statuses = [
            ("Status", order.status.indicator()),
            ("Payment", order.payment_status.indicator()),
            ("Fulfillment", order.fulfillment_status.indicator()),
        ];

        let mut builder = Builder::default();

        builder.push_record([title, order.email.clone()]);

        for (label, indicator) in statuses {
            builder.push_record([
                label.to_string(),
                indicator.map(indicator_cell).unwrap_or_default(),
            ]);
        }

        builder.push_record([
            "Payment provider".to_string(),
            self.summary.payment_providers.clone(),
        ]);

        let mut table = builder.build();

        table.with(Theme::from(Style::modern_rounded()));
        table.modify(Rows::first(), Color::BOLD);

        for (idx, (_, indicator)) in statuses.iter().enumerate() {
            if let Some(StatusIndicator { severity, .. }) = indicator {
                table.modify((idx + 1, 1), severity_color(*severity));
            }
        }

        table
    }

    fn items_table(&self) -> tabled::Table {
        let summary = &self.summary;
        let mut builder = Builder::default();

        builder.push_record(["Item", "SKU", "Unit price", "Qty", "Total"]);

        for item in &summary.items {
            builder.push_record([
                item.title.clone(),
                item.sku.clone().unwrap_or_default(),
                item.unit_price.clone(),
                format!("x {}", item.quantity),
                item.total.clone(),
            ]);
        }

        for line in &summary.totals {
            builder.push_record([
                line.label.clone(),
                String::new(),
                String::new(),
                String::new(),
                line.amount.clone(),
            ]);
        }

        let mut table = builder.build();

        table.with(Theme::from(Style::modern_rounded()));
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Rows::last(), Color::BOLD);
        table.modify(Columns::new(2..5), Alignment::right());

        table
    }

    fn payments_table(&self) -> tabled::Table {
        let summary = &self.summary;
        let mut builder = Builder::default();

        builder.push_record(["Payment", "Created", "Amount"]);

        for payment in &summary.payments {
            builder.push_record([
                payment.id.clone(),
                payment.created_at.clone().unwrap_or_default(),
                payment.amount.clone(),
            ]);
        }

        builder.push_record([
            summary.total_paid.label.clone(),
            String::new(),
            summary.total_paid.amount.clone(),
        ]);

        let mut table = builder.build();

        table.with(Theme::from(Style::modern_rounded()));
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Rows::last(), Color::BOLD);
        table.modify(Columns::new(2..3), Alignment::right());

        table
    }

    fn shipping_methods_table(&self) -> tabled::Table {
        let mut builder = Builder::default();

        builder.push_record(["Shipping method", "Data"]);

        for method in &self.summary.shipping_methods {
            builder.push_record([method.name.clone(), method.data.clone().unwrap_or_default()]);
        }

        let mut table = builder.build();

        table.with(Theme::from(Style::modern_rounded()));
        table.modify(Rows::first(), Color::BOLD);

        table
    }

    fn fulfillments_table(&self) -> tabled::Table {
        let mut builder = Builder::default();

        builder.push_record(["Fulfillment", "Shipping", "Notes", "Actions"]);

        for entry in gather_fulfillments(self.order) {
            let view = FulfillmentView::new(&entry, self.order);

            builder.push_record([
                view.headline.clone(),
                shipping_cell(&view),
                view.notification_note.unwrap_or_default().to_string(),
                actions_cell(&view.actions),
            ]);
        }

        let mut table = builder.build();

        table.with(Theme::from(Style::modern_rounded()));
        table.modify(Rows::first(), Color::BOLD);

        table
    }

    fn customer_table(&self) -> tabled::Table {
        let summary = &self.summary;
        let mut builder = Builder::default();

        let contact = &summary.contact;

        builder.push_record(["Customer", "Contact", "Shipping", "Billing"]);
        builder.push_record([
            format!("{}\n{}", summary.customer_name, summary.customer_location),
            [Some(contact.email.as_str()), contact.phone.as_deref()]
                .into_iter()
                .flatten()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join("\n"),
            summary.shipping_address.join("\n"),
            summary.billing_address.join("\n"),
        ]);

        let mut table = builder.build();

        table.with(Theme::from(Style::modern_rounded()));
        table.modify(Rows::first(), Color::BOLD);

        table
    }
}

fn shipping_cell(view: &FulfillmentView<'_>) -> String {
    let tracking = match &view.tracking {
        Some(Tracking::Links(links)) => links
            .iter()
            .map(|link| match &link.url {
                Some(url) => format!("{} ({url})", link.tracking_number),
                None => link.tracking_number.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Some(Tracking::Numbers(numbers)) => numbers.clone(),
        None => return view.shipping_line.to_string(),
    };

    format!("{}\n{tracking}", view.shipping_line)
}

fn actions_cell(actions: &[FulfillmentAction]) -> String {
    actions
        .iter()
        .map(|action| match action {
            FulfillmentAction::MarkShipped => "Mark shipped",
            FulfillmentAction::Cancel => "Cancel fulfillment",
            FulfillmentAction::ToggleDetails => "Show details",
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_table(out: &mut impl io::Write, table: &tabled::Table) -> Result<(), ReportError> {
    writeln!(out, "\n{}", colorize_borders(&table.to_string())).map_err(|_err| ReportError::IO)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn order() -> Result<Order, serde_json::Error> {
        serde_json::from_value(json!({
            "id": "order_01",
            "display_id": 2414,
            "status": "pending",
            "payment_status": "captured",
            "fulfillment_status": "partially_fulfilled",
            "email": "jo@example.com",
            "currency_code": "gbp",
            "subtotal": 2000,
            "total": 2000,
            "items": [{ "title": "Hoodie", "unit_price": 2000, "quantity": 1, "variant": { "sku": "HOOD-M" } }],
            "payments": [{ "id": "pay_1", "provider_id": "stripe", "amount": 2000, "created_at": "2024-02-02T09:15:00Z" }],
            "shipping_methods": [{ "shipping_option": { "name": "Express" }, "data": { "carrier": "dhl" } }],
            "fulfillments": [
                {
                    "id": "ful_1",
                    "provider_id": "manual",
                    "shipped_at": "2024-02-02T12:00:00Z",
                    "tracking_links": [{ "tracking_number": "RM1", "url": "https://track.example/RM1" }]
                },
                { "id": "ful_2", "provider_id": "manual", "canceled_at": "2024-02-03T12:00:00Z" }
            ],
            "swaps": [{
                "id": "swap_1",
                "fulfillment_status": "fulfilled",
                "fulfillments": [{ "id": "ful_3", "provider_id": "manual" }]
            }],
            "shipping_address": {
                "first_name": "Jo",
                "last_name": "Bloggs",
                "address_1": "1 High Street",
                "city": "Leeds",
                "postal_code": "LS1 1AA",
                "country_code": "gb",
                "phone": "+44 113 496 0000"
            }
        }))
    }

    #[test]
    fn write_to_renders_all_sections() -> TestResult {
        let order = order()?;
        let report = OrderReport::new(&order)?;
        let mut out = Vec::new();

        report.write_to(&mut out)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("Order #2414"));
        assert!(output.contains("● Processing"));
        assert!(output.contains("pay_1"));
        assert!(output.contains("02 Feb 2024 09:15"));
        assert!(output.contains("Total Paid"));
        assert!(output.contains("Express"));
        assert!(output.contains(r#"{"carrier":"dhl"}"#));
        assert!(output.contains("+44 113 496 0000"));
        assert!(output.contains("● Paid"));
        assert!(output.contains("● Partially fulfilled"));
        assert!(output.contains("Stripe"));
        assert!(output.contains("HOOD-M"));
        assert!(output.contains("£20.00"));
        assert!(output.contains("Fulfillment #1 Fulfilled by provider manual"));
        assert!(output.contains("RM1 (https://track.example/RM1)"));
        assert!(output.contains("Fulfillment #2 has been canceled"));
        assert!(output.contains("Swap Fulfillment #1 Fulfilled by provider manual"));
        assert!(output.contains("Mark shipped, Cancel fulfillment"));
        assert!(output.contains("Jo Bloggs"));
        assert!(output.contains("No billing address"));

        Ok(())
    }

    #[test]
    fn report_exposes_summary() -> TestResult {
        let order = order()?;
        let report = OrderReport::new(&order)?;

        assert_eq!(report.summary().currency, "GBP");

        Ok(())
    }

    #[test]
    fn unknown_currency_is_reported() -> TestResult {
        let mut order = order()?;
        order.currency_code = "zzz".to_string();

        assert!(matches!(
            OrderReport::new(&order),
            Err(ReportError::Amount(_))
        ));

        Ok(())
    }
}
