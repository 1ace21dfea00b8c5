//! Order Summary
//!
//! Display projection of an order's items, totals, payments, shipping
//! methods, contact details and addresses. Amounts are tax inclusive when the
//! order carries a tax rate.

use serde_json::Value;
use smallvec::SmallVec;

use crate::{
    money::{AmountError, format_amount_with_tax},
    orders::{Address, Order},
};

/// Shown in place of a missing billing address.
pub const NO_BILLING_ADDRESS: &str = "No billing address";

const PAYMENT_TIME_FORMAT: &str = "%d %b %Y %I:%M";

/// A rendered line item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLine {
    /// Item title
    pub title: String,

    /// Variant SKU, if any
    pub sku: Option<String>,

    /// Formatted unit price
    pub unit_price: String,

    /// Quantity ordered
    pub quantity: u32,

    /// Formatted line total
    pub total: String,
}

/// A labelled total (e.g. `Subtotal`, `Discount: SUMMER10`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    /// Row label
    pub label: String,

    /// Formatted amount
    pub amount: String,
}

impl SummaryLine {
    fn new(label: impl Into<String>, amount: String) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// A rendered payment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentLine {
    /// Payment id
    pub id: String,

    /// Formatted amount
    pub amount: String,

    /// Creation time, `"DD Mon YYYY hh:mm"` in UTC
    pub created_at: Option<String>,
}

/// A rendered shipping method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingMethodLine {
    /// Shipping option name, `"-"` when the option is missing
    pub name: String,

    /// Provider data as compact JSON, when there is any
    pub data: Option<String>,
}

/// Customer contact details
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    /// Order email
    pub email: String,

    /// Phone number from the shipping address
    pub phone: Option<String>,
}

/// Display projection of an order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    /// Upper-cased currency code shown next to amounts
    pub currency: String,

    /// Rendered line items
    pub items: Vec<ItemLine>,

    /// Subtotal, discounts, shipping, tax and total rows
    pub totals: Vec<SummaryLine>,

    /// Payment providers, capitalised and comma separated
    pub payment_providers: String,

    /// Rendered payments
    pub payments: Vec<PaymentLine>,

    /// `Total Paid` row
    pub total_paid: SummaryLine,

    /// Rendered shipping methods
    pub shipping_methods: Vec<ShippingMethodLine>,

    /// Customer contact details
    pub contact: Contact,

    /// Customer name from the shipping address
    pub customer_name: String,

    /// Customer location from the shipping address
    pub customer_location: String,

    /// Shipping address lines
    pub shipping_address: SmallVec<[String; 2]>,

    /// Billing address lines, or [`NO_BILLING_ADDRESS`]
    pub billing_address: SmallVec<[String; 2]>,
}

impl OrderSummary {
    /// Build the summary of `order`.
    ///
    /// # Errors
    ///
    /// Returns an [`AmountError`] if the order currency is unknown or a
    /// tax-inclusive amount overflows.
    pub fn new(order: &Order) -> Result<Self, AmountError> {
        let money = |minor: i64| format_amount_with_tax(minor, &order.currency_code, order.tax_rate);

        let items = order
            .items
            .iter()
            .map(|item| -> Result<ItemLine, AmountError> {
                let total = item
                    .unit_price
                    .checked_mul(i64::from(item.quantity))
                    .ok_or(AmountError::Overflow)?;

                Ok(ItemLine {
                    title: item.title.clone(),
                    sku: item.variant.as_ref().and_then(|v| v.sku.clone()),
                    unit_price: money(item.unit_price)?,
                    quantity: item.quantity,
                    total: money(total)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut totals = vec![SummaryLine::new("Subtotal", money(order.subtotal)?)];

        for discount in &order.discounts {
            totals.push(SummaryLine::new(
                format!("Discount: {}", discount.code),
                format!("-{}", money(order.discount_total)?),
            ));
        }

        totals.push(SummaryLine::new("Shipping", money(order.shipping_total)?));
        totals.push(SummaryLine::new("Tax", money(order.tax_total)?));
        totals.push(SummaryLine::new("Total", money(order.total)?));

        let payment_providers = order
            .payments
            .iter()
            .map(|payment| capitalize(&payment.provider_id))
            .collect::<Vec<_>>()
            .join(", ");

        let payments = order
            .payments
            .iter()
            .map(|payment| -> Result<PaymentLine, AmountError> {
                Ok(PaymentLine {
                    id: payment.id.clone(),
                    amount: money(payment.amount)?,
                    created_at: payment
                        .created_at
                        .map(|at| at.strftime(PAYMENT_TIME_FORMAT).to_string()),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let shipping_methods = order
            .shipping_methods
            .iter()
            .map(|method| ShippingMethodLine {
                name: method
                    .shipping_option
                    .as_ref()
                    .map(|option| option.name.trim())
                    .filter(|name| !name.is_empty())
                    .unwrap_or("-")
                    .to_string(),
                data: provider_data(&method.data),
            })
            .collect();

        let shipping = order.shipping_address.clone().unwrap_or_default();

        Ok(Self {
            currency: order.currency_code.to_ascii_uppercase(),
            items,
            totals,
            payment_providers,
            payments,
            total_paid: SummaryLine::new("Total Paid", money(order.total)?),
            shipping_methods,
            contact: Contact {
                email: order.email.clone(),
                phone: shipping
                    .phone
                    .as_deref()
                    .map(str::trim)
                    .filter(|phone| !phone.is_empty())
                    .map(str::to_string),
            },
            customer_name: join_present(&[&shipping.first_name, &shipping.last_name], " "),
            customer_location: join_present(&[&shipping.city, &shipping.country_code], ", "),
            shipping_address: address_lines(&shipping),
            billing_address: order.billing_address.as_ref().map_or_else(
                || SmallVec::from_iter([NO_BILLING_ADDRESS.to_string()]),
                address_lines,
            ),
        })
    }
}

/// The two display lines of an address.
pub fn address_lines(address: &Address) -> SmallVec<[String; 2]> {
    let street = join_present(&[&address.address_1, &address.address_2], " ");

    let country = address.country_code.as_deref().map(str::to_ascii_uppercase);
    let region = join_present(&[&address.province, &address.postal_code, &country], " ");
    let locality = join_present(&[&address.city, &Some(region)], ", ");

    SmallVec::from_iter([street, locality])
}

/// Upper-case the first character and lower-case the rest (`"stripe"` → `"Stripe"`).
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();

    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn provider_data(data: &Value) -> Option<String> {
    match data {
        Value::Null => None,
        Value::Object(map) if map.is_empty() => None,
        data => Some(data.to_string()),
    }
}

fn join_present(parts: &[&Option<String>], separator: &str) -> String {
    parts
        .iter()
        .filter_map(|part| part.as_deref())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn order() -> Result<Order, serde_json::Error> {
        serde_json::from_value(json!({
            "id": "order_01",
            "status": "completed",
            "payment_status": "captured",
            "fulfillment_status": "shipped",
            "email": "jo@example.com",
            "currency_code": "usd",
            "subtotal": 4000,
            "discount_total": 400,
            "shipping_total": 500,
            "tax_total": 0,
            "total": 4100,
            "items": [
                { "title": "Hoodie", "unit_price": 2000, "quantity": 2, "variant": { "sku": "HOOD-M" } },
                { "title": "Sticker", "unit_price": 0, "quantity": 1 }
            ],
            "discounts": [{ "code": "SUMMER10" }],
            "payments": [
                { "id": "pay_1", "provider_id": "stripe", "amount": 4000, "created_at": "2024-02-01T15:04:00Z" },
                { "id": "pay_2", "provider_id": "PAYPAL", "amount": 100 }
            ],
            "shipping_methods": [
                { "shipping_option": { "name": "Express" }, "data": { "carrier": "dhl" } },
                { "data": {} }
            ],
            "shipping_address": {
                "first_name": "Jo",
                "last_name": "Bloggs",
                "address_1": "1 High Street",
                "address_2": "Flat 2",
                "city": "Leeds",
                "postal_code": "LS1 1AA",
                "country_code": "gb",
                "phone": " +44 113 496 0000 "
            }
        }))
    }

    #[test]
    fn items_and_totals_use_order_currency() -> TestResult {
        let summary = OrderSummary::new(&order()?)?;

        assert_eq!(summary.currency, "USD");

        let hoodie = summary.items.first().ok_or("missing item")?;

        assert_eq!(hoodie.sku.as_deref(), Some("HOOD-M"));
        assert_eq!(hoodie.unit_price, "$20.00");
        assert_eq!(hoodie.total, "$40.00");

        let rows: Vec<(&str, &str)> = summary
            .totals
            .iter()
            .map(|line| (line.label.as_str(), line.amount.as_str()))
            .collect();

        assert_eq!(
            rows,
            vec![
                ("Subtotal", "$40.00"),
                ("Discount: SUMMER10", "-$4.00"),
                ("Shipping", "$5.00"),
                ("Tax", "$0.00"),
                ("Total", "$41.00"),
            ]
        );

        Ok(())
    }

    #[test]
    fn amounts_include_tax_when_rate_is_present() -> TestResult {
        let mut order = order()?;
        order.tax_rate = Some(rust_decimal::Decimal::from(25));

        let summary = OrderSummary::new(&order)?;

        assert_eq!(
            summary.totals.first().map(|line| line.amount.as_str()),
            Some("$50.00")
        );

        Ok(())
    }

    #[test]
    fn customer_and_addresses() -> TestResult {
        let summary = OrderSummary::new(&order()?)?;

        assert_eq!(summary.payment_providers, "Stripe, Paypal");
        assert_eq!(summary.customer_name, "Jo Bloggs");
        assert_eq!(summary.customer_location, "Leeds, gb");
        assert_eq!(
            summary.shipping_address.as_slice(),
            &["1 High Street Flat 2", "Leeds, LS1 1AA GB"]
        );
        assert_eq!(summary.billing_address.as_slice(), &[NO_BILLING_ADDRESS]);

        Ok(())
    }

    #[test]
    fn payments_and_total_paid() -> TestResult {
        let summary = OrderSummary::new(&order()?)?;

        assert_eq!(
            summary.payments,
            vec![
                PaymentLine {
                    id: "pay_1".to_string(),
                    amount: "$40.00".to_string(),
                    created_at: Some("01 Feb 2024 03:04".to_string()),
                },
                PaymentLine {
                    id: "pay_2".to_string(),
                    amount: "$1.00".to_string(),
                    created_at: None,
                },
            ]
        );
        assert_eq!(summary.total_paid, SummaryLine::new("Total Paid", "$41.00".to_string()));

        Ok(())
    }

    #[test]
    fn shipping_methods_and_contact() -> TestResult {
        let summary = OrderSummary::new(&order()?)?;

        assert_eq!(
            summary.shipping_methods,
            vec![
                ShippingMethodLine {
                    name: "Express".to_string(),
                    data: Some(r#"{"carrier":"dhl"}"#.to_string()),
                },
                ShippingMethodLine {
                    name: "-".to_string(),
                    data: None,
                },
            ]
        );
        assert_eq!(
            summary.contact,
            Contact {
                email: "jo@example.com".to_string(),
                phone: Some("+44 113 496 0000".to_string()),
            }
        );

        Ok(())
    }

    #[test]
    fn unknown_currency_is_an_error() -> TestResult {
        let mut order = order()?;
        order.currency_code = "zzz".to_string();

        assert_eq!(
            OrderSummary::new(&order),
            Err(AmountError::UnknownCurrency("zzz".to_string()))
        );

        Ok(())
    }

    #[test]
    fn capitalize_handles_empty_and_mixed_case() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("manual"), "Manual");
        assert_eq!(capitalize("sTRIPE"), "Stripe");
    }
}
