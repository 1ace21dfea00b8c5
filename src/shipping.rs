//! Shipping Options
//!
//! Building the create-shipping-option request for a region from the admin
//! form. Fulfillment providers expose a list of options; the form refers to a
//! chosen option by `"{provider_index}.{option_index}"`, where the option
//! index counts only options of the requested direction (outbound or return).

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

/// Errors raised while building a shipping option payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShippingOptionError {
    /// The option name is empty.
    #[error("shipping option name is required")]
    MissingName,

    /// An outbound option has no shipping profile.
    #[error("shipping profile is required for outbound options")]
    MissingProfile,

    /// The fulfillment choice is not of the form `"{provider}.{option}"`.
    #[error("malformed fulfillment choice: {0:?}")]
    MalformedChoice(String),

    /// The fulfillment choice does not refer to a known provider option.
    #[error("unknown fulfillment choice: {0}")]
    UnknownChoice(ChoiceKey),
}

/// An option offered by a fulfillment provider
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FulfillmentOption {
    /// Option id
    pub id: String,

    /// Whether the option handles returns, as sent by the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_return: Option<bool>,

    /// Provider-specific fields, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A fulfillment provider and its options
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FulfillmentProvider {
    /// Provider id
    pub provider_id: String,

    /// Options offered by the provider
    #[serde(default)]
    pub options: Vec<FulfillmentOption>,
}

impl FulfillmentProvider {
    fn options_for(&self, is_return: bool) -> impl Iterator<Item = &FulfillmentOption> {
        self.options
            .iter()
            .filter(move |option| option.is_return.unwrap_or_default() == is_return)
    }
}

/// Position of a chosen option: provider index and index within the
/// provider's filtered options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChoiceKey {
    /// Index of the provider
    pub provider: usize,

    /// Index of the option among the provider's options of the same direction
    pub option: usize,
}

impl fmt::Display for ChoiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.provider, self.option)
    }
}

impl FromStr for ChoiceKey {
    type Err = ShippingOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ShippingOptionError::MalformedChoice(s.to_string());

        let (provider, option) = s.trim().split_once('.').ok_or_else(malformed)?;

        Ok(Self {
            provider: provider.parse().map_err(|_err| malformed())?,
            option: option.parse().map_err(|_err| malformed())?,
        })
    }
}

/// Entry of the fulfillment method select box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FulfillmentChoice {
    /// `"{option_id} via {provider_id}"`
    pub label: String,

    /// `"{provider_index}.{option_index}"`
    pub value: String,
}

/// List the selectable fulfillment options of the requested direction.
pub fn fulfillment_choices(
    providers: &[FulfillmentProvider],
    is_return: bool,
) -> Vec<FulfillmentChoice> {
    providers
        .iter()
        .enumerate()
        .flat_map(|(p, provider)| {
            provider
                .options_for(is_return)
                .enumerate()
                .map(move |(o, option)| FulfillmentChoice {
                    label: format!("{} via {}", option.id, provider.provider_id),
                    value: ChoiceKey {
                        provider: p,
                        option: o,
                    }
                    .to_string(),
                })
        })
        .collect()
}

/// Region the shipping option is created in
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShippingRegion {
    /// Region id
    pub id: String,

    /// Lower-case ISO-4217 currency code
    #[serde(default)]
    pub currency_code: String,
}

/// Raw values submitted by the shipping option form
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShippingOptionForm {
    /// Option name
    pub name: String,

    /// Shipping profile, required for outbound options
    #[serde(default)]
    pub profile_id: Option<String>,

    /// Selected fulfillment choice value
    pub fulfillment_option: String,

    /// Flat rate price in minor units
    #[serde(default)]
    pub price_amount: u64,

    /// Minimum subtotal input, as typed
    #[serde(default)]
    pub min_subtotal: Option<String>,

    /// Maximum subtotal input, as typed
    #[serde(default)]
    pub max_subtotal: Option<String>,
}

/// Kind of subtotal requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementType {
    /// Cart subtotal must be at least the value
    MinSubtotal,

    /// Cart subtotal must be at most the value
    MaxSubtotal,
}

/// Subtotal requirement of a shipping option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShippingRequirement {
    /// Requirement kind
    #[serde(rename = "type")]
    pub requirement_type: RequirementType,

    /// Threshold in minor units
    pub value: u64,
}

/// Price of a shipping option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShippingPrice {
    /// Fixed amount in minor units
    FlatRate {
        /// Amount in minor units
        amount: u64,
    },
}

/// Request body creating a shipping option
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewShippingOption {
    /// Option name
    pub name: String,

    /// The chosen provider option
    pub data: FulfillmentOption,

    /// Region id
    pub region_id: String,

    /// Shipping profile id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,

    /// Subtotal requirements
    pub requirements: Vec<ShippingRequirement>,

    /// Price
    pub price: ShippingPrice,

    /// Whether the option handles returns
    pub is_return: bool,

    /// Provider id
    pub provider_id: String,
}

/// Build the create request for the option chosen in `form`.
///
/// Requirements are kept only when their input parses to a positive integer.
/// Return options carry neither a profile nor requirements.
///
/// # Errors
///
/// - [`ShippingOptionError::MissingName`]: the name is blank.
/// - [`ShippingOptionError::MissingProfile`]: an outbound option has no profile.
/// - [`ShippingOptionError::MalformedChoice`]: the choice value cannot be parsed.
/// - [`ShippingOptionError::UnknownChoice`]: the choice refers to no provider option.
pub fn build_payload(
    form: &ShippingOptionForm,
    providers: &[FulfillmentProvider],
    region: &ShippingRegion,
    is_return: bool,
) -> Result<NewShippingOption, ShippingOptionError> {
    let name = form.name.trim();

    if name.is_empty() {
        return Err(ShippingOptionError::MissingName);
    }

    let profile_id = form
        .profile_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string);

    if !is_return && profile_id.is_none() {
        return Err(ShippingOptionError::MissingProfile);
    }

    let key: ChoiceKey = form.fulfillment_option.parse()?;

    let provider = providers
        .get(key.provider)
        .ok_or(ShippingOptionError::UnknownChoice(key))?;

    let option = provider
        .options_for(is_return)
        .nth(key.option)
        .ok_or(ShippingOptionError::UnknownChoice(key))?;

    let requirements = if is_return {
        Vec::new()
    } else {
        [
            (RequirementType::MinSubtotal, &form.min_subtotal),
            (RequirementType::MaxSubtotal, &form.max_subtotal),
        ]
        .into_iter()
        .filter_map(|(requirement_type, input)| {
            positive_amount(input.as_deref()?).map(|value| ShippingRequirement {
                requirement_type,
                value,
            })
        })
        .collect()
    };

    debug!(
        provider_id = %provider.provider_id,
        option_id = %option.id,
        is_return,
        requirement_count = requirements.len(),
        "built shipping option payload"
    );

    Ok(NewShippingOption {
        name: name.to_string(),
        data: option.clone(),
        region_id: region.id.clone(),
        profile_id: if is_return { None } else { profile_id },
        requirements,
        price: ShippingPrice::FlatRate {
            amount: form.price_amount,
        },
        is_return,
        provider_id: provider.provider_id.clone(),
    })
}

fn positive_amount(input: &str) -> Option<u64> {
    input.trim().parse::<u64>().ok().filter(|value| *value > 0)
}
