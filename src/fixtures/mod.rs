//! Fixtures
//!
//! API payloads stored as YAML files, laid out as
//! `{base}/promotions/{name}.yml` and `{base}/orders/{name}.yml`.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{orders::Order, promotions::Promotion};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Order not found
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Two fixture files define the same order key
    #[error("Duplicate order key: {0}")]
    DuplicateOrder(String),
}

#[derive(Debug, Deserialize)]
struct PromotionsFixture {
    #[serde(default)]
    promotions: Vec<Promotion>,
}

#[derive(Debug, Deserialize)]
struct OrdersFixture {
    #[serde(default)]
    orders: FxHashMap<String, Order>,
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Promotions in file order
    promotions: Vec<Promotion>,

    /// Orders by fixture key
    orders: FxHashMap<String, Order>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            promotions: Vec::new(),
            orders: FxHashMap::default(),
        }
    }

    /// Load promotions from a YAML fixture file, appending to those already loaded
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_promotions(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self
            .base_path
            .join("promotions")
            .join(format!("{name}.yml"));

        let contents = fs::read_to_string(&file_path)?;
        let fixture: PromotionsFixture = serde_norway::from_str(&contents)?;

        debug!(
            path = %file_path.display(),
            promotion_count = fixture.promotions.len(),
            "loaded promotions"
        );

        self.promotions.extend(fixture.promotions);

        Ok(self)
    }

    /// Load orders from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if an order
    /// key is already loaded.
    pub fn load_orders(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("orders").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: OrdersFixture = serde_norway::from_str(&contents)?;

        debug!(
            path = %file_path.display(),
            order_count = fixture.orders.len(),
            "loaded orders"
        );

        for (key, order) in fixture.orders {
            if self.orders.contains_key(&key) {
                return Err(FixtureError::DuplicateOrder(key));
            }

            self.orders.insert(key, order);
        }

        Ok(self)
    }

    /// Get all promotions
    pub fn promotions(&self) -> &[Promotion] {
        &self.promotions
    }

    /// Get an order by its fixture key
    ///
    /// # Errors
    ///
    /// Returns an error if the order is not found.
    pub fn order(&self, key: &str) -> Result<&Order, FixtureError> {
        self.orders
            .get(key)
            .ok_or_else(|| FixtureError::OrderNotFound(key.to_string()))
    }

    /// Fixture keys of all loaded orders, sorted
    pub fn order_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.orders.keys().map(String::as_str).collect();

        keys.sort_unstable();

        keys
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
