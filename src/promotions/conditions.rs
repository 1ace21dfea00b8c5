//! Discount Conditions

use serde::Deserialize;

/// Product type referenced by a condition
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductType {
    /// Type name
    pub value: String,
}

/// Product referenced by a condition
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConditionProduct {
    /// Product title
    pub title: String,
}

/// Collection referenced by a condition
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductCollection {
    /// Collection title
    pub title: String,
}

/// Tag referenced by a condition
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductTag {
    /// Tag value
    pub value: String,
}

/// Customer group referenced by a condition
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CustomerGroup {
    /// Group name
    pub name: String,
}

/// A condition restricting which products or customers a rule applies to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiscountCondition {
    /// Restrict to product types
    ProductTypes {
        /// Matching product types
        #[serde(default)]
        product_types: Vec<ProductType>,
    },

    /// Restrict to specific products
    Products {
        /// Matching products
        #[serde(default)]
        products: Vec<ConditionProduct>,
    },

    /// Restrict to collections
    ProductCollections {
        /// Matching collections
        #[serde(default)]
        product_collections: Vec<ProductCollection>,
    },

    /// Restrict to product tags
    ProductTags {
        /// Matching tags
        #[serde(default)]
        product_tags: Vec<ProductTag>,
    },

    /// Restrict to customer groups
    CustomerGroups {
        /// Matching groups
        #[serde(default)]
        customer_groups: Vec<CustomerGroup>,
    },

    /// Condition kind this dashboard does not know about
    #[serde(other)]
    Unknown,
}

impl DiscountCondition {
    /// Number of entries the condition lists (`0` for unknown kinds).
    pub fn len(&self) -> usize {
        match self {
            Self::ProductTypes { product_types } => product_types.len(),
            Self::Products { products } => products.len(),
            Self::ProductCollections {
                product_collections,
            } => product_collections.len(),
            Self::ProductTags { product_tags } => product_tags.len(),
            Self::CustomerGroups { customer_groups } => customer_groups.len(),
            Self::Unknown => 0,
        }
    }

    /// Whether the condition lists no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Descriptive text of the first entry, if there is one.
    pub fn headline(&self) -> Option<&str> {
        match self {
            Self::ProductTypes { product_types } => {
                product_types.first().map(|t| t.value.as_str())
            }
            Self::Products { products } => products.first().map(|p| p.title.as_str()),
            Self::ProductCollections {
                product_collections,
            } => product_collections.first().map(|c| c.title.as_str()),
            Self::ProductTags { product_tags } => product_tags.first().map(|t| t.value.as_str()),
            Self::CustomerGroups { customer_groups } => {
                customer_groups.first().map(|g| g.name.as_str())
            }
            Self::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn condition_kinds_deserialize_by_type_tag() -> TestResult {
        let conditions: Vec<DiscountCondition> = serde_json::from_value(json!([
            { "type": "product_types", "operator": "in", "product_types": [{ "value": "Shirts" }] },
            { "type": "products", "products": [{ "title": "Hoodie" }, { "title": "Cap" }] },
            { "type": "product_collections", "product_collections": [{ "title": "Summer" }] },
            { "type": "product_tags", "product_tags": [{ "value": "sale" }] },
            { "type": "customer_groups", "customer_groups": [{ "name": "VIP" }] },
            { "type": "shipping_zones", "zones": [] }
        ]))?;

        let headlines: Vec<Option<&str>> =
            conditions.iter().map(DiscountCondition::headline).collect();

        assert_eq!(
            headlines,
            vec![
                Some("Shirts"),
                Some("Hoodie"),
                Some("Summer"),
                Some("sale"),
                Some("VIP"),
                None
            ]
        );

        let lens: Vec<usize> = conditions.iter().map(DiscountCondition::len).collect();

        assert_eq!(lens, vec![1, 2, 1, 1, 1, 0]);

        Ok(())
    }

    #[test]
    fn empty_condition_has_no_headline() {
        let condition = DiscountCondition::Products {
            products: Vec::new(),
        };

        assert!(condition.is_empty());
        assert_eq!(condition.headline(), None);
    }
}
