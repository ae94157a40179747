//! Upstream collaborators (product/category sources, cart) and the JSON
//! payload adapter.
//!
//! Payloads follow the storefront mock API: `{"products": [...]}` and
//! `{"categories": [...]}` with camelCase fields. Fields are not validated;
//! numbers may arrive as JSON numbers or numeric strings, and anything that
//! does not parse is treated as missing.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use storefront_core::{DomainError, ProductId};

use crate::category::CategoryListing;
use crate::product::{Product, TrendingStatus};

/// Supplies the canonical product list for a session.
pub trait ProductSource {
    fn fetch_products(&self) -> anyhow::Result<Vec<Product>>;
}

/// Supplies the category list used to render filter checkboxes.
pub trait CategorySource {
    fn fetch_categories(&self) -> anyhow::Result<Vec<CategoryListing>>;
}

/// "Add to cart" action exposed per card. Persistence is the hook's business.
pub trait CartHook {
    fn add_to_cart(&self, product: &Product);
}

#[derive(Debug, Error)]
pub enum CatalogSourceError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog payload: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    #[serde(rename = "_id", default)]
    id: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    creator: String,
    #[serde(default)]
    price: Option<JsonValue>,
    #[serde(default)]
    category_name: String,
    #[serde(default)]
    ratings: Option<JsonValue>,
    #[serde(default)]
    ratings_count: Option<JsonValue>,
    #[serde(default)]
    img: String,
    #[serde(default)]
    top_bid: Option<JsonValue>,
    #[serde(default)]
    min_bid: Option<JsonValue>,
    #[serde(default)]
    rank: Option<JsonValue>,
    #[serde(default)]
    status: Option<String>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let id: ProductId = record
            .id
            .as_deref()
            .ok_or_else(|| DomainError::invalid_id("ProductId: missing _id"))?
            .parse()?;

        Ok(Product {
            id,
            title: record.title,
            creator: record.creator,
            price: record.price.as_ref().and_then(lenient_price),
            category_name: record.category_name,
            rating: record
                .ratings
                .as_ref()
                .and_then(lenient_f64)
                .filter(|r| (0.0..=5.0).contains(r)),
            ratings_count: record.ratings_count.as_ref().and_then(lenient_u64).unwrap_or(0),
            trending_status: record.status.as_deref().and_then(|label| trending_status(id, label)),
            img: record.img,
            top_bid: record.top_bid.as_ref().and_then(lenient_u64),
            min_bid: record.min_bid.as_ref().and_then(lenient_u64),
            rank: record
                .rank
                .as_ref()
                .and_then(lenient_u64)
                .and_then(|r| u32::try_from(r).ok()),
        })
    }
}

fn lenient_f64(value: &JsonValue) -> Option<f64> {
    let n = match value {
        JsonValue::Number(n) => n.as_f64()?,
        JsonValue::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn lenient_price(value: &JsonValue) -> Option<f64> {
    lenient_f64(value).filter(|n| *n >= 0.0)
}

fn trending_status(id: ProductId, label: &str) -> Option<TrendingStatus> {
    let status = TrendingStatus::from_label(label);
    if status.is_none() && !label.trim().is_empty() {
        tracing::warn!(product_id = %id, status = label, "unknown trending status; product matches no status filter");
    }
    status
}

fn lenient_u64(value: &JsonValue) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    let n = lenient_f64(value)?;
    (n >= 0.0 && n.fract() == 0.0 && n <= u64::MAX as f64).then_some(n as u64)
}

#[derive(Debug, Default, Deserialize)]
struct CatalogPayload {
    #[serde(default)]
    products: Vec<ProductRecord>,
    #[serde(default)]
    categories: Vec<CategoryListing>,
}

/// Products and categories decoded from one JSON document.
///
/// Records without a usable `_id`, or repeating an `_id` already seen, are
/// skipped with a warning, so a partly broken payload still yields a partial
/// catalog. The first record for an id wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonCatalog {
    products: Vec<Product>,
    categories: Vec<CategoryListing>,
}

impl JsonCatalog {
    pub fn from_json(payload: &str) -> Result<Self, CatalogSourceError> {
        let raw: CatalogPayload = serde_json::from_str(payload)?;

        let mut products = Vec::with_capacity(raw.products.len());
        let mut seen = HashSet::with_capacity(raw.products.len());
        for (index, record) in raw.products.into_iter().enumerate() {
            match Product::try_from(record) {
                Ok(product) if seen.insert(product.id) => products.push(product),
                Ok(product) => {
                    tracing::warn!(index, product_id = %product.id, "skipping duplicate product record")
                }
                Err(err) => tracing::warn!(index, error = %err, "skipping product record"),
            }
        }

        Ok(Self {
            products,
            categories: raw.categories,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogSourceError> {
        let path = path.as_ref();
        let payload = std::fs::read_to_string(path).map_err(|source| CatalogSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&payload)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[CategoryListing] {
        &self.categories
    }
}

impl ProductSource for JsonCatalog {
    fn fetch_products(&self) -> anyhow::Result<Vec<Product>> {
        Ok(self.products.clone())
    }
}

impl CategorySource for JsonCatalog {
    fn fetch_categories(&self) -> anyhow::Result<Vec<CategoryListing>> {
        Ok(self.categories.clone())
    }
}
