use serde::{Deserialize, Serialize};

use storefront_core::{Entity, ProductId};

use crate::category::Category;

/// Merchandising status used by landing pages to link into a narrowed listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrendingStatus {
    Trending,
    TopSelling,
}

impl TrendingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TrendingStatus::Trending => "trending",
            TrendingStatus::TopSelling => "top-selling",
        }
    }

    /// Lenient lookup; unknown labels are not an error, they just match nothing.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "trending" => Some(TrendingStatus::Trending),
            "top-selling" | "top_selling" | "topselling" | "top" => Some(TrendingStatus::TopSelling),
            _ => None,
        }
    }
}

/// A catalog entry as loaded for one browsing session.
///
/// `price` and `rating` are optional because upstream payloads are not
/// validated; a missing value excludes the product from ceiling and threshold
/// comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub creator: String,
    /// Price in rupees; non-negative and finite when present.
    pub price: Option<f64>,
    /// Upstream category name; usually one of [`Category`], never validated.
    pub category_name: String,
    /// Average rating, 0 to 5.
    pub rating: Option<f64>,
    pub ratings_count: u64,
    pub trending_status: Option<TrendingStatus>,
    pub img: String,
    pub top_bid: Option<u64>,
    pub min_bid: Option<u64>,
    pub rank: Option<u32>,
}

impl Product {
    /// The known category of this product, if its name is one.
    pub fn category(&self) -> Option<Category> {
        Category::from_name(&self.category_name)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::product;
    use super::*;

    #[test]
    fn category_resolves_known_names_only() {
        assert_eq!(product(1, 100, "Art", 4.0).category(), Some(Category::Art));
        assert_eq!(product(2, 100, "Music", 4.0).category(), None);
    }

    #[test]
    fn trending_labels_are_lenient() {
        assert_eq!(TrendingStatus::from_label(" Trending "), Some(TrendingStatus::Trending));
        assert_eq!(TrendingStatus::from_label("top_selling"), Some(TrendingStatus::TopSelling));
        assert_eq!(TrendingStatus::from_label("new"), None);
        assert_eq!(TrendingStatus::TopSelling.as_str(), "top-selling");
    }

    #[test]
    fn entity_id_is_product_id() {
        let p = product(9, 100, "Art", 4.0);
        assert_eq!(Entity::id(&p), &ProductId::from_u128(9));
    }
}
