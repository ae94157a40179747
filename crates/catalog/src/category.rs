use serde::{Deserialize, Serialize};

use storefront_core::DomainError;

/// The closed set of catalog categories, declared in display order.
///
/// The derived `Ord` follows declaration order, which is also the order the
/// category stage concatenates its per-category results in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Art,
    Collectibles,
    Wearable,
    Equipment,
    Entities,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Art,
        Category::Collectibles,
        Category::Wearable,
        Category::Equipment,
        Category::Entities,
    ];

    /// Display name, identical to the upstream `categoryName` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Art => "Art",
            Category::Collectibles => "Collectibles",
            Category::Wearable => "Wearable",
            Category::Equipment => "Equipment",
            Category::Entities => "Entities",
        }
    }

    /// Exact, case-sensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| DomainError::validation(format!("unknown category: {s}")))
    }
}

/// One entry of the upstream category list; only drives which checkboxes exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListing {
    pub category_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CategoryListing {
    pub fn new(category_name: impl Into<String>) -> Self {
        Self {
            category_name: category_name.into(),
            description: None,
        }
    }

    /// The known category this listing refers to, if any.
    pub fn category(&self) -> Option<Category> {
        Category::from_name(&self.category_name)
    }
}
