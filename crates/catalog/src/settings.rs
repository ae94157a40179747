//! Filter settings: the user-adjustable controls of the Products page.

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, ValueObject};

use crate::category::Category;

/// Lowest selectable price ceiling.
pub const PRICE_MIN: u64 = 0;
/// Highest selectable price ceiling; selecting it means "no restriction".
pub const PRICE_MAX: u64 = 4000;
/// Slider granularity.
pub const PRICE_STEP: u64 = 100;

/// Price slider position, always within `PRICE_MIN..=PRICE_MAX` and on a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct PriceCeiling(u64);

impl PriceCeiling {
    pub fn new(value: u64) -> DomainResult<Self> {
        if value > PRICE_MAX {
            return Err(DomainError::validation(format!(
                "price ceiling {value} exceeds maximum {PRICE_MAX}"
            )));
        }
        let offset = value.checked_sub(PRICE_MIN).ok_or_else(|| {
            DomainError::validation(format!("price ceiling {value} is below minimum {PRICE_MIN}"))
        })?;
        if offset % PRICE_STEP != 0 {
            return Err(DomainError::validation(format!(
                "price ceiling {value} is not a multiple of {PRICE_STEP}"
            )));
        }
        Ok(Self(value))
    }

    pub fn max() -> Self {
        Self(PRICE_MAX)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn is_unrestricted(self) -> bool {
        self.0 >= PRICE_MAX
    }

    /// Filled share of the slider track, in percent.
    pub fn fill_percent(self) -> f64 {
        (self.0 - PRICE_MIN) as f64 * 100.0 / (PRICE_MAX - PRICE_MIN) as f64
    }
}

impl Default for PriceCeiling {
    fn default() -> Self {
        Self::max()
    }
}

impl TryFrom<u64> for PriceCeiling {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PriceCeiling> for u64 {
    fn from(value: PriceCeiling) -> Self {
        value.0
    }
}

impl ValueObject for PriceCeiling {}

/// Minimum-rating radio selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RatingThreshold {
    FourAndAbove,
    ThreeAndAbove,
    TwoAndAbove,
    #[default]
    OneAndAbove,
}

impl RatingThreshold {
    /// Radio buttons in menu order.
    pub const MENU: [RatingThreshold; 4] = [
        RatingThreshold::FourAndAbove,
        RatingThreshold::ThreeAndAbove,
        RatingThreshold::TwoAndAbove,
        RatingThreshold::OneAndAbove,
    ];

    pub fn min_rating(self) -> f64 {
        match self {
            RatingThreshold::FourAndAbove => 4.0,
            RatingThreshold::ThreeAndAbove => 3.0,
            RatingThreshold::TwoAndAbove => 2.0,
            RatingThreshold::OneAndAbove => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RatingThreshold::FourAndAbove => "4 Stars & above",
            RatingThreshold::ThreeAndAbove => "3 Stars & above",
            RatingThreshold::TwoAndAbove => "2 Stars & above",
            RatingThreshold::OneAndAbove => "1 Star & above",
        }
    }

    /// Maps a menu label to its threshold. Anything unrecognised is the lowest
    /// threshold, never an error.
    pub fn from_label(label: &str) -> Self {
        Self::MENU
            .into_iter()
            .find(|t| t.label() == label)
            .unwrap_or_default()
    }
}

impl ValueObject for RatingThreshold {}

/// Price sort radio selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PriceSort {
    #[default]
    Unset,
    LowToHigh,
    HighToLow,
}

impl PriceSort {
    /// Radio labels in menu order.
    pub const MENU: [&'static str; 2] = ["Price - Low to High", "Price - High to Low"];

    /// The first menu entry sorts ascending, every other index descending.
    pub fn from_menu_index(index: usize) -> Self {
        if index == 0 {
            PriceSort::LowToHigh
        } else {
            PriceSort::HighToLow
        }
    }
}

impl ValueObject for PriceSort {}

/// One independent checkbox flag per known category.
///
/// All flags off means "no restriction", the same as all flags on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CategorySelection {
    pub art: bool,
    pub collectibles: bool,
    pub wearable: bool,
    pub equipment: bool,
    pub entities: bool,
}

impl CategorySelection {
    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Art => self.art,
            Category::Collectibles => self.collectibles,
            Category::Wearable => self.wearable,
            Category::Equipment => self.equipment,
            Category::Entities => self.entities,
        }
    }

    /// Copy with exactly one flag changed.
    pub fn with(mut self, category: Category, enabled: bool) -> Self {
        let flag = match category {
            Category::Art => &mut self.art,
            Category::Collectibles => &mut self.collectibles,
            Category::Wearable => &mut self.wearable,
            Category::Equipment => &mut self.equipment,
            Category::Entities => &mut self.entities,
        };
        *flag = enabled;
        self
    }

    /// Enabled categories in fixed category order.
    pub fn enabled(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| self.is_enabled(*c))
    }

    pub fn none_enabled(&self) -> bool {
        self.enabled().next().is_none()
    }
}

impl ValueObject for CategorySelection {}

/// Complete state of the filter sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSettings {
    pub price_range: PriceCeiling,
    pub category: CategorySelection,
    pub rating: RatingThreshold,
    pub sort: PriceSort,
}

impl FilterSettings {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl ValueObject for FilterSettings {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceiling_accepts_every_slider_position() {
        for step in 0..=(PRICE_MAX / PRICE_STEP) {
            assert!(PriceCeiling::new(step * PRICE_STEP).is_ok());
        }
    }

    #[test]
    fn ceiling_rejects_out_of_range_and_off_step() {
        assert!(matches!(PriceCeiling::new(4100), Err(DomainError::Validation(_))));
        assert!(matches!(PriceCeiling::new(150), Err(DomainError::Validation(_))));
    }

    #[test]
    fn ceiling_deserialization_is_validated() {
        assert_eq!(serde_json::from_str::<PriceCeiling>("1200").unwrap().value(), 1200);
        assert!(serde_json::from_str::<PriceCeiling>("1234").is_err());
    }

    #[test]
    fn fill_percent_tracks_slider() {
        assert_eq!(PriceCeiling::new(0).unwrap().fill_percent(), 0.0);
        assert_eq!(PriceCeiling::new(1000).unwrap().fill_percent(), 25.0);
        assert_eq!(PriceCeiling::max().fill_percent(), 100.0);
    }

    #[test]
    fn defaults_match_untouched_sidebar() {
        let settings = FilterSettings::default();
        assert_eq!(settings.price_range.value(), PRICE_MAX);
        assert!(settings.price_range.is_unrestricted());
        assert!(settings.category.none_enabled());
        assert_eq!(settings.rating, RatingThreshold::OneAndAbove);
        assert_eq!(settings.sort, PriceSort::Unset);
        assert!(settings.is_default());
    }

    #[test]
    fn unknown_rating_label_is_lowest_threshold() {
        assert_eq!(RatingThreshold::from_label("3 Stars & above"), RatingThreshold::ThreeAndAbove);
        assert_eq!(RatingThreshold::from_label("5 Stars"), RatingThreshold::OneAndAbove);
        assert_eq!(RatingThreshold::from_label(""), RatingThreshold::OneAndAbove);
    }

    #[test]
    fn sort_menu_index_mapping() {
        assert_eq!(PriceSort::from_menu_index(0), PriceSort::LowToHigh);
        assert_eq!(PriceSort::from_menu_index(1), PriceSort::HighToLow);
        assert_eq!(PriceSort::from_menu_index(7), PriceSort::HighToLow);
    }

    #[test]
    fn category_flags_are_independent() {
        let selection = CategorySelection::default()
            .with(Category::Wearable, true)
            .with(Category::Art, true)
            .with(Category::Wearable, false);
        assert!(selection.is_enabled(Category::Art));
        assert!(!selection.is_enabled(Category::Wearable));
        assert_eq!(selection.enabled().collect::<Vec<_>>(), vec![Category::Art]);
    }

    #[test]
    fn selection_serializes_with_display_names() {
        let json = serde_json::to_value(CategorySelection::default().with(Category::Art, true)).unwrap();
        assert_eq!(json["Art"], serde_json::json!(true));
        assert_eq!(json["Entities"], serde_json::json!(false));
    }
}
