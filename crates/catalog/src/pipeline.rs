//! The filter orchestrator: settings in, derived list out.

use crate::filter::{filter_category, filter_price_range, filter_ratings, sort_price};
use crate::product::Product;
use crate::settings::{CategorySelection, FilterSettings};

/// Derive the displayed list from the canonical list.
///
/// Stages run in a fixed order: price ceiling, category, minimum rating, sort.
/// The result depends only on the two arguments.
pub fn derive_list(canonical: &[Product], settings: &FilterSettings) -> Vec<Product> {
    let priced = filter_price_range(settings.price_range.value(), canonical);
    let categorised = filter_all_categories(&settings.category, &priced);
    let rated = filter_ratings(settings.rating, &categorised);
    sort_price(settings.sort, &rated)
}

/// Category stage.
///
/// With no flag enabled the list passes through unchanged. Otherwise each
/// enabled category is filtered independently and the results are concatenated
/// in fixed category order.
pub fn filter_all_categories(selection: &CategorySelection, list: &[Product]) -> Vec<Product> {
    if selection.none_enabled() {
        return list.to_vec();
    }
    selection
        .enabled()
        .flat_map(|category| filter_category(category.as_str(), list))
        .collect()
}
