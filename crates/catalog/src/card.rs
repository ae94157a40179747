//! Product card view model: what one listing tile shows.

use serde::Serialize;

use storefront_core::ProductId;

use crate::category::Category;
use crate::product::Product;

/// How the card image is fitted into its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFit {
    Cover,
    Contain,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub title: String,
    pub creator: String,
    /// `None` when the product has no price.
    pub price_label: Option<String>,
    pub category_name: String,
    /// Five star slots; `true` is a filled star.
    pub stars: [bool; 5],
    pub ratings_count_label: String,
    pub img: String,
    pub image_fit: ImageFit,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        let rating = product.rating.unwrap_or(0.0);
        let stars = core::array::from_fn(|i| (i + 1) as f64 <= rating);
        // Collectible artwork is full-bleed; everything else is letterboxed.
        let image_fit = if product.category() == Some(Category::Collectibles) {
            ImageFit::Cover
        } else {
            ImageFit::Contain
        };

        Self {
            id: product.id,
            title: product.title.clone(),
            creator: product.creator.clone(),
            price_label: product.price.map(|price| format!("₹{price}")),
            category_name: product.category_name.clone(),
            stars,
            ratings_count_label: format!("| ({})", product.ratings_count),
            img: product.img.clone(),
            image_fit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::fixtures::product;

    #[test]
    fn fractional_ratings_round_down_to_filled_stars() {
        let card = ProductCard::from(&product(1, 1200, "Art", 3.5));
        assert_eq!(card.stars, [true, true, true, false, false]);
        assert_eq!(card.price_label.as_deref(), Some("₹1200"));
        assert_eq!(card.ratings_count_label, "| (10)");
        assert_eq!(card.image_fit, ImageFit::Contain);
    }

    #[test]
    fn collectibles_use_cover_fit() {
        let card = ProductCard::from(&product(2, 100, "Collectibles", 5.0));
        assert_eq!(card.image_fit, ImageFit::Cover);
        assert_eq!(card.stars, [true; 5]);
    }

    #[test]
    fn fractional_price_keeps_its_decimals() {
        let mut p = product(4, 0, "Art", 4.0);
        p.price = Some(1499.5);
        assert_eq!(ProductCard::from(&p).price_label.as_deref(), Some("₹1499.5"));
    }

    #[test]
    fn missing_fields_render_empty() {
        let mut p = product(3, 100, "Art", 4.0);
        p.price = None;
        p.rating = None;
        let card = ProductCard::from(&p);
        assert_eq!(card.price_label, None);
        assert_eq!(card.stars, [false; 5]);
    }
}
