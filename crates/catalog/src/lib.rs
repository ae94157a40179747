//! Storefront catalog: product listing filters and the Products view session.
//!
//! Everything here is deterministic domain logic. Upstream data retrieval,
//! rendering and cart persistence are modelled as traits in [`source`].

pub mod card;
pub mod category;
pub mod filter;
pub mod pipeline;
pub mod product;
pub mod session;
pub mod settings;
pub mod source;
pub mod state;

pub use card::{ImageFit, ProductCard};
pub use category::{Category, CategoryListing};
pub use pipeline::derive_list;
pub use product::{Product, TrendingStatus};
pub use session::{DerivedListChanged, ProductsView};
pub use settings::{
    CategorySelection, FilterSettings, PRICE_MAX, PRICE_MIN, PRICE_STEP, PriceCeiling, PriceSort,
    RatingThreshold,
};
pub use source::{CartHook, CatalogSourceError, CategorySource, JsonCatalog, ProductSource};
pub use state::{FilterCommand, FilterEvent, FilterState};
