//! Filter state: canonical list, current settings and the derived list.
//!
//! State changes go through [`FilterCommand`]s. `handle` validates a command
//! and turns it into [`FilterEvent`]s; `apply` folds an event into the state and
//! recomputes the derived list from the canonical list.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use storefront_core::{Aggregate, AggregateRoot, DomainError, ProductId, SessionId};
use storefront_events::Event;

use crate::category::Category;
use crate::pipeline::derive_list;
use crate::product::Product;
use crate::settings::{FilterSettings, PriceCeiling, PriceSort, RatingThreshold};

/// Aggregate root: the filter state of one Products view session.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    id: SessionId,
    products: Vec<Product>,
    settings: FilterSettings,
    product_data: Vec<Product>,
    version: u64,
}

impl FilterState {
    /// Empty state: no products, default settings.
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            products: Vec::new(),
            settings: FilterSettings::default(),
            product_data: Vec::new(),
            version: 0,
        }
    }

    /// The canonical (unfiltered) list.
    pub fn canonical(&self) -> &[Product] {
        &self.products
    }

    pub fn settings(&self) -> &FilterSettings {
        &self.settings
    }

    /// The list currently on display.
    pub fn derived(&self) -> &[Product] {
        &self.product_data
    }

    fn recompute(&mut self) {
        self.product_data = derive_list(&self.products, &self.settings);
        tracing::debug!(
            session_id = %self.id,
            canonical = self.products.len(),
            derived = self.product_data.len(),
            "recomputed derived list"
        );
    }
}

impl AggregateRoot for FilterState {
    type Id = SessionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterCommand {
    /// Replace the canonical list.
    SetProductData(Vec<Product>),
    /// Move the price slider.
    SetPriceRange(u64),
    /// Toggle one category checkbox.
    SetCategory { category: Category, enabled: bool },
    SetRating(RatingThreshold),
    SetSort(PriceSort),
    /// Overwrite only the derived list; the next settings change discards it.
    SeedDerived(Vec<Product>),
    /// Back to default settings with the canonical list on display.
    Clear,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterEvent {
    ProductDataSet { products: Vec<Product> },
    PriceRangeSet { ceiling: PriceCeiling },
    CategorySet { category: Category, enabled: bool },
    RatingSet { rating: RatingThreshold },
    SortSet { sort: PriceSort },
    DerivedSeeded { products: Vec<Product> },
    FiltersCleared,
}

impl Event for FilterEvent {
    fn event_type(&self) -> &'static str {
        match self {
            FilterEvent::ProductDataSet { .. } => "catalog.filter.product_data_set",
            FilterEvent::PriceRangeSet { .. } => "catalog.filter.price_range_set",
            FilterEvent::CategorySet { .. } => "catalog.filter.category_set",
            FilterEvent::RatingSet { .. } => "catalog.filter.rating_set",
            FilterEvent::SortSet { .. } => "catalog.filter.sort_set",
            FilterEvent::DerivedSeeded { .. } => "catalog.filter.derived_seeded",
            FilterEvent::FiltersCleared => "catalog.filter.cleared",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

impl Aggregate for FilterState {
    type Command = FilterCommand;
    type Event = FilterEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            FilterEvent::ProductDataSet { products } => {
                self.products = products.clone();
                self.recompute();
            }
            FilterEvent::PriceRangeSet { ceiling } => {
                self.settings.price_range = *ceiling;
                self.recompute();
            }
            FilterEvent::CategorySet { category, enabled } => {
                self.settings.category = self.settings.category.with(*category, *enabled);
                self.recompute();
            }
            FilterEvent::RatingSet { rating } => {
                self.settings.rating = *rating;
                self.recompute();
            }
            FilterEvent::SortSet { sort } => {
                self.settings.sort = *sort;
                self.recompute();
            }
            FilterEvent::DerivedSeeded { products } => {
                self.product_data = products.clone();
            }
            FilterEvent::FiltersCleared => {
                self.settings = FilterSettings::default();
                self.product_data = self.products.clone();
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let event = match command {
            FilterCommand::SetProductData(products) => {
                ensure_unique(products)?;
                FilterEvent::ProductDataSet {
                    products: products.clone(),
                }
            }
            FilterCommand::SetPriceRange(value) => FilterEvent::PriceRangeSet {
                ceiling: PriceCeiling::new(*value)?,
            },
            FilterCommand::SetCategory { category, enabled } => FilterEvent::CategorySet {
                category: *category,
                enabled: *enabled,
            },
            FilterCommand::SetRating(rating) => FilterEvent::RatingSet { rating: *rating },
            FilterCommand::SetSort(sort) => FilterEvent::SortSet { sort: *sort },
            FilterCommand::SeedDerived(products) => {
                ensure_unique(products)?;
                self.ensure_canonical(products)?;
                FilterEvent::DerivedSeeded {
                    products: products.clone(),
                }
            }
            FilterCommand::Clear => FilterEvent::FiltersCleared,
        };
        Ok(vec![event])
    }
}

impl FilterState {
    fn ensure_canonical(&self, products: &[Product]) -> Result<(), DomainError> {
        match products.iter().find(|p| !self.products.contains(p)) {
            Some(stray) => Err(DomainError::invariant(format!(
                "product {} is not in the canonical list",
                stray.id
            ))),
            None => Ok(()),
        }
    }
}

fn ensure_unique(products: &[Product]) -> Result<(), DomainError> {
    let mut seen: HashSet<ProductId> = HashSet::with_capacity(products.len());
    match products.iter().find(|p| !seen.insert(p.id)) {
        Some(dup) => Err(DomainError::invariant(format!("duplicate product id {}", dup.id))),
        None => Ok(()),
    }
}
