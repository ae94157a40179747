//! The Products view session: owns the filter state between mount and unmount.

use chrono::{DateTime, Utc};
use serde::Serialize;

use storefront_core::{AggregateRoot, DomainError, DomainResult, ProductId, SessionId};
use storefront_events::{EventBus, execute};

use crate::card::ProductCard;
use crate::category::{Category, CategoryListing};
use crate::filter::filter_trending_status;
use crate::product::{Product, TrendingStatus};
use crate::settings::{PriceSort, RatingThreshold};
use crate::source::{CartHook, CategorySource, ProductSource};
use crate::state::{FilterCommand, FilterEvent, FilterState};

/// Published after every accepted command so renderers can redraw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedListChanged {
    pub session_id: SessionId,
    pub version: u64,
    pub product_ids: Vec<ProductId>,
    pub occurred_at: DateTime<Utc>,
}

/// One mounted Products page.
///
/// Construction is the mount, [`ProductsView::unmount`] the teardown. Between
/// the two, every control change goes through [`ProductsView::dispatch`].
#[derive(Debug)]
pub struct ProductsView<B>
where
    B: EventBus<DerivedListChanged>,
{
    state: FilterState,
    categories: Vec<CategoryListing>,
    bus: B,
}

impl<B> ProductsView<B>
where
    B: EventBus<DerivedListChanged>,
{
    /// Mount the view over an already loaded canonical list.
    ///
    /// A category source failure is logged and leaves the checkbox list empty.
    /// A `status` hint narrows the initial derived list once; later settings
    /// changes recompute from the full canonical list.
    pub fn mount(
        canonical: Vec<Product>,
        categories: &dyn CategorySource,
        status: Option<TrendingStatus>,
        bus: B,
    ) -> DomainResult<Self> {
        let categories = categories.fetch_categories().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "category list unavailable; rendering no category filters");
            Vec::new()
        });

        let mut view = Self {
            state: FilterState::new(SessionId::new()),
            categories,
            bus,
        };

        view.dispatch(FilterCommand::SetProductData(canonical))?;
        if let Some(status) = status {
            let seeded = filter_trending_status(status, view.state.canonical());
            view.dispatch(FilterCommand::SeedDerived(seeded))?;
        }

        tracing::info!(
            session_id = %view.state.id(),
            products = view.state.canonical().len(),
            categories = view.categories.len(),
            status = status.map(TrendingStatus::as_str),
            "products view mounted"
        );
        Ok(view)
    }

    /// Mount the view, pulling the canonical list from `products`.
    pub fn load(
        products: &dyn ProductSource,
        categories: &dyn CategorySource,
        status: Option<TrendingStatus>,
        bus: B,
    ) -> anyhow::Result<Self> {
        let canonical = products.fetch_products()?;
        Ok(Self::mount(canonical, categories, status, bus)?)
    }

    /// Run one command against the filter state and notify subscribers.
    pub fn dispatch(&mut self, command: FilterCommand) -> DomainResult<Vec<FilterEvent>> {
        let events = execute(&mut self.state, &command)?;

        let notice = DerivedListChanged {
            session_id: *self.state.id(),
            version: self.state.version(),
            product_ids: self.state.derived().iter().map(|p| p.id).collect(),
            occurred_at: Utc::now(),
        };
        if let Err(err) = self.bus.publish(notice) {
            tracing::warn!(error = ?err, "failed to publish derived list change");
        }

        Ok(events)
    }

    pub fn set_price_range(&mut self, value: u64) -> DomainResult<Vec<FilterEvent>> {
        self.dispatch(FilterCommand::SetPriceRange(value))
    }

    pub fn set_category(&mut self, category: Category, enabled: bool) -> DomainResult<Vec<FilterEvent>> {
        self.dispatch(FilterCommand::SetCategory { category, enabled })
    }

    /// Checkbox handler keyed by listing name; names outside the known set
    /// have no flag to toggle.
    pub fn set_category_by_name(&mut self, name: &str, enabled: bool) -> DomainResult<Vec<FilterEvent>> {
        let category = name.parse::<Category>()?;
        self.set_category(category, enabled)
    }

    pub fn set_rating(&mut self, rating: RatingThreshold) -> DomainResult<Vec<FilterEvent>> {
        self.dispatch(FilterCommand::SetRating(rating))
    }

    /// Radio handler keyed by label; unknown labels select the lowest threshold.
    pub fn set_rating_label(&mut self, label: &str) -> DomainResult<Vec<FilterEvent>> {
        self.set_rating(RatingThreshold::from_label(label))
    }

    pub fn set_sort(&mut self, sort: PriceSort) -> DomainResult<Vec<FilterEvent>> {
        self.dispatch(FilterCommand::SetSort(sort))
    }

    /// Radio handler keyed by menu position.
    pub fn set_sort_index(&mut self, index: usize) -> DomainResult<Vec<FilterEvent>> {
        self.set_sort(PriceSort::from_menu_index(index))
    }

    pub fn clear(&mut self) -> DomainResult<Vec<FilterEvent>> {
        self.dispatch(FilterCommand::Clear)
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Category listings to render as checkboxes.
    pub fn categories(&self) -> &[CategoryListing] {
        &self.categories
    }

    pub fn category_checked(&self, name: &str) -> bool {
        Category::from_name(name).is_some_and(|c| self.state.settings().category.is_enabled(c))
    }

    pub fn cards(&self) -> Vec<ProductCard> {
        self.state.derived().iter().map(ProductCard::from).collect()
    }

    pub fn header(&self) -> String {
        format!("(showing {} products)", self.state.derived().len())
    }

    pub fn slider_fill_percent(&self) -> f64 {
        self.state.settings().price_range.fill_percent()
    }

    /// Hand a displayed product to the cart hook.
    pub fn add_to_cart(&self, id: ProductId, cart: &dyn CartHook) -> DomainResult<()> {
        let product = self
            .state
            .derived()
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::not_found(format!("product {id} is not displayed")))?;
        cart.add_to_cart(product);
        Ok(())
    }

    /// Tear down: clear filters and hand back the final state.
    pub fn unmount(mut self) -> DomainResult<FilterState> {
        self.clear()?;
        tracing::info!(session_id = %self.state.id(), "products view unmounted");
        Ok(self.state)
    }
}
