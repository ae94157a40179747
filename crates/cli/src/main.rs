mod config;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde_json::json;

use storefront_catalog::{DerivedListChanged, JsonCatalog, PriceSort, ProductsView};
use storefront_events::{EventBus, InMemoryEventBus};

use crate::config::{Cli, RunConfig};

fn main() -> anyhow::Result<()> {
    let config = RunConfig::try_from(Cli::parse())?;
    storefront_observability::tracing::init(config.log_format);

    let catalog = JsonCatalog::from_path(&config.catalog)
        .with_context(|| format!("loading catalog {}", config.catalog.display()))?;

    let bus = Arc::new(InMemoryEventBus::<DerivedListChanged>::new());
    let updates = bus.subscribe();
    let mut view = ProductsView::load(&catalog, &catalog, config.status, bus)?;

    if let Some(max_price) = config.max_price {
        view.set_price_range(max_price)?;
    }
    for category in &config.categories {
        view.set_category(*category, true)?;
    }
    if let Some(rating) = config.rating {
        view.set_rating(rating)?;
    }
    if config.sort != PriceSort::Unset {
        view.set_sort(config.sort)?;
    }

    tracing::debug!(updates = updates.drain().len(), "filters applied");

    let output = if config.ids_only {
        json!({
            "header": view.header(),
            "ids": view.state().derived().iter().map(|p| p.id).collect::<Vec<_>>(),
        })
    } else {
        json!({
            "header": view.header(),
            "sliderFillPercent": view.slider_fill_percent(),
            "categories": view.categories(),
            "cards": view.cards(),
        })
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    view.unmount()?;
    Ok(())
}
