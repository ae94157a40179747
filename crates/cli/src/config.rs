//! Command-line and environment configuration.

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};

use storefront_catalog::{Category, PriceSort, RatingThreshold, TrendingStatus};
use storefront_observability::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(about = "Filter and sort a storefront product catalog")]
#[command(
    after_help = "Environment:\n  STOREFRONT_CATALOG      Catalog JSON path\n  STOREFRONT_LOG_FORMAT   json | pretty\n  RUST_LOG                Log filter (default: info)"
)]
pub struct Cli {
    /// Catalog JSON with `products` and `categories` arrays.
    #[arg(long, env = "STOREFRONT_CATALOG")]
    pub catalog: PathBuf,

    #[arg(long, env = "STOREFRONT_LOG_FORMAT", default_value = "json")]
    pub log_format: String,

    /// Price ceiling (0 to 4000, step 100).
    #[arg(long)]
    pub max_price: Option<u64>,

    /// Enable a category checkbox; repeatable.
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Minimum stars (1 to 4) or a menu label such as "3 Stars & above".
    #[arg(long)]
    pub rating: Option<String>,

    #[arg(long, value_enum, default_value_t = SortArg::None)]
    pub sort: SortArg,

    /// Landing-page status hint (e.g. "trending", "top-selling").
    #[arg(long)]
    pub status: Option<String>,

    /// Output only product ids instead of full cards.
    #[arg(long, default_value_t = false)]
    pub ids_only: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    None,
    Asc,
    Desc,
}

impl From<SortArg> for PriceSort {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::None => PriceSort::Unset,
            SortArg::Asc => PriceSort::LowToHigh,
            SortArg::Desc => PriceSort::HighToLow,
        }
    }
}

/// Validated run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub catalog: PathBuf,
    pub log_format: LogFormat,
    pub max_price: Option<u64>,
    pub categories: Vec<Category>,
    pub rating: Option<RatingThreshold>,
    pub sort: PriceSort,
    pub status: Option<TrendingStatus>,
    pub ids_only: bool,
}

impl TryFrom<Cli> for RunConfig {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let log_format = cli
            .log_format
            .parse::<LogFormat>()
            .context("invalid STOREFRONT_LOG_FORMAT / --log-format")?;

        let categories = cli
            .categories
            .iter()
            .map(|name| name.parse::<Category>().with_context(|| format!("invalid --category {name:?}")))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let status = match cli.status.as_deref() {
            None => None,
            Some(label) => match TrendingStatus::from_label(label) {
                Some(status) => Some(status),
                None => bail!("invalid --status {label:?} (expected \"trending\" or \"top-selling\")"),
            },
        };

        Ok(Self {
            catalog: cli.catalog,
            log_format,
            max_price: cli.max_price,
            categories,
            rating: cli.rating.as_deref().map(parse_rating),
            sort: cli.sort.into(),
            status,
            ids_only: cli.ids_only,
        })
    }
}

/// Digits pick the matching threshold; anything else goes through the menu
/// labels, where unknown input means the lowest threshold.
fn parse_rating(raw: &str) -> RatingThreshold {
    match raw.trim() {
        "4" => RatingThreshold::FourAndAbove,
        "3" => RatingThreshold::ThreeAndAbove,
        "2" => RatingThreshold::TwoAndAbove,
        "1" => RatingThreshold::OneAndAbove,
        label => RatingThreshold::from_label(label),
    }
}
