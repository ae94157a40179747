//! Individual list filters and the price sorter.
//!
//! Every function is pure: it borrows its input and returns a new list that
//! keeps the input's relative order (except where `sort_price` reorders).

use core::cmp::Ordering;

use crate::product::{Product, TrendingStatus};
use crate::settings::{PRICE_MAX, PriceSort, RatingThreshold};

/// Products whose category name equals `category_name` exactly.
///
/// Names are plain values; an unknown name simply matches nothing.
pub fn filter_category(category_name: &str, list: &[Product]) -> Vec<Product> {
    list.iter()
        .filter(|p| p.category_name == category_name)
        .cloned()
        .collect()
}

/// Products priced at or below `ceiling`.
///
/// A ceiling at (or past) `PRICE_MAX` is "no restriction" and returns the list
/// unchanged, unpriced products included. Below it, unpriced products are dropped.
pub fn filter_price_range(ceiling: u64, list: &[Product]) -> Vec<Product> {
    if ceiling >= PRICE_MAX {
        return list.to_vec();
    }
    list.iter()
        .filter(|p| p.price.is_some_and(|price| price <= ceiling as f64))
        .cloned()
        .collect()
}

/// Products rated at or above the threshold. Unrated products are dropped.
pub fn filter_ratings(threshold: RatingThreshold, list: &[Product]) -> Vec<Product> {
    let min = threshold.min_rating();
    list.iter()
        .filter(|p| p.rating.is_some_and(|rating| rating >= min))
        .cloned()
        .collect()
}

/// Products carrying the given merchandising status.
pub fn filter_trending_status(status: TrendingStatus, list: &[Product]) -> Vec<Product> {
    list.iter()
        .filter(|p| p.trending_status == Some(status))
        .cloned()
        .collect()
}

/// Stable sort by price into a new list.
///
/// `Unset` is the identity. Unpriced products go last in both directions.
pub fn sort_price(sort: PriceSort, list: &[Product]) -> Vec<Product> {
    let mut sorted = list.to_vec();
    match sort {
        PriceSort::Unset => {}
        PriceSort::LowToHigh => sorted.sort_by(|a, b| compare_prices(a.price, b.price, false)),
        PriceSort::HighToLow => sorted.sort_by(|a, b| compare_prices(a.price, b.price, true)),
    }
    sorted
}

fn compare_prices(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.total_cmp(&a),
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::fixtures::{ids, product};

    fn sample() -> Vec<Product> {
        vec![
            product(1, 100, "Art", 4.0),
            product(2, 3000, "Wearable", 2.0),
            product(3, 500, "Art", 5.0),
            product(4, 500, "Entities", 3.5),
        ]
    }

    #[test]
    fn category_keeps_matching_entries_in_order() {
        assert_eq!(ids(&filter_category("Art", &sample())), vec![1, 3]);
    }

    #[test]
    fn unknown_category_and_empty_input_yield_nothing() {
        assert!(filter_category("Music", &sample()).is_empty());
        assert!(filter_category("Art", &[]).is_empty());
    }

    #[test]
    fn price_ceiling_is_inclusive() {
        assert_eq!(ids(&filter_price_range(500, &sample())), vec![1, 3, 4]);
        assert_eq!(ids(&filter_price_range(0, &sample())), Vec::<u128>::new());
    }

    #[test]
    fn max_ceiling_keeps_unpriced_products() {
        let mut list = sample();
        list[1].price = None;
        assert_eq!(filter_price_range(PRICE_MAX, &list), list);
        assert_eq!(ids(&filter_price_range(3900, &list)), vec![1, 3, 4]);
    }

    #[test]
    fn rating_threshold_is_inclusive_and_drops_unrated() {
        let mut list = sample();
        assert_eq!(ids(&filter_ratings(RatingThreshold::FourAndAbove, &list)), vec![1, 3]);
        assert_eq!(ids(&filter_ratings(RatingThreshold::ThreeAndAbove, &list)), vec![1, 3, 4]);

        list[0].rating = None;
        assert_eq!(ids(&filter_ratings(RatingThreshold::OneAndAbove, &list)), vec![2, 3, 4]);
    }

    #[test]
    fn trending_filter_matches_status() {
        let mut list = sample();
        list[2].trending_status = Some(TrendingStatus::Trending);
        list[3].trending_status = Some(TrendingStatus::TopSelling);
        assert_eq!(ids(&filter_trending_status(TrendingStatus::Trending, &list)), vec![3]);
        assert_eq!(ids(&filter_trending_status(TrendingStatus::TopSelling, &list)), vec![4]);
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let list = sample();
        assert_eq!(ids(&sort_price(PriceSort::LowToHigh, &list)), vec![1, 3, 4, 2]);
        assert_eq!(ids(&sort_price(PriceSort::HighToLow, &list)), vec![2, 3, 4, 1]);
    }

    #[test]
    fn unset_sort_is_identity_and_input_is_untouched() {
        let list = sample();
        let before = list.clone();
        assert_eq!(sort_price(PriceSort::Unset, &list), list);
        let _ = sort_price(PriceSort::HighToLow, &list);
        assert_eq!(list, before);
    }

    #[test]
    fn fractional_prices_filter_and_sort_by_value() {
        let mut list = sample();
        list[0].price = Some(500.5);
        list[3].price = Some(499.5);
        assert_eq!(ids(&filter_price_range(500, &list)), vec![3, 4]);
        assert_eq!(ids(&sort_price(PriceSort::LowToHigh, &list)), vec![4, 3, 1, 2]);
    }

    #[test]
    fn unpriced_products_sort_last_both_ways() {
        let mut list = sample();
        list[0].price = None;
        assert_eq!(ids(&sort_price(PriceSort::LowToHigh, &list)), vec![3, 4, 2, 1]);
        assert_eq!(ids(&sort_price(PriceSort::HighToLow, &list)), vec![2, 3, 4, 1]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_list() -> impl Strategy<Value = Vec<Product>> {
            prop::collection::vec(
                (
                    prop::option::weighted(0.9, (0u64..10_000).prop_map(|halves| halves as f64 / 2.0)),
                    prop::sample::select(vec!["Art", "Collectibles", "Wearable", "Music"]),
                    prop::option::weighted(0.9, 0.0f64..=5.0),
                ),
                0..40,
            )
            .prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (price, category, rating))| {
                        let mut p = product(i as u128, 0, category, 0.0);
                        p.price = price;
                        p.rating = rating;
                        p
                    })
                    .collect::<Vec<_>>()
            })
        }

        fn is_subsequence(sub: &[Product], list: &[Product]) -> bool {
            let mut rest = list.iter();
            sub.iter().all(|s| rest.any(|p| p == s))
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: price filter keeps exactly the entries at or under the ceiling.
            #[test]
            fn price_filter_is_exact(list in arb_list(), ceiling in 0u64..PRICE_MAX) {
                let expected: Vec<Product> = list
                    .iter()
                    .filter(|p| p.price.is_some_and(|price| price <= ceiling as f64))
                    .cloned()
                    .collect();
                prop_assert_eq!(filter_price_range(ceiling, &list), expected);
            }

            /// Property: the maximum ceiling is the identity.
            #[test]
            fn max_ceiling_is_identity(list in arb_list()) {
                prop_assert_eq!(filter_price_range(PRICE_MAX, &list), list);
            }

            /// Property: category filter returns an ordered subset with matching names.
            #[test]
            fn category_filter_is_ordered_subset(list in arb_list()) {
                let out = filter_category("Art", &list);
                prop_assert!(out.iter().all(|p| p.category_name == "Art"));
                prop_assert!(is_subsequence(&out, &list));
            }

            /// Property: rating filter honours every threshold.
            #[test]
            fn rating_filter_respects_threshold(
                list in arb_list(),
                threshold in prop::sample::select(RatingThreshold::MENU.to_vec()),
            ) {
                let out = filter_ratings(threshold, &list);
                prop_assert!(out.iter().all(|p| p.rating.unwrap() >= threshold.min_rating()));
                prop_assert!(is_subsequence(&out, &list));
            }

            /// Property: ascending sort is a non-decreasing, stable permutation.
            #[test]
            fn ascending_sort_is_stable_permutation(list in arb_list()) {
                let out = sort_price(PriceSort::LowToHigh, &list);
                prop_assert_eq!(out.len(), list.len());
                for pair in out.windows(2) {
                    match (pair[0].price, pair[1].price) {
                        (Some(a), Some(b)) => {
                            prop_assert!(a <= b);
                            if a == b {
                                prop_assert!(pair[0].id < pair[1].id);
                            }
                        }
                        (None, Some(_)) => prop_assert!(false, "unpriced before priced"),
                        (None, None) => prop_assert!(pair[0].id < pair[1].id),
                        (Some(_), None) => {}
                    }
                }
            }

            /// Property: descending sort is non-increasing and stable on ties.
            #[test]
            fn descending_sort_is_stable(list in arb_list()) {
                let out = sort_price(PriceSort::HighToLow, &list);
                prop_assert_eq!(out.len(), list.len());
                for pair in out.windows(2) {
                    if let (Some(a), Some(b)) = (pair[0].price, pair[1].price) {
                        prop_assert!(a >= b);
                        if a == b {
                            prop_assert!(pair[0].id < pair[1].id);
                        }
                    }
                }
            }
        }
    }
}
