//! Result selection for the display surface.

use rand::seq::SliceRandom;

use crate::catalog::Product;
use crate::search::FilterParams;

/// Maximum number of products shown in browse mode.
pub const MAX_BROWSE: usize = 50;

/// Decide what the user sees for a query outcome.
///
/// Browse mode (no active criteria) shows a uniformly random sample of at
/// most [`MAX_BROWSE`] products, reshuffled on every call. An explicit
/// search passes the result set through untouched, in service order.
pub fn select(params: &FilterParams, mut results: Vec<Product>) -> Vec<Product> {
    if params.is_browse() {
        results.shuffle(&mut rand::thread_rng());
        results.truncate(MAX_BROWSE);
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::FilterField;

    fn products(count: u64) -> Vec<Product> {
        (0..count)
            .map(|id| Product {
                id,
                name: format!("Product {id}"),
                model: format!("M-{id}"),
                brand: String::new(),
                category: "misc".to_string(),
                price: id as f64,
                image: None,
            })
            .collect()
    }

    fn sorted_ids(results: &[Product]) -> Vec<u64> {
        let mut ids: Vec<u64> = results.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_explicit_search_is_identity() {
        let params = FilterParams::from_search_text("x200");
        let input = products(10);

        let first = select(&params, input.clone());
        let second = select(&params, input.clone());

        assert_eq!(first, input);
        assert_eq!(second, input);
    }

    #[test]
    fn test_browse_small_set_is_permutation() {
        let params = FilterParams::new();
        let input = products(20);

        let out = select(&params, input.clone());

        assert_eq!(out.len(), 20);
        assert_eq!(sorted_ids(&out), sorted_ids(&input));
    }

    #[test]
    fn test_browse_caps_large_set() {
        let params = FilterParams::new();
        let input = products(80);

        let out = select(&params, input.clone());

        assert_eq!(out.len(), MAX_BROWSE);
        // All drawn from the input, no element repeated by selection.
        let ids = sorted_ids(&out);
        assert!(ids.windows(2).all(|w| w[0] != w[1]));
        assert!(ids.iter().all(|id| *id < 80));
    }

    #[test]
    fn test_browse_exactly_at_cap() {
        let params = FilterParams::new();
        let input = products(MAX_BROWSE as u64);
        let out = select(&params, input.clone());
        assert_eq!(out.len(), MAX_BROWSE);
        assert_eq!(sorted_ids(&out), sorted_ids(&input));
    }

    #[test]
    fn test_browse_keeps_duplicates() {
        let params = FilterParams::new();
        let mut input = products(3);
        input.push(input[0].clone());

        let out = select(&params, input);

        assert_eq!(out.len(), 4);
        assert_eq!(out.iter().filter(|p| p.id == 0).count(), 2);
    }

    #[test]
    fn test_empty_results_are_valid() {
        assert!(select(&FilterParams::new(), Vec::new()).is_empty());
        assert!(select(&FilterParams::from_search_text("x"), Vec::new()).is_empty());
    }

    #[test]
    fn test_singleton_results() {
        let out = select(&FilterParams::new(), products(1));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 0);
    }

    #[test]
    fn test_browse_first_element_varies() {
        let params = FilterParams::new();
        let input = products(20);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let out = select(&params, input.clone());
            seen.insert(out[0].id);
        }
        // Statistical check, not exact distribution: 200 shuffles of 20
        // elements landing on one first element is effectively impossible.
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_browse_reorders_large_set() {
        let params = FilterParams::new();
        let input = products(80);

        let out = select(&params, input.clone());
        let prefix: Vec<u64> = input.iter().take(MAX_BROWSE).map(|p| p.id).collect();
        let out_ids: Vec<u64> = out.iter().map(|p| p.id).collect();

        assert_ne!(out_ids, prefix);
    }

    #[test]
    fn test_filtered_params_with_values_pass_through() {
        let params = FilterParams::new()
            .with(FilterField::Category, "phones")
            .with(FilterField::PriceMax, "500");
        let input = products(80);

        let out = select(&params, input.clone());
        assert_eq!(out, input);
    }
}
