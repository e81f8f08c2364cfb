//! Product search.

use shared::Product;

/// Products whose name or description contains `search` (case-insensitive).
///
/// Blank search text returns every product. Input order is kept.
pub fn filter<'a>(products: &'a [Product], search: &str) -> Vec<&'a Product> {
    matching_indices(products, search)
        .into_iter()
        .map(|i| &products[i])
        .collect()
}

/// Same as [`filter`], as positions into `products`.
pub fn matching_indices(products: &[Product], search: &str) -> Vec<usize> {
    if search.trim().is_empty() {
        return (0..products.len()).collect();
    }
    let needle = search.to_lowercase();
    products
        .iter()
        .enumerate()
        .filter(|(_, p)| p.matches_lowercase(&needle))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{product, sample_catalog};

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_blank_search_returns_all_in_order() {
        let products = sample_catalog();
        for search in ["", "   ", "\t\n"] {
            let result = filter(&products, search);
            assert_eq!(result.len(), products.len());
            assert!(result.iter().zip(&products).all(|(a, b)| *a == b));
        }
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let products = sample_catalog();
        assert_eq!(names(&filter(&products, "DUCK")), vec!["Duck"]);
    }

    #[test]
    fn test_matches_description() {
        let products = vec![
            product("1", "Duck", "toy", "/model/duck.glb"),
            product("2", "Armor", "Sci-fi damaged helmet", "/model/helmet.glb"),
        ];
        assert_eq!(names(&filter(&products, "helmet")), vec!["Armor"]);
    }

    #[test]
    fn test_preserves_relative_order() {
        let products = sample_catalog();
        let result = filter(&products, "3d model");
        let positions: Vec<usize> = result
            .iter()
            .map(|p| products.iter().position(|q| q.id == p.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!result.is_empty());
    }

    #[test]
    fn test_every_result_contains_needle() {
        let products = sample_catalog();
        for search in ["man", "Box", "sphere", "RETRO", "zzz"] {
            let needle = search.to_lowercase();
            for p in filter(&products, search) {
                assert!(
                    p.name.to_lowercase().contains(&needle)
                        || p.description.to_lowercase().contains(&needle)
                );
            }
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_part_of_needle() {
        let products = sample_catalog();
        assert_eq!(names(&filter(&products, "Rubber duck ")), vec!["Duck"]);
        assert!(filter(&products, "duck  ").is_empty());
    }

    #[test]
    fn test_no_match_is_empty() {
        let products = sample_catalog();
        assert!(filter(&products, "submarine").is_empty());
        assert!(matching_indices(&products, "submarine").is_empty());
    }
}
