//! Embedded sample catalog.
//!
//! Stands in for the server the page never had: the three collections
//! are compiled into the binary and parsed once at startup.

use crate::catalog::Catalog;
use crate::error::Result;

const CATALOG_JSON: &str = include_str!("../fixtures/catalog.json");

/// Parse the embedded sample catalog.
pub fn default_catalog() -> Result<Catalog> {
    Catalog::from_json_str(CATALOG_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_parses() {
        let catalog = default_catalog().expect("embedded fixture");
        assert!(catalog.users.len() >= 4);
        assert!(catalog.categories.len() >= 5);
        assert!(catalog.products.len() >= 10);
    }

    #[test]
    fn test_default_catalog_has_both_sexes() {
        use crate::model::Sex;

        let catalog = default_catalog().unwrap();
        assert!(catalog.users.iter().any(|u| u.sex == Sex::Male));
        assert!(catalog.users.iter().any(|u| u.sex == Sex::Female));
    }

    #[test]
    fn test_default_catalog_links_resolve() {
        let catalog = default_catalog().unwrap();
        for category in &catalog.categories {
            assert!(
                catalog.user_by_id(category.owner_id).is_some(),
                "category {} has no owner",
                category.id
            );
        }
        for product in &catalog.products {
            assert!(
                catalog.category_by_id(product.category_id).is_some(),
                "product {} has no category",
                product.id
            );
        }
    }
}
