use crate::catalog::{Catalog, ProductRow};
use crate::model::Product;

/// The only mutable state in the system: the owner filter and the
/// search text. Everything displayed is derived from this pair plus
/// the immutable catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    selected_user: Option<i64>,
    query: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_user(&self) -> Option<i64> {
        self.selected_user
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Set or clear the owner filter. Ids are not validated; an id
    /// matching no user simply yields zero rows.
    pub fn select_user(&mut self, user_id: Option<i64>) {
        self.selected_user = user_id;
    }

    /// Replace the search text verbatim. No trimming.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Drop both filters at once. Idempotent.
    pub fn reset(&mut self) {
        self.selected_user = None;
        self.query.clear();
    }

    /// Whether the clear-search affordance should be offered.
    pub fn is_query_active(&self) -> bool {
        !self.query.is_empty()
    }

    /// Whether a product passes both filter predicates.
    pub fn matches(&self, catalog: &Catalog, product: &Product) -> bool {
        let matches_user = match self.selected_user {
            None => true,
            Some(user_id) => catalog
                .owner_of(product)
                .map(|owner| owner.id == user_id)
                .unwrap_or(false),
        };

        let matches_query = self.query.is_empty()
            || product
                .name
                .to_lowercase()
                .contains(&self.query.to_lowercase());

        matches_user && matches_query
    }
}

/// Derive the displayed rows: a stable linear filter over the products
/// in their original order, each joined with category and owner.
pub fn visible_products<'a>(catalog: &'a Catalog, state: &FilterState) -> Vec<ProductRow<'a>> {
    catalog
        .products
        .iter()
        .filter(|product| state.matches(catalog, product))
        .map(|product| catalog.resolve(product))
        .collect()
}
