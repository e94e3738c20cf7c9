use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::model::{Category, Product, Sex, User};

/// The three reference collections, loaded once and never mutated.
///
/// Foreign keys (`Product::category_id`, `Category::owner_id`) are
/// assumed consistent, never validated. A lookup that finds nothing
/// returns `None` and the caller renders a blank cell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl Catalog {
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            users,
            categories,
            products,
        }
    }

    /// Parse a catalog from a JSON document holding the three arrays.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(input)
            .map_err(|source| CatalogError::json("catalog document", source))?;

        tracing::debug!(
            users = catalog.users.len(),
            categories = catalog.categories.len(),
            products = catalog.products.len(),
            "parsed catalog"
        );

        Ok(catalog)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::path_not_found(path));
        }
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn category_by_id(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn user_by_id(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// The user owning the product's category, if both links resolve.
    pub fn owner_of(&self, product: &Product) -> Option<&User> {
        let category = self.category_by_id(product.category_id)?;
        self.user_by_id(category.owner_id)
    }

    /// Join a product with its (possibly absent) category and owner.
    pub fn resolve<'a>(&'a self, product: &'a Product) -> ProductRow<'a> {
        let category = self.category_by_id(product.category_id);
        let owner = category.and_then(|c| self.user_by_id(c.owner_id));
        ProductRow {
            product,
            category,
            owner,
        }
    }
}

/// One displayed row: a product joined with its category and owner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductRow<'a> {
    pub product: &'a Product,
    pub category: Option<&'a Category>,
    pub owner: Option<&'a User>,
}

impl<'a> ProductRow<'a> {
    /// Category cell text, always `"{icon} - {title}"`. Missing fields
    /// render as empty strings, so an orphaned product shows `" - "`.
    pub fn category_label(&self) -> String {
        let icon = self.category.map(|c| c.icon.as_str()).unwrap_or("");
        let title = self.category.map(|c| c.title.as_str()).unwrap_or("");
        format!("{} - {}", icon, title)
    }

    /// Owner name cell text, empty when the owner cannot be resolved.
    pub fn owner_name(&self) -> &'a str {
        self.owner.map(|u| u.name.as_str()).unwrap_or("")
    }

    pub fn owner_sex(&self) -> Option<Sex> {
        self.owner.map(|u| u.sex)
    }
}
