pub mod catalog;
pub mod error;
pub mod filter;
pub mod fixture;
pub mod model;

pub use catalog::{Catalog, ProductRow};
pub use error::{CatalogError, Result};
pub use filter::{visible_products, FilterState};
pub use fixture::default_catalog;
pub use model::{Category, Product, Sex, User};
