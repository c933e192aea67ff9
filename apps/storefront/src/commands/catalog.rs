//! # Catalog Commands
//!
//! The product listing comes from an external catalog. The storefront only
//! sees it through [`CatalogSource`]; how the products are fetched (HTTP,
//! fixture file, cache) is the implementor's business.
//!
//! ```text
//! Home page mounts ──► list_products(source) ──► CatalogSource::list_products
//!                                                      │
//!                          Vec<Product> ◄──────────────┘
//! ```

use std::future::Future;

use storefront_core::Product;
use tracing::{debug, info};

use crate::error::{ApiError, CatalogError};

/// Supplier of the product listing.
pub trait CatalogSource {
    /// Returns every product currently for sale.
    fn list_products(&self) -> impl Future<Output = Result<Vec<Product>, CatalogError>> + Send;
}

/// Parses a catalog response body: a JSON array of products.
///
/// ## Example
/// ```rust
/// use storefront::commands::catalog::parse_catalog;
///
/// let products = parse_catalog(r#"[{"id":1,"name":"Shirt","price":19.99}]"#).unwrap();
/// assert_eq!(products[0].id, "1");
/// assert_eq!(products[0].price_cents, 1999);
/// ```
pub fn parse_catalog(body: &str) -> Result<Vec<Product>, CatalogError> {
    Ok(serde_json::from_str(body)?)
}

/// A fixed, in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        StaticCatalog { products }
    }

    /// Builds a catalog from a JSON body (see [`parse_catalog`]).
    pub fn from_json(body: &str) -> Result<Self, CatalogError> {
        Ok(StaticCatalog::new(parse_catalog(body)?))
    }
}

impl CatalogSource for StaticCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }
}

/// A catalog response body, parsed on every listing.
///
/// Whoever fetches the body (HTTP client, fixture file) hands it over as-is;
/// a malformed payload surfaces from `list_products` as
/// [`CatalogError::Malformed`].
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    body: String,
}

impl JsonCatalog {
    pub fn new(body: impl Into<String>) -> Self {
        JsonCatalog { body: body.into() }
    }
}

impl CatalogSource for JsonCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        parse_catalog(&self.body)
    }
}

/// Loads the product listing for the home page.
///
/// ## Errors
/// `CATALOG_ERROR` when the source fails. The cart is unaffected.
pub async fn list_products<S>(source: &S) -> Result<Vec<Product>, ApiError>
where
    S: CatalogSource + Sync,
{
    debug!("list_products command");

    let products = source.list_products().await?;
    info!(count = products.len(), "Catalog loaded");

    Ok(products)
}
