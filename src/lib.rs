// ============================================================================
// Storefront Library
// ============================================================================

pub mod config;
pub mod core;
pub mod http;
pub mod model;
pub mod store;
pub mod view;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use core::{Result, StoreError};
pub use model::{
    ApiEnvelope, InventoryProduct, InventoryStatus, InventoryStock, NewProduct, PaginatedResult,
    Product, ProductPatch, StockMovement,
};
pub use store::{
    InMemoryInventory, InMemoryProducts, InventoryStore, ProductStore, RemoteInventory,
    RemoteProducts, SortDirection, SortSpec,
};
pub use view::{
    FetchState, ProductAdminView, ProductDetailView, ProductForm, ProductListView, SaveOutcome,
};

use std::sync::Arc;

use http::{ApiHttp, AppSettings};

// ============================================================================
// High-level Client API
// ============================================================================

/// Entry point bundling the two data sources behind one handle.
///
/// Every screen-level state object is built from here, so the whole client
/// runs against a single pair of stores, in-memory or remote.
///
/// # Examples
///
/// ```
/// use storefront::Storefront;
///
/// # tokio_test::block_on(async {
/// let shop = Storefront::mock();
///
/// let page = shop.products().list(1, 10, &Default::default()).await.unwrap();
/// assert_eq!(page.items.len(), 10);
/// assert_eq!(page.total_items, 50);
/// # });
/// ```
pub struct Storefront {
    products: Arc<dyn ProductStore>,
    inventory: Arc<dyn InventoryStore>,
}

impl Storefront {
    /// Client over demo-seeded in-memory stores.
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront::Storefront;
    ///
    /// # tokio_test::block_on(async {
    /// let shop = Storefront::mock();
    /// let product = shop.products().get("3").await.unwrap();
    /// assert_eq!(product.name, "Producto 3");
    /// # });
    /// ```
    pub fn mock() -> Self {
        Self {
            products: Arc::new(InMemoryProducts::with_demo_data()),
            inventory: Arc::new(InMemoryInventory::with_demo_data()),
        }
    }

    /// Client with explicitly injected stores.
    pub fn with_stores(
        products: Arc<dyn ProductStore>,
        inventory: Arc<dyn InventoryStore>,
    ) -> Self {
        Self { products, inventory }
    }

    /// Client over the two REST microservices behind `config.base_url`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use storefront::{ClientConfig, Storefront};
    ///
    /// # fn main() -> storefront::Result<()> {
    /// let config = ClientConfig::new("http://localhost:8080", "mi-clave");
    /// let shop = Storefront::connect(config)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn connect(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let api = ApiHttp::new(&config);
        let settings = AppSettings::new();

        Ok(Self {
            products: Arc::new(RemoteProducts::new(api.clone(), settings.clone())),
            inventory: Arc::new(RemoteInventory::new(api, settings)),
        })
    }

    pub fn products(&self) -> &Arc<dyn ProductStore> {
        &self.products
    }

    pub fn inventory(&self) -> &Arc<dyn InventoryStore> {
        &self.inventory
    }

    /// State for the paginated listing screen.
    pub fn product_list(&self) -> ProductListView {
        ProductListView::new(self.products.clone())
    }

    /// State for the detail / purchase screen of one product.
    pub fn product_detail(&self, product_id: &str) -> ProductDetailView {
        ProductDetailView::new(self.products.clone(), self.inventory.clone(), product_id)
    }

    /// State for the admin CRUD screen.
    pub fn admin(&self) -> ProductAdminView {
        ProductAdminView::new(self.products.clone(), self.inventory.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client_lists_demo_data() {
        let shop = Storefront::mock();

        let page = shop
            .products()
            .list(1, 10, &SortSpec::default())
            .await
            .unwrap();

        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total_items, 50);
    }

    #[tokio::test]
    async fn test_views_share_the_injected_store() {
        let products = Arc::new(InMemoryProducts::with_demo_data());
        let inventory = Arc::new(InMemoryInventory::with_demo_data());
        let shop = Storefront::with_stores(products, inventory);

        let mut admin = shop.admin();
        admin.delete("1").await.unwrap();

        let mut list = shop.product_list();
        list.load().await;
        assert_eq!(list.total_items, 49);
    }

    #[test]
    fn test_connect_rejects_invalid_config() {
        let result = Storefront::connect(ClientConfig::new("", ""));
        assert!(result.is_err());
    }
}
