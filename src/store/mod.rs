pub mod memory;
pub mod remote;

use async_trait::async_trait;

use crate::core::Result;
use crate::model::{
    InventoryProduct, InventoryStatus, InventoryStock, NewProduct, PaginatedResult, Product,
    ProductPatch, StockMovement,
};

pub use memory::{InMemoryInventory, InMemoryProducts};
pub use remote::{RemoteInventory, RemoteProducts};

/// Sort order for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Field and direction a product listing is ordered by.
#[derive(Debug, Clone)]
pub struct SortSpec {
    pub by: String,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            by: "id".to_string(),
            direction: SortDirection::Asc,
        }
    }
}

/// Product data source.
///
/// Implemented in-memory and over the product microservice; views only ever
/// talk to this trait and receive the instance they were constructed with.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// List one page of products.
    ///
    /// Page indexing is implementation-defined and documented on each
    /// implementation: the in-memory store counts pages from 1, the remote
    /// store passes the server's 0-based page number through untouched.
    async fn list(&self, page: u32, size: u32, sort: &SortSpec)
    -> Result<PaginatedResult<Product>>;

    async fn get(&self, id: &str) -> Result<Product>;

    async fn create(&self, product: NewProduct) -> Result<Product>;

    async fn update(&self, id: &str, patch: ProductPatch) -> Result<Product>;

    /// Idempotent: deleting an absent product is a no-op.
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Inventory data source for per-product stock levels and movements.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    async fn get(&self, product_id: &str) -> Result<InventoryProduct>;

    /// Register an inbound movement (ingreso).
    async fn register_incoming(
        &self,
        product_id: &str,
        movement: StockMovement,
    ) -> Result<InventoryStatus>;

    /// Register an outbound movement (salida).
    ///
    /// The data source is the sole authority for clamping the resulting
    /// stock at zero; callers perform no arithmetic.
    async fn apply_purchase(
        &self,
        product_id: &str,
        movement: StockMovement,
    ) -> Result<InventoryStock>;
}
