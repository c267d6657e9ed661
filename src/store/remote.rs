use async_trait::async_trait;

use super::{InventoryStore, ProductStore, SortSpec};
use crate::core::Result;
use crate::http::{ApiHttp, AppSettings};
use crate::model::{
    ApiEnvelope, InventoryProduct, InventoryStatus, InventoryStock, NewProduct, PageRoot,
    PaginatedResult, Product, ProductPatch, StockMovement,
};

/// Product store backed by the product microservice.
pub struct RemoteProducts {
    api: ApiHttp,
    settings: AppSettings,
}

impl RemoteProducts {
    pub fn new(api: ApiHttp, settings: AppSettings) -> Self {
        Self { api, settings }
    }
}

#[async_trait]
impl ProductStore for RemoteProducts {
    /// The server's 0-based page number passes through unmodified, on the
    /// request as well as in the flattened result.
    async fn list(&self, page: u32, size: u32, sort: &SortSpec)
    -> Result<PaginatedResult<Product>> {
        let params = [
            ("page", Some(page.to_string())),
            ("size", Some(size.to_string())),
            ("sortDirection", Some(sort.direction.as_str().to_string())),
            ("sortBy", Some(sort.by.clone())),
        ];

        let envelope: ApiEnvelope<PageRoot<Product>> =
            self.api.get(&self.settings.producto_base, &params).await?;
        let root = envelope.into_data();

        Ok(PaginatedResult {
            items: root.content,
            total_items: root.total_elements,
            page: root.pageable.page_number,
            page_size: root.pageable.page_size,
        })
    }

    async fn get(&self, id: &str) -> Result<Product> {
        let path = format!("{}{}", self.settings.producto_base_slash, id);
        let envelope: ApiEnvelope<Product> = self.api.get(&path, &[]).await?;
        Ok(envelope.into_data())
    }

    async fn create(&self, product: NewProduct) -> Result<Product> {
        // This route answers with the bare entity, no envelope.
        self.api.post(&self.settings.producto_base, &product).await
    }

    async fn update(&self, id: &str, patch: ProductPatch) -> Result<Product> {
        let path = format!("{}{}", self.settings.producto_base_slash, id);
        self.api.patch(&path, &patch).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        // The service takes the id as a query parameter on this route.
        self.api
            .delete(
                &self.settings.producto_base_slash,
                &[("id", Some(id.to_string()))],
            )
            .await
    }
}

/// Inventory store backed by the inventory microservice.
pub struct RemoteInventory {
    api: ApiHttp,
    settings: AppSettings,
}

impl RemoteInventory {
    pub fn new(api: ApiHttp, settings: AppSettings) -> Self {
        Self { api, settings }
    }

    fn product_path(&self, product_id: &str, suffix: &str) -> String {
        format!(
            "{}{}{}",
            self.settings.inventario_base_slash, product_id, suffix
        )
    }
}

#[async_trait]
impl InventoryStore for RemoteInventory {
    async fn get(&self, product_id: &str) -> Result<InventoryProduct> {
        let path = self.product_path(product_id, "");
        let envelope: ApiEnvelope<InventoryProduct> = self.api.get(&path, &[]).await?;
        Ok(envelope.into_data())
    }

    async fn register_incoming(
        &self,
        product_id: &str,
        movement: StockMovement,
    ) -> Result<InventoryStatus> {
        let path = self.product_path(product_id, "/ingreso");
        let envelope: ApiEnvelope<InventoryStatus> = self.api.post(&path, &movement).await?;
        Ok(envelope.into_data())
    }

    async fn apply_purchase(
        &self,
        product_id: &str,
        movement: StockMovement,
    ) -> Result<InventoryStock> {
        let path = self.product_path(product_id, "/salida");
        let envelope: ApiEnvelope<InventoryStock> = self.api.post(&path, &movement).await?;
        Ok(envelope.into_data())
    }
}
