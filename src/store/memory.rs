use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{InventoryStore, ProductStore, SortSpec};
use crate::core::{Result, StoreError};
use crate::model::{
    InventoryProduct, InventoryStatus, InventoryStock, NewProduct, PaginatedResult, Product,
    ProductPatch, StockMovement,
};

/// In-memory product store.
///
/// Constructed per client or per test and handed to the consumer
/// explicitly; state is never process-global.
pub struct InMemoryProducts {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProducts {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(Vec::new()),
        }
    }

    /// Store pre-seeded with the 50 demo products.
    pub fn with_demo_data() -> Self {
        let products = (1..=50u32)
            .map(|n| Product {
                id: n.to_string(),
                name: format!("Producto {n}"),
                description: format!("Descripción del producto {n}."),
                price: 10_000.0 * n as f64,
                image_base64: None,
                available_quantity: Some(n % 20),
            })
            .collect();

        Self {
            products: RwLock::new(products),
        }
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }
}

impl Default for InMemoryProducts {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for InMemoryProducts {
    /// `page` counts from 1. Page 0, or any page past the data, yields an
    /// empty page while `total_items` still reports the full count. The
    /// sort argument is ignored; rows keep their insertion order.
    async fn list(
        &self,
        page: u32,
        size: u32,
        _sort: &SortSpec,
    ) -> Result<PaginatedResult<Product>> {
        let products = self.products.read().await;

        let start = (page as i64 - 1) * size as i64;
        let items = if start < 0 || start as usize >= products.len() {
            Vec::new()
        } else {
            let start = start as usize;
            let end = (start + size as usize).min(products.len());
            products[start..end].to_vec()
        };

        Ok(PaginatedResult {
            items,
            total_items: products.len() as u64,
            page,
            page_size: size,
        })
    }

    async fn get(&self, id: &str) -> Result<Product> {
        let products = self.products.read().await;
        products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::ProductNotFound(id.to_string()))
    }

    async fn create(&self, product: NewProduct) -> Result<Product> {
        let mut products = self.products.write().await;

        // Sequential id derived from the store length; not collision-safe
        // once deletes have happened.
        let id = (products.len() + 1).to_string();
        let created = Product {
            id,
            name: product.name,
            description: product.description,
            price: product.price,
            image_base64: None,
            available_quantity: None,
        };

        products.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, patch: ProductPatch) -> Result<Product> {
        let mut products = self.products.write().await;
        let found = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::ProductNotFound(id.to_string()))?;

        if let Some(name) = patch.name {
            found.name = name;
        }
        if let Some(description) = patch.description {
            found.description = description;
        }
        if let Some(price) = patch.price {
            found.price = price;
        }
        if let Some(image) = patch.image_base64 {
            found.image_base64 = Some(image);
        }

        Ok(found.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut products = self.products.write().await;
        products.retain(|p| p.id != id);
        Ok(())
    }
}

/// One shelf row. Internal shape; every trait method maps it into the
/// shared result types at the boundary.
#[derive(Debug, Clone)]
struct StockRecord {
    product_id: String,
    name: String,
    quantity: u32,
    unit_price: f64,
}

/// In-memory inventory store, same injection rules as [`InMemoryProducts`].
pub struct InMemoryInventory {
    records: RwLock<Vec<StockRecord>>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Store pre-seeded with the demo stock levels.
    pub fn with_demo_data() -> Self {
        let records = [("1", 10u32, 10_000.0), ("2", 5, 20_000.0), ("3", 3, 30_000.0)]
            .into_iter()
            .map(|(id, quantity, unit_price)| StockRecord {
                product_id: id.to_string(),
                name: format!("Producto {id}"),
                quantity,
                unit_price,
            })
            .collect();

        Self {
            records: RwLock::new(records),
        }
    }

    /// Insert or replace the stock row for `product_id`.
    pub async fn seed(&self, product_id: &str, quantity: u32, unit_price: f64) {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.product_id == product_id) {
            Some(record) => {
                record.quantity = quantity;
                record.unit_price = unit_price;
            }
            None => records.push(StockRecord {
                product_id: product_id.to_string(),
                name: format!("Producto {product_id}"),
                quantity,
                unit_price,
            }),
        }
    }
}

impl Default for InMemoryInventory {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-numeric product ids map to 0 in the numeric projections.
fn numeric_id(product_id: &str) -> i64 {
    product_id.parse().unwrap_or(0)
}

#[async_trait]
impl InventoryStore for InMemoryInventory {
    async fn get(&self, product_id: &str) -> Result<InventoryProduct> {
        let records = self.records.read().await;
        let record = records
            .iter()
            .find(|r| r.product_id == product_id)
            .ok_or_else(|| StoreError::InventoryNotFound(product_id.to_string()))?;

        Ok(InventoryProduct {
            producto_id: numeric_id(&record.product_id),
            name: record.name.clone(),
            available_quantity: record.quantity,
            unit_price: record.unit_price,
        })
    }

    async fn register_incoming(
        &self,
        product_id: &str,
        movement: StockMovement,
    ) -> Result<InventoryStatus> {
        let mut records = self.records.write().await;
        let index = match records.iter().position(|r| r.product_id == product_id) {
            Some(index) => index,
            None => {
                records.push(StockRecord {
                    product_id: product_id.to_string(),
                    name: format!("Producto {product_id}"),
                    quantity: 0,
                    unit_price: movement.unit_price,
                });
                records.len() - 1
            }
        };

        let record = &mut records[index];
        record.quantity += movement.quantity;
        record.unit_price = movement.unit_price;

        Ok(InventoryStatus {
            product_id: record.product_id.clone(),
            quantity: record.quantity,
        })
    }

    /// Clamps the resulting stock at zero: a purchase larger than the
    /// current stock empties the shelf, it never goes negative. Unknown
    /// products get a zero-quantity row.
    async fn apply_purchase(
        &self,
        product_id: &str,
        movement: StockMovement,
    ) -> Result<InventoryStock> {
        let mut records = self.records.write().await;
        let index = match records.iter().position(|r| r.product_id == product_id) {
            Some(index) => index,
            None => {
                records.push(StockRecord {
                    product_id: product_id.to_string(),
                    name: format!("Producto {product_id}"),
                    quantity: 0,
                    unit_price: movement.unit_price,
                });
                records.len() - 1
            }
        };

        let record = &mut records[index];
        record.quantity = record.quantity.saturating_sub(movement.quantity);

        Ok(InventoryStock {
            producto_id: numeric_id(&record.product_id),
            new_quantity: record.quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_zero_is_empty() {
        tokio_test::block_on(async {
            let store = InMemoryProducts::with_demo_data();
            let result = store.list(0, 10, &SortSpec::default()).await.unwrap();

            assert!(result.items.is_empty());
            assert_eq!(result.total_items, 50);
        });
    }

    #[test]
    fn test_purchase_clamps_at_zero() {
        tokio_test::block_on(async {
            let store = InMemoryInventory::new();
            store.seed("9", 2, 500.0).await;

            let stock = store
                .apply_purchase(
                    "9",
                    StockMovement {
                        quantity: 5,
                        unit_price: 500.0,
                    },
                )
                .await
                .unwrap();

            assert_eq!(stock.new_quantity, 0);
            assert_eq!(stock.producto_id, 9);
        });
    }
}
