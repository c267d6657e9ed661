use std::sync::Arc;

use log::warn;

use super::FetchState;
use crate::core::{Result, StoreError};
use crate::model::{InventoryStatus, NewProduct, Product, ProductPatch, StockMovement};
use crate::store::{InventoryStore, ProductStore, SortSpec};

/// Form state for the admin create/edit modal.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub quantity: Option<u32>,
}

/// Combined result of an admin save: the product half always, plus, for
/// edits, the recorded outcome of the follow-up inventory adjustment.
/// The inventory half never fails the save; it is carried here so the
/// caller can see which half succeeded.
#[derive(Debug)]
pub struct SaveOutcome {
    pub product: Product,
    pub inventory: Option<Result<InventoryStatus>>,
}

/// State behind the admin CRUD screen.
pub struct ProductAdminView {
    products_store: Arc<dyn ProductStore>,
    inventory_store: Arc<dyn InventoryStore>,
    pub products: Vec<Product>,
    pub form: ProductForm,
    pub is_creating: bool,
    pub state: FetchState,
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
}

impl ProductAdminView {
    pub fn new(products: Arc<dyn ProductStore>, inventory: Arc<dyn InventoryStore>) -> Self {
        Self {
            products_store: products,
            inventory_store: inventory,
            products: Vec::new(),
            form: ProductForm::default(),
            is_creating: true,
            state: FetchState::Idle,
            page: 1,
            page_size: 5,
            total_items: 0,
        }
    }

    /// Fetch the current admin page.
    pub async fn load(&mut self) {
        self.state = FetchState::Loading;

        match self
            .products_store
            .list(self.page, self.page_size, &SortSpec::default())
            .await
        {
            Ok(result) => {
                self.products = result.items;
                self.total_items = result.total_items;
                self.state = FetchState::Loaded;
            }
            Err(err) => {
                warn!("admin product listing failed: {err}");
                self.state = FetchState::Error;
            }
        }
    }

    pub fn open_create(&mut self) {
        self.is_creating = true;
        self.form = ProductForm::default();
    }

    pub fn open_edit(&mut self, product: &Product) {
        self.is_creating = false;
        self.form = ProductForm {
            id: Some(product.id.clone()),
            name: product.name.clone(),
            description: product.description.clone(),
            price: Some(product.price),
            quantity: product.available_quantity,
        };
    }

    /// Persist the form.
    ///
    /// Validation failures return `StoreError::Validation` without calling
    /// any service. Edits run as an explicit two-step save: the product
    /// update must succeed; the follow-up inventory ingreso is attempted
    /// afterwards and its result is carried in the outcome instead of
    /// being dropped.
    pub async fn save(&mut self) -> Result<SaveOutcome> {
        if self.form.name.trim().is_empty() {
            return Err(StoreError::Validation("el nombre es obligatorio".to_string()));
        }
        let Some(price) = self.form.price else {
            return Err(StoreError::Validation("el precio es obligatorio".to_string()));
        };

        let outcome = if self.is_creating {
            let product = self
                .products_store
                .create(NewProduct {
                    name: self.form.name.clone(),
                    description: self.form.description.clone(),
                    price,
                    available: true,
                })
                .await?;

            SaveOutcome {
                product,
                inventory: None,
            }
        } else {
            let Some(id) = self.form.id.clone() else {
                return Err(StoreError::Validation(
                    "no hay producto en edición".to_string(),
                ));
            };

            let patch = ProductPatch {
                name: Some(self.form.name.clone()),
                description: Some(self.form.description.clone()),
                price: Some(price),
                available: Some(true),
                image_base64: None,
            };
            let product = self.products_store.update(&id, patch).await?;

            let movement = StockMovement {
                quantity: self.form.quantity.unwrap_or(0),
                unit_price: price,
            };
            let inventory = self.inventory_store.register_incoming(&id, movement).await;
            if let Err(err) = &inventory {
                warn!("inventory adjustment failed for '{id}': {err}");
            }

            SaveOutcome {
                product,
                inventory: Some(inventory),
            }
        };

        self.form = ProductForm::default();
        self.is_creating = true;
        self.load().await;

        Ok(outcome)
    }

    /// Delete a product and re-fetch the page. Deleting twice is harmless.
    pub async fn delete(&mut self, id: &str) -> Result<()> {
        self.products_store.delete(id).await?;
        self.load().await;
        Ok(())
    }

    pub fn total_pages(&self) -> u64 {
        if self.total_items == 0 {
            1
        } else {
            self.total_items.div_ceil(self.page_size as u64)
        }
    }
}
