use std::sync::Arc;

use log::warn;

use super::FetchState;
use crate::model::{InventoryProduct, InventoryStock, Product, StockMovement};
use crate::store::{InventoryStore, ProductStore};

/// State behind the product detail / purchase screen.
pub struct ProductDetailView {
    products: Arc<dyn ProductStore>,
    inventory_store: Arc<dyn InventoryStore>,
    pub product_id: String,
    pub product: Option<Product>,
    pub inventory_detail: Option<InventoryProduct>,
    pub inventory: Option<InventoryStock>,
    pub state: FetchState,
    pub is_updating: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub quantity: u32,
}

impl ProductDetailView {
    pub fn new(
        products: Arc<dyn ProductStore>,
        inventory: Arc<dyn InventoryStore>,
        product_id: impl Into<String>,
    ) -> Self {
        Self {
            products,
            inventory_store: inventory,
            product_id: product_id.into(),
            product: None,
            inventory_detail: None,
            inventory: None,
            state: FetchState::Idle,
            is_updating: false,
            error_message: None,
            success_message: None,
            quantity: 1,
        }
    }

    /// Fetch the inventory detail and the catalog record for the product.
    ///
    /// The catalog fetch is best-effort: its failure leaves the screen
    /// usable and is only logged.
    pub async fn load(&mut self) {
        self.state = FetchState::Loading;
        self.error_message = None;
        self.success_message = None;

        match self.inventory_store.get(&self.product_id).await {
            Ok(detail) => {
                self.inventory = Some(InventoryStock {
                    producto_id: detail.producto_id,
                    new_quantity: detail.available_quantity,
                });
                self.inventory_detail = Some(detail);
                self.state = FetchState::Loaded;
            }
            Err(err) => {
                warn!(
                    "inventory detail fetch failed for '{}': {err}",
                    self.product_id
                );
                self.error_message =
                    Some("No se pudo cargar la información del producto.".to_string());
                self.state = FetchState::Error;
            }
        }

        match self.products.get(&self.product_id).await {
            Ok(product) => self.product = Some(product),
            Err(err) => warn!(
                "catalog record fetch failed for '{}': {err}",
                self.product_id
            ),
        }
    }

    /// Validate and apply a purchase of `self.quantity` units.
    ///
    /// The guard is client-side only: a zero quantity is ignored, and one
    /// above the last known stock sets a message without touching the
    /// network. The data source clamps the real stock, never this view.
    pub async fn purchase(&mut self) {
        let Some(detail) = self.inventory_detail.clone() else {
            return;
        };
        if self.quantity == 0 {
            return;
        }

        if self.quantity > detail.available_quantity {
            self.error_message = Some("La cantidad supera el stock disponible.".to_string());
            self.success_message = None;
            return;
        }

        self.is_updating = true;
        self.error_message = None;
        self.success_message = None;

        let movement = StockMovement {
            quantity: self.quantity,
            unit_price: detail.unit_price,
        };

        match self
            .inventory_store
            .apply_purchase(&self.product_id, movement)
            .await
        {
            Ok(stock) => {
                self.inventory = Some(stock);
                self.is_updating = false;
                self.success_message = Some("Compra realizada y stock actualizado.".to_string());
            }
            Err(err) => {
                warn!("purchase failed for '{}': {err}", self.product_id);
                self.is_updating = false;
                self.error_message = Some("No se pudo completar la compra.".to_string());
            }
        }
    }

    /// Stock the view currently believes is on the shelf.
    pub fn known_stock(&self) -> u32 {
        self.inventory
            .as_ref()
            .map(|s| s.new_quantity)
            .or_else(|| self.inventory_detail.as_ref().map(|d| d.available_quantity))
            .unwrap_or(0)
    }
}
