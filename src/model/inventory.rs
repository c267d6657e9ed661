use serde::{Deserialize, Serialize};

/// Inventory detail for one product, as served by the inventory service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryProduct {
    #[serde(rename = "productoId")]
    pub producto_id: i64,

    #[serde(rename = "nombreProducto")]
    pub name: String,

    #[serde(rename = "cantidadDisponible")]
    pub available_quantity: u32,

    #[serde(rename = "precioUnitario")]
    pub unit_price: f64,
}

/// Stock level after an inventory movement. Supersedes the prior value for
/// that product; no history is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryStock {
    #[serde(rename = "productoId")]
    pub producto_id: i64,

    #[serde(rename = "cantidadNueva")]
    pub new_quantity: u32,
}

/// Lightweight per-product stock snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryStatus {
    #[serde(rename = "productId")]
    pub product_id: String,

    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

/// Movement payload for the inbound (ingreso) and outbound (salida) routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovement {
    #[serde(rename = "cantidad")]
    pub quantity: u32,

    #[serde(rename = "precioUnitario")]
    pub unit_price: f64,
}
