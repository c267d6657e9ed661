use serde::{Deserialize, Serialize};

/// Catalog product as served by the product microservice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion")]
    pub description: String,

    #[serde(rename = "precio")]
    pub price: f64,

    #[serde(rename = "imageBase64", skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,

    #[serde(rename = "availableQuantity", skip_serializing_if = "Option::is_none")]
    pub available_quantity: Option<u32>,
}

/// Create payload; the server assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion")]
    pub description: String,

    #[serde(rename = "precio")]
    pub price: f64,

    #[serde(rename = "disponible")]
    pub available: bool,
}

/// Partial update; `None` fields are left untouched and never serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "precio", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(rename = "disponible", skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,

    #[serde(rename = "imageBase64", skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
}
