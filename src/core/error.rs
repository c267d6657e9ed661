use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Product '{0}' not found")]
    ProductNotFound(String),

    #[error("No inventory for product '{0}'")]
    InventoryNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Malformed response: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
