use std::sync::Arc;

use log::warn;

use super::FetchState;
use crate::model::Product;
use crate::store::{ProductStore, SortSpec};

/// State behind the paginated product listing screen.
pub struct ProductListView {
    store: Arc<dyn ProductStore>,
    pub products: Vec<Product>,
    pub state: FetchState,
    pub error_message: Option<String>,
    /// Current page, in the convention of the store this view was built
    /// with (1-based in-memory, 0-based remote).
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
}

impl ProductListView {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self {
            store,
            products: Vec::new(),
            state: FetchState::Idle,
            error_message: None,
            page: 1,
            page_size: 10,
            total_items: 0,
        }
    }

    /// Clear transient state and fetch the current page.
    pub async fn load(&mut self) {
        self.state = FetchState::Loading;
        self.error_message = None;

        match self
            .store
            .list(self.page, self.page_size, &SortSpec::default())
            .await
        {
            Ok(result) => {
                self.products = result.items;
                self.total_items = result.total_items;
                self.state = FetchState::Loaded;
            }
            Err(err) => {
                warn!("product listing failed: {err}");
                self.error_message = Some("Ocurrió un error al cargar los productos.".to_string());
                self.state = FetchState::Error;
            }
        }
    }

    /// Switch pages and re-fetch.
    pub async fn set_page(&mut self, page: u32) {
        self.page = page;
        self.load().await;
    }

    pub fn total_pages(&self) -> u64 {
        if self.total_items == 0 {
            1
        } else {
            self.total_items.div_ceil(self.page_size as u64)
        }
    }
}
