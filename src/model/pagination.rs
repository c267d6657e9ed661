use serde::{Deserialize, Serialize};

/// One page of results in the flat shape the views consume.
///
/// Invariant: `items.len() <= page_size`. The meaning of `page` follows the
/// data source that produced the result; see the `list` docs on each store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,

    #[serde(rename = "totalItems")]
    pub total_items: u64,

    pub page: u32,

    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

/// Nested page envelope produced by the product service. Consumed only by
/// the remote store, which flattens it into a [`PaginatedResult`].
#[derive(Debug, Clone, Deserialize)]
pub struct PageRoot<T> {
    pub content: Vec<T>,

    pub pageable: Pageable,

    #[serde(rename = "totalElements")]
    pub total_elements: u64,

    #[serde(rename = "totalPages", default)]
    pub total_pages: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pageable {
    #[serde(rename = "pageNumber")]
    pub page_number: u32,

    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ApiEnvelope, Product};

    #[test]
    fn test_page_root_deserializes_server_shape() {
        let body = r#"{
            "data": {
                "content": [
                    {"id": "1", "nombre": "Producto 1", "descripcion": "d", "precio": 10000.0}
                ],
                "pageable": {"pageNumber": 3, "pageSize": 10, "offset": 30, "paged": true},
                "last": false,
                "totalElements": 41,
                "totalPages": 5,
                "first": false,
                "size": 10,
                "number": 3,
                "empty": false
            },
            "message": "ok",
            "jsonapi": {"version": "1.0"}
        }"#;

        let envelope: ApiEnvelope<PageRoot<Product>> = serde_json::from_str(body).unwrap();
        let root = envelope.into_data();

        assert_eq!(root.content.len(), 1);
        assert_eq!(root.pageable.page_number, 3);
        assert_eq!(root.pageable.page_size, 10);
        assert_eq!(root.total_elements, 41);
        assert_eq!(root.total_pages, 5);
        assert!(root.content[0].available_quantity.is_none());
    }
}
