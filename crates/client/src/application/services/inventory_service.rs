//! Inventory Service - items held by the selected character
//!
//! Inventory sorting is a backend concern (`?sort_by=&order=`), unlike
//! quest filtering which is purely client-side.

use nocturne_domain::{InventoryItem, ItemId};
use nocturne_protocol::{routes, CreateItemRequest, UpdateItemRequest};

use crate::application::{Api, ServiceError};

/// Server-side sort key for `GET /inventory`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSortKey {
    Name,
    ItemType,
    Quantity,
}

impl ItemSortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemSortKey::Name => "name",
            ItemSortKey::ItemType => "item_type",
            ItemSortKey::Quantity => "quantity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

#[derive(Clone)]
pub struct InventoryService {
    api: Api,
}

impl InventoryService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// `GET /inventory?sort_by&order`
    pub async fn list(
        &self,
        sort_by: Option<ItemSortKey>,
        order: Option<SortOrder>,
    ) -> Result<Vec<InventoryItem>, ServiceError> {
        let path = routes::inventory(
            sort_by.map(ItemSortKey::as_str),
            order.map(SortOrder::as_str),
        );
        self.api.get(&path).await
    }

    /// `GET /inventory/types` - the type labels items can carry
    pub async fn item_types(&self) -> Result<Vec<String>, ServiceError> {
        self.api.get(&routes::inventory_types()).await
    }

    /// `POST /inventory`
    pub async fn create(&self, request: &CreateItemRequest) -> Result<InventoryItem, ServiceError> {
        self.api.post(&routes::inventory(None, None), request).await
    }

    /// `PUT /inventory/{id}`
    pub async fn update(
        &self,
        id: ItemId,
        request: &UpdateItemRequest,
    ) -> Result<InventoryItem, ServiceError> {
        self.api.put(&routes::inventory_item(id), request).await
    }

    /// `DELETE /inventory/{id}`
    pub async fn delete(&self, id: ItemId) -> Result<(), ServiceError> {
        self.api.delete(&routes::inventory_item(id)).await
    }

    /// `POST /inventory/{id}/consume` - the backend applies the effect and
    /// decrements or removes the item; callers re-fetch the list.
    pub async fn consume(&self, id: ItemId) -> Result<(), ServiceError> {
        self.api.post_empty_unit(&routes::inventory_consume(id)).await
    }
}
