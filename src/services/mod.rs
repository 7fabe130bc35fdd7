pub mod inventory_service;
pub mod inventory_service_impl;

pub use inventory_service::{
    InventoryError, InventoryService, ItemPage, QuantityAdded, RecordOutcome,
};
pub use inventory_service_impl::DefaultInventoryService;
