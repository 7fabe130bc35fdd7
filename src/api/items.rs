//! Inventory item endpoints.
//!
//! Handlers validate the raw request, then delegate to the
//! [`InventoryService`](crate::services::InventoryService).

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

use super::{
    ApiError, ApiResponse, AppState, ItemDto, ItemPayload, PageQuery, PaginationDto,
    QuantityAddedDto, RecordedItemDto,
};
use crate::constants::messages::ITEM_NOT_FOUND_USE_CREATE;
use crate::services::InventoryError;
use crate::validation::{ItemInput, validate_json_item};

fn parse_payload(payload: Result<Json<ItemPayload>, JsonRejection>) -> Result<ItemInput, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::validation(e.body_text()))?;

    validate_json_item(payload.name.as_ref(), payload.quantity.as_ref())
        .map_err(ApiError::ValidationError)
}

/// Records an item, creating it or adding to its quantity.
///
/// # Endpoint
/// `POST /api/items`
pub async fn record_item(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<RecordedItemDto>>), ApiError> {
    let input = parse_payload(payload)?;

    let outcome = state
        .inventory()
        .record_item(&input.name, input.quantity)
        .await?;

    let message = if outcome.was_created {
        "Item recorded".to_string()
    } else {
        format!("Quantity added. Total now: {}", outcome.item.quantity)
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(RecordedItemDto::from(outcome)).with_message(message)),
    ))
}

/// Adds to the quantity of an item that already exists.
///
/// # Endpoint
/// `POST /api/items/add-quantity`
pub async fn add_quantity(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<Json<ApiResponse<QuantityAddedDto>>, ApiError> {
    let input = parse_payload(payload)?;

    let added = state
        .inventory()
        .add_quantity_to_existing(&input.name, input.quantity)
        .await
        .map_err(|e| match e {
            InventoryError::NotFound(_) => ApiError::not_found(ITEM_NOT_FOUND_USE_CREATE),
            other => other.into(),
        })?;

    Ok(Json(
        ApiResponse::success(QuantityAddedDto::from(added)).with_message("Quantity added"),
    ))
}

/// `GET /api/items/latest`
pub async fn latest_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<ItemDto>>>, ApiError> {
    let items = state.inventory().get_latest().await?;

    Ok(Json(ApiResponse::success(
        items.into_iter().map(ItemDto::from).collect(),
    )))
}

/// `GET /api/items?page=&limit=`
pub async fn list_items(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<Vec<ItemDto>>>, ApiError> {
    let (page, limit) = query.resolve(
        state.config.inventory.default_page_size,
        state.config.inventory.max_page_size,
    );

    let page = state.inventory().get_all_paged(page, limit).await?;
    let pagination = PaginationDto::from(&page);

    Ok(Json(
        ApiResponse::success(page.items.into_iter().map(ItemDto::from).collect())
            .with_pagination(pagination),
    ))
}

/// `GET /api/items/{name}`
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<ItemDto>>, ApiError> {
    find_item(&state, &name).await
}

/// `GET /api/items/add-quantity`
///
/// The static route shadows `{name}` for this one segment, so the lookup is
/// repeated here for an item literally called "add-quantity".
pub async fn get_add_quantity_item(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<ItemDto>>, ApiError> {
    find_item(&state, ADD_QUANTITY_SEGMENT).await
}

const ADD_QUANTITY_SEGMENT: &str = "add-quantity";

async fn find_item(state: &AppState, name: &str) -> Result<Json<ApiResponse<ItemDto>>, ApiError> {
    let item = state.inventory().get_by_name(name).await?;

    Ok(Json(ApiResponse::success(ItemDto::from(item))))
}
