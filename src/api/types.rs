use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::messages::VALIDATION_ERROR;
use crate::models::{Item, format_timestamp};
use crate::services::{ItemPage, QuantityAdded, RecordOutcome};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationDto>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            errors: None,
            pagination: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            errors: None,
            pagination: None,
        }
    }

    pub fn validation(errors: Vec<String>) -> Self {
        Self {
            errors: Some(errors),
            ..Self::error(VALIDATION_ERROR)
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_pagination(mut self, pagination: PaginationDto) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

/// Body of `POST /api/items` and `POST /api/items/add-quantity`.
///
/// Fields stay as raw JSON so the validator can report every problem,
/// including wrong types, in one response.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ItemPayload {
    pub name: Option<Value>,
    pub quantity: Option<Value>,
}

/// `?page=&limit=`. Kept as text so junk values fall back to defaults
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageQuery {
    /// Resolves to `(page, limit)`, both at least 1, `limit` capped at `max_limit`.
    #[must_use]
    pub fn resolve(&self, default_limit: u64, max_limit: u64) -> (u64, u64) {
        let parse = |raw: &Option<String>| {
            raw.as_deref()
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|n| *n >= 1)
        };

        let page = parse(&self.page).unwrap_or(1);
        let limit = parse(&self.limit).unwrap_or(default_limit).min(max_limit);
        (page, limit)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: i32,
    pub name: String,
    pub quantity: i64,
    pub last_recorded_at: String,
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            quantity: item.quantity,
            last_recorded_at: format_timestamp(item.last_recorded_at),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedItemDto {
    pub id: i32,
    pub name: String,
    pub quantity: i64,
    pub last_recorded_at: String,
    pub was_created: bool,
}

impl From<RecordOutcome> for RecordedItemDto {
    fn from(outcome: RecordOutcome) -> Self {
        let item = ItemDto::from(outcome.item);
        Self {
            id: item.id,
            name: item.name,
            quantity: item.quantity,
            last_recorded_at: item.last_recorded_at,
            was_created: outcome.was_created,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityAddedDto {
    pub id: i32,
    pub name: String,
    pub quantity_before: i64,
    pub quantity_added: i64,
    pub quantity_now: i64,
    pub last_recorded_at: String,
}

impl From<QuantityAdded> for QuantityAddedDto {
    fn from(added: QuantityAdded) -> Self {
        let item = ItemDto::from(added.item);
        Self {
            id: item.id,
            name: item.name,
            quantity_before: added.quantity_before,
            quantity_added: added.quantity_added,
            quantity_now: item.quantity,
            last_recorded_at: item.last_recorded_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub items_per_page: u64,
}

impl From<&ItemPage> for PaginationDto {
    fn from(page: &ItemPage) -> Self {
        Self {
            current_page: page.page,
            total_pages: page.total_pages,
            total_items: page.total_items,
            items_per_page: page.limit,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthLiveResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    pub uptime_seconds: u64,
}

#[derive(Debug, Serialize)]
pub struct HealthReadinessChecks {
    pub storage: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthReadyResponse {
    pub ready: bool,
    pub checks: HealthReadinessChecks,
}
