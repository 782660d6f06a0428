use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::domain::types::Item;
use crate::error::InventoryServiceError;
use crate::extract::{CurrentUser, JsonBody, QueryParams};
use crate::handlers::Success;
use crate::state::AppState;
use crate::usecase::item::{
    AddItemInput, AddItemUseCase, DeleteItemUseCase, MoveItemUseCase, SearchItemsUseCase,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(rename = "pictureURL")]
    pub picture_url: String,
    pub details: String,
    pub location: String,
    pub last_performed_by: i32,
    pub quantity: i32,
    pub status: &'static str,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            category: item.category,
            picture_url: item.picture_url,
            details: item.details,
            location: item.location,
            last_performed_by: item.last_performed_by,
            quantity: item.quantity,
            status: item.status.as_str(),
        }
    }
}

// ── GET /api/item/info ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

pub async fn search_items(
    _user: CurrentUser,
    State(state): State<AppState>,
    QueryParams(query): QueryParams<SearchQuery>,
) -> Result<Json<Vec<ItemResponse>>, InventoryServiceError> {
    let usecase = SearchItemsUseCase {
        repo: state.item_repo(),
    };
    let items = usecase.execute(&query.q).await?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

// ── POST /api/item ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AddItemQuery {
    pub overwrite: Option<String>,
}

#[derive(Deserialize)]
pub struct AddItemRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, rename = "pictureURL")]
    pub picture_url: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub quantity: i32,
}

pub async fn add_item(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    QueryParams(query): QueryParams<AddItemQuery>,
    JsonBody(body): JsonBody<AddItemRequest>,
) -> Result<Json<Success>, InventoryServiceError> {
    let usecase = AddItemUseCase {
        repo: state.item_repo(),
    };
    usecase
        .execute(AddItemInput {
            id: body.id,
            name: body.name,
            category: body.category,
            picture_url: body.picture_url,
            details: body.details,
            location: body.location,
            quantity: body.quantity,
            overwrite: query.overwrite.as_deref() == Some("1"),
            performed_by: Some(user.id),
        })
        .await?;
    Ok(Json(Success::ok()))
}

// ── POST /api/item/move ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct MoveItemRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub direction: String,
}

pub async fn move_item(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    JsonBody(body): JsonBody<MoveItemRequest>,
) -> Result<Json<Success>, InventoryServiceError> {
    if body.id.is_empty() || body.direction.is_empty() {
        return Err(InventoryServiceError::missing(
            "missing id or direction in the body",
        ));
    }
    let usecase = MoveItemUseCase {
        repo: state.item_repo(),
    };
    usecase.execute(&body.id, &body.direction, user.id).await?;
    Ok(Json(Success::ok()))
}

// ── DELETE /api/item ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct DeleteItemQuery {
    #[serde(default)]
    pub id: String,
}

pub async fn delete_item(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    QueryParams(query): QueryParams<DeleteItemQuery>,
) -> Result<Json<Success>, InventoryServiceError> {
    if query.id.is_empty() {
        return Err(InventoryServiceError::missing("id"));
    }
    let usecase = DeleteItemUseCase {
        repo: state.item_repo(),
    };
    usecase.execute(&query.id, user.id).await?;
    Ok(Json(Success::ok()))
}
