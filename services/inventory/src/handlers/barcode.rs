use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::domain::types::BarcodeProduct;
use crate::error::InventoryServiceError;
use crate::extract::{CurrentUser, QueryParams};
use crate::state::AppState;
use crate::usecase::barcode::LookupBarcodeUseCase;

#[derive(Deserialize)]
pub struct LookupQuery {
    #[serde(default)]
    pub barcode: String,
}

#[derive(Serialize)]
pub struct BarcodeResponse {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(rename = "pictureURL")]
    pub picture_url: String,
}

impl From<BarcodeProduct> for BarcodeResponse {
    fn from(p: BarcodeProduct) -> Self {
        Self {
            id: p.id,
            name: p.name,
            category: p.category,
            picture_url: p.picture_url,
        }
    }
}

// ── GET /api/lookup ──────────────────────────────────────────────────────────

pub async fn lookup_barcode(
    _user: CurrentUser,
    State(state): State<AppState>,
    QueryParams(query): QueryParams<LookupQuery>,
) -> Result<Json<BarcodeResponse>, InventoryServiceError> {
    let usecase = LookupBarcodeUseCase {
        client: state.barcode_client(),
    };
    let product = usecase.execute(&query.barcode).await?;
    Ok(Json(product.into()))
}
