use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use inventory_core::health::healthz;
use inventory_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    barcode::lookup_barcode,
    health::readyz,
    item::{add_item, delete_item, move_item, search_items},
    session::{login, login_check, logout},
    user::{add_user, delete_user, list_users, reset_password},
};
use crate::state::AppState;

/// Build the HTTP router. When `frontend_path` is set, unmatched paths are
/// served from that directory, falling back to its `index.html`.
pub fn build_router(state: AppState, frontend_path: Option<&str>) -> Router {
    let router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Items
        .route("/api/item/info", get(search_items))
        .route("/api/item", post(add_item).delete(delete_item))
        .route("/api/item/move", post(move_item))
        .route("/api/lookup", get(lookup_barcode))
        // Users
        .route("/api/users", get(list_users))
        .route("/api/user/login", post(login))
        .route("/api/user/logincheck", get(login_check))
        .route("/api/user/logout", delete(logout))
        .route("/api/user/add", post(add_user))
        .route("/api/user/delete", delete(delete_user))
        .route("/api/user/resetPassword", get(reset_password))
        .with_state(state);

    let router = match frontend_path {
        Some(dir) => {
            let index = std::path::Path::new(dir).join("index.html");
            router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
}
