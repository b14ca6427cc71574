use crate::db::dbinventory::DbInventory;
use crate::handlers::{create_item, list_items, root};
use axum::{
    routing::{get, post},
    Router,
};

/// Create API routes
pub fn create_api_routes(db: DbInventory) -> Router {
    // Inventory endpoints live under the /inventory prefix
    let inventory_routes = Router::new().route("/inventory/", post(create_item).get(list_items));

    Router::<DbInventory>::new()
        .route("/", get(root))
        .merge(inventory_routes)
        .with_state(db)
}
