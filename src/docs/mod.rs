use crate::models::*;
use utoipa::OpenApi;

/// Root liveness endpoint
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service greeting", body = RootResponse)
    )
)]
#[allow(dead_code)]
pub async fn root_doc() {}

/// Create a new inventory item
#[utoipa::path(
    post,
    path = "/inventory/",
    tag = "inventory",
    request_body = CreateItemRequest,
    responses(
        (status = 200, description = "Item created successfully", body = ItemResponse),
        (status = 422, description = "Missing or mistyped fields", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn create_item_doc() {}

/// List all inventory items
#[utoipa::path(
    get,
    path = "/inventory/",
    tag = "inventory",
    responses(
        (status = 200, description = "Every stored item", body = [ItemResponse])
    )
)]
#[allow(dead_code)]
pub async fn list_items_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        root_doc,
        create_item_doc,
        list_items_doc,
    ),
    components(
        schemas(RootResponse, CreateItemRequest, ItemResponse, ErrorResponse)
    ),
    tags(
        (name = "inventory", description = "Inventory endpoints")
    )
)]
pub struct ApiDoc;
