use crate::{
    db::dbinventory::{DbInventory, NewItem},
    models::{CreateItemRequest, ErrorResponse, ItemResponse},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::error;

/// Create a new inventory item
pub async fn create_item(
    State(db): State<DbInventory>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemResponse>), (StatusCode, Json<ErrorResponse>)> {
    // Surface missing or mistyped fields as a structured error response
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            error!("Invalid item payload: {}", rejection.body_text());
            let status = rejection.status();
            return Err((
                status,
                Json(ErrorResponse::new(status, rejection.body_text())),
            ));
        }
    };

    let item = NewItem {
        name: request.name,
        quantity: request.quantity,
        expiry_date: request.expiry_date,
    };

    // Persist the item and echo the stored row back, including its id
    match db.create_item(item).await {
        Ok(row) => Ok((StatusCode::OK, Json(ItemResponse::from(row)))),
        Err(e) => {
            error!("Failed to create item: {}", e);
            let status = StatusCode::INTERNAL_SERVER_ERROR;
            Err((
                status,
                Json(ErrorResponse::new(
                    status,
                    format!("Failed to create item: {}", e),
                )),
            ))
        }
    }
}

/// List every item currently in the inventory
pub async fn list_items(
    State(db): State<DbInventory>,
) -> Result<(StatusCode, Json<Vec<ItemResponse>>), (StatusCode, Json<ErrorResponse>)> {
    match db.list_items().await {
        Ok(rows) => {
            let items: Vec<ItemResponse> = rows.into_iter().map(ItemResponse::from).collect();
            Ok((StatusCode::OK, Json(items)))
        }
        Err(e) => {
            error!("Failed to list items: {}", e);
            let status = StatusCode::INTERNAL_SERVER_ERROR;
            Err((
                status,
                Json(ErrorResponse::new(
                    status,
                    format!("Failed to list items: {}", e),
                )),
            ))
        }
    }
}
