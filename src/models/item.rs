use crate::db::dbinventory::ItemRow;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating an inventory item
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub expiry_date: Option<String>,
}

/// Item representation returned by the API, including its assigned id
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub expiry_date: Option<String>,
}

impl From<ItemRow> for ItemResponse {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            quantity: row.quantity,
            expiry_date: row.expiry_date,
        }
    }
}

fn default_quantity() -> i64 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_defaults_to_one_when_omitted() {
        let request: CreateItemRequest = serde_json::from_str(r#"{"name": "Milk"}"#).unwrap();
        assert_eq!(request.name, "Milk");
        assert_eq!(request.quantity, 1);
        assert_eq!(request.expiry_date, None);
    }

    #[test]
    fn explicit_fields_are_kept() {
        let request: CreateItemRequest =
            serde_json::from_str(r#"{"name": "Eggs", "quantity": 12, "expiry_date": "2025-02-01"}"#)
                .unwrap();
        assert_eq!(request.quantity, 12);
        assert_eq!(request.expiry_date.as_deref(), Some("2025-02-01"));
    }

    #[test]
    fn missing_name_fails_to_deserialize() {
        let result = serde_json::from_str::<CreateItemRequest>(r#"{"quantity": 2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn response_carries_the_row_fields() {
        let row = ItemRow {
            id: 7,
            name: "Butter".to_string(),
            quantity: 2,
            expiry_date: Some("2025-03-01".to_string()),
        };

        let response = ItemResponse::from(row);
        assert_eq!(response.id, 7);
        assert_eq!(response.name, "Butter");
        assert_eq!(response.quantity, 2);
        assert_eq!(response.expiry_date.as_deref(), Some("2025-03-01"));
    }
}
