use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Error as SqlxError;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Item row as stored in the items table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ItemRow {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub expiry_date: Option<String>,
}

/// Item to persist, already validated at the HTTP boundary
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub quantity: i64,
    pub expiry_date: Option<String>,
}

/// Database connection pool for the inventory store
#[derive(Clone)]
pub struct DbInventory {
    pool: SqlitePool,
}

impl DbInventory {
    /// Create a new database connection pool
    ///
    /// # Arguments
    /// * `database_url` - SQLite connection string, e.g. `sqlite://kitchen.db`
    ///
    /// # Returns
    /// * `Result<Self, SqlxError>` - Database connection pool or error
    pub async fn connect(database_url: &str) -> Result<Self, SqlxError> {
        info!("Connecting to database...");

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await?;

        info!("Database connection pool created successfully");

        Ok(Self { pool })
    }

    /// Ensure the items table and its indexes exist
    ///
    /// Safe to run on every boot; all statements carry `IF NOT EXISTS` guards.
    pub async fn init_schema(&self) -> Result<(), SqlxError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                quantity INTEGER NOT NULL DEFAULT 1,
                expiry_date TEXT
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_items_name ON items (name);")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a new item and return the persisted row
    ///
    /// # Arguments
    /// * `item` - Validated item payload
    ///
    /// # Returns
    /// * `Result<ItemRow, SqlxError>` - The stored row including its assigned id
    pub async fn create_item(&self, item: NewItem) -> Result<ItemRow, SqlxError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            INSERT INTO items (name, quantity, expiry_date)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, quantity, expiry_date;
            "#,
        )
        .bind(&item.name)
        .bind(item.quantity)
        .bind(&item.expiry_date)
        .fetch_one(&self.pool)
        .await?;

        info!("Item '{}' saved with id {}", row.name, row.id);
        Ok(row)
    }

    /// Fetch every item currently in the table
    ///
    /// No filtering, pagination, or ordering is applied.
    pub async fn list_items(&self) -> Result<Vec<ItemRow>, SqlxError> {
        debug!("Listing all inventory items");

        let rows =
            sqlx::query_as::<_, ItemRow>("SELECT id, name, quantity, expiry_date FROM items;")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> (tempfile::TempDir, DbInventory) {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let url = format!("sqlite://{}", dir.path().join("test.db").display());
        let db = DbInventory::connect(&url).await.expect("failed to connect");
        db.init_schema().await.expect("failed to create schema");
        (dir, db)
    }

    fn new_item(name: &str, quantity: i64, expiry_date: Option<&str>) -> NewItem {
        NewItem {
            name: name.to_string(),
            quantity,
            expiry_date: expiry_date.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn create_assigns_fresh_ids_and_echoes_fields() {
        let (_dir, db) = test_db().await;

        let milk = db.create_item(new_item("Milk", 1, Some("2025-01-01"))).await.unwrap();
        let eggs = db.create_item(new_item("Eggs", 12, None)).await.unwrap();

        assert_eq!(milk.id, 1);
        assert_eq!(milk.name, "Milk");
        assert_eq!(milk.quantity, 1);
        assert_eq!(milk.expiry_date.as_deref(), Some("2025-01-01"));

        assert_eq!(eggs.id, 2);
        assert_eq!(eggs.expiry_date, None);
    }

    #[tokio::test]
    async fn list_returns_every_stored_row() {
        let (_dir, db) = test_db().await;

        db.create_item(new_item("Milk", 1, None)).await.unwrap();
        db.create_item(new_item("Eggs", 12, None)).await.unwrap();
        db.create_item(new_item("Butter", 2, Some("2025-03-01"))).await.unwrap();

        let rows = db.list_items().await.unwrap();
        assert_eq!(rows.len(), 3);

        let mut names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["Butter", "Eggs", "Milk"]);
    }

    #[tokio::test]
    async fn list_on_an_empty_store_is_empty() {
        let (_dir, db) = test_db().await;
        assert!(db.list_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn init_schema_can_run_repeatedly() {
        let (_dir, db) = test_db().await;

        db.init_schema().await.unwrap();
        db.init_schema().await.unwrap();

        let row = db.create_item(new_item("Flour", 1, None)).await.unwrap();
        assert_eq!(row.id, 1);
    }
}
