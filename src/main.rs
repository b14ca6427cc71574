use axum::Router;
use kitchen_inventory::config::Config;
use kitchen_inventory::db::dbinventory::DbInventory;
use kitchen_inventory::docs::ApiDoc;
use kitchen_inventory::routes::create_api_routes;
use std::panic;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Set panic hook for better error messages
    panic::set_hook(Box::new(|info| {
        eprintln!("PANIC: {info}");
    }));

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // Default to info level, but allow debug for our app
            "kitchen_inventory=debug,tower_http=debug,axum::rejection=trace,info".into()
        }))
        .init();

    info!("Starting server...");

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        warn!("Using default configuration");
        Config::default()
    });

    // Connect to the inventory store
    let db = match DbInventory::connect(&config.db_url).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database '{}': {}", config.db_url, e);
            std::process::exit(1);
        }
    };

    // Make sure the items table exists before taking traffic
    match db.init_schema().await {
        Ok(_) => info!("Database initialized successfully"),
        Err(e) => {
            error!("Failed to initialize database schema: {}", e);
            std::process::exit(1);
        }
    }

    // Create API routes
    let api_routes = create_api_routes(db);

    // Combine all routes
    let app_routes = Router::new()
        // Mount API routes
        .merge(api_routes)
        // Mount Swagger UI
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add tracing layer
        .layer(TraceLayer::new_for_http());

    // Start the HTTP/API server
    let listener = tokio::net::TcpListener::bind(config.server_address())
        .await
        .unwrap_or_else(|_| panic!("Failed to bind to {}", config.server_address()));

    info!("🚀 Server running on http://{}", config.server_address());
    info!("📚 Swagger UI available at http://{}/swagger", config.server_address());

    axum::serve(listener, app_routes)
        .await
        .expect("Server failed to start");
}
