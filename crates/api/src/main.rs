use api::build_app;
use config::{ApiConfig, LoggingConfig};

#[tokio::main]
async fn main() {
    // Load configuration first to get logging settings
    let config = ApiConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        eprintln!("Application cannot start without a valid configuration.");
        std::process::exit(1);
    });

    init_tracing(&config.logging);

    let app = build_app(&config);

    let bind_address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .unwrap_or_else(|e| {
            tracing::error!(address = %bind_address, error = %e, "Failed to bind listener");
            std::process::exit(1);
        });

    let public_url = config.server.advertised_url();
    tracing::info!(address = %bind_address, "Server started successfully");
    tracing::info!("API Endpoints:");
    tracing::info!("  - GET {}api/avatar (SVG avatar)", public_url);
    tracing::info!("  - GET {}api-docs (Swagger UI)", public_url);
    tracing::info!("  - GET {}api-docs/openapi.json (OpenAPI document)", public_url);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server terminated");
        std::process::exit(1);
    }
}

fn init_tracing(logging_config: &LoggingConfig) {
    let filter = logging_config.filter_directive();

    // Initialize tracing based on the format specified in config
    match logging_config.format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .init();
        }
        "compact" => {
            tracing_subscriber::fmt()
                .compact()
                .with_env_filter(filter)
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(filter)
                .init();
        }
    }
}
