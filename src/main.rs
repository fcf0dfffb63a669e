use axum::http::{HeaderValue, Method};
use fantasy_cricket::{
    build_router,
    config::{AppConfig, DEFAULT_LOG_FILTER},
    event::spawn_event_logger,
    AppState, EventBus,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "Invalid configuration");
            std::process::exit(1);
        }
    };

    info!(frontend_url = %config.frontend_url, "Starting fantasy cricket server");

    let event_bus = EventBus::new(config.event_capacity);
    spawn_event_logger(&event_bus);

    let app_state = AppState::in_memory(event_bus);

    let cors = match config.frontend_url.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new().allow_origin(origin),
        Err(_) => {
            warn!(frontend_url = %config.frontend_url, "Unusable CORS origin, allowing any");
            CorsLayer::new().allow_origin(Any)
        }
    }
    .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
    .allow_headers(Any);

    let app = build_router(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(%err, bind_addr = %config.bind_addr, "Failed to bind");
            std::process::exit(1);
        }
    };
    info!("Server running on http://{}", config.bind_addr);

    if let Err(err) = axum::serve(listener, app).await {
        error!(%err, "Server stopped with an error");
    }
}
