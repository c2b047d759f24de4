//! Hotel Server - rooms and facilities booking
//!
//! A Rust REST API server for hotel management.

use anyhow::Context;
use axum::{
    routing::{get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use hotel_server::{
    api,
    config::AppConfig,
    init_logging,
    repository::Repository,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let _log_guard = init_logging(&config.logging);

    tracing::info!("Starting Hotel Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Booking timezone: {}", config.booking.timezone);

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations completed");

    let repository = Repository::new(pool);
    let services = Services::new(repository, &config);

    services
        .auth
        .ensure_admin()
        .await
        .context("Failed to create administrator account")?;

    let addr = SocketAddr::new(
        config.server.host.parse().context("Invalid host address")?,
        config.server.port,
    );

    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    let app = create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/guest/register", post(api::auth::register_guest))
        .route("/auth/guest/login", post(api::auth::guest_login))
        .route("/auth/admin/login", post(api::auth::admin_login))
        .route("/auth/me", get(api::auth::me))
        // Rooms
        .route("/rooms", get(api::rooms::list_rooms).post(api::rooms::create_room))
        .route(
            "/rooms/:id",
            get(api::rooms::get_room)
                .put(api::rooms::update_room)
                .delete(api::rooms::delete_room),
        )
        // Facilities
        .route(
            "/facilities",
            get(api::facilities::list_facilities).post(api::facilities::create_facility),
        )
        .route(
            "/facilities/:id",
            get(api::facilities::get_facility)
                .put(api::facilities::update_facility)
                .delete(api::facilities::delete_facility),
        )
        // Bookings
        .route(
            "/bookings",
            get(api::bookings::list_bookings).post(api::bookings::create_booking),
        )
        .route(
            "/facility-bookings",
            get(api::facility_bookings::list_facility_bookings)
                .post(api::facility_bookings::create_facility_booking),
        )
        // Guests
        .route("/guests/:id", get(api::guests::get_guest))
        .route(
            "/guests/:id/membership",
            put(api::guests::upsert_membership).delete(api::guests::revoke_membership),
        )
        // Statistics
        .route("/stats", get(api::stats::get_stats))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(CompressionLayer::new()),
        )
}
