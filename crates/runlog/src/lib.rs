pub mod analytics;
pub mod errors;
pub mod fixtures;
pub mod format;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod store;
pub mod window;

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    handlers::{
        create_run, delete_all_runs, delete_run, get_analytics, get_run, health_check, list_runs,
        move_window, update_run,
    },
    store::SharedStore,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health_check,
        handlers::list_runs,
        handlers::create_run,
        handlers::get_run,
        handlers::update_run,
        handlers::delete_run,
        handlers::delete_all_runs,
        handlers::get_analytics,
        handlers::move_window,
    ),
    components(schemas(
        models::Run,
        models::RunEntry,
        models::NewRunRequest,
        models::UpdateRunRequest,
        handlers::DeleteAllResponse,
        handlers::MoveWindowRequest,
        analytics::ChartView,
        analytics::WindowInfo,
        metrics::Metric,
        window::Granularity,
        window::Direction,
    )),
    tags(
        (name = "runs", description = "Run history and record management"),
        (name = "analytics", description = "Windowed charts and statistics"),
        (name = "stats", description = "Service health")
    )
)]
pub struct ApiDoc;

pub fn create_router(store: SharedStore) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/health", get(health_check))
        // Run routes
        .route("/runs", get(list_runs).post(create_run).delete(delete_all_runs))
        .route(
            "/runs/{id}",
            get(get_run).patch(update_run).delete(delete_run),
        )
        // Analytics routes
        .route("/analytics", get(get_analytics))
        .route("/analytics/window/move", post(move_window))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(Extension(store))
        .layer(cors)
        .layer(CompressionLayer::new())
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
}

pub async fn run_server(store: SharedStore, port: u16) -> anyhow::Result<()> {
    let app = create_router(store);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    tracing::info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
