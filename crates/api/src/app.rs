use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, security_headers_middleware, trace_id,
};
use crate::routes::{admin_work_orders, health, materials, technicians, ui, work_orders};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        pool,
        config: config.clone(),
    };

    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let api_routes = Router::new()
        .route(
            "/materials/",
            get(materials::list_materials).post(materials::create_material),
        )
        .route("/materials/:id", get(materials::get_material))
        .route(
            "/tecnicos/",
            get(technicians::list_technicians).post(technicians::create_technician),
        )
        .route(
            "/tecnicos/:id",
            get(technicians::get_technician)
                .put(technicians::update_technician)
                .delete(technicians::delete_technician),
        )
        .route(
            "/ots/",
            get(work_orders::list_work_orders).post(work_orders::create_work_order),
        );

    // Static segments are matched before the `:id` captures.
    let admin_routes = Router::new()
        .route("/admin/ots/pending", get(admin_work_orders::list_pending))
        .route("/admin/ots/closed", get(admin_work_orders::list_closed))
        .route("/admin/ots/summary", get(admin_work_orders::summary))
        .route(
            "/admin/ots/:id/close",
            post(admin_work_orders::close_work_order),
        )
        .route(
            "/admin/ots/:id",
            put(admin_work_orders::update_work_order),
        );

    let ui_routes = Router::new()
        .route("/", get(ui::home))
        .route("/ui/tecnicos", get(ui::technicians_page))
        .route("/ui/assign-ot", get(ui::assign_work_order_page))
        .route("/ui/admin_ots", get(ui::admin_work_orders_page))
        .route("/static/*path", get(ui::static_asset));

    let public_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::ready))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .merge(admin_routes)
        .merge(ui_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
