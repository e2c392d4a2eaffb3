use axum::{middleware, routing::get, Router};
use shared::jwt::{JwtConfig, JwtError};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, require_auth, require_owner,
    security_headers_middleware, trace_id,
};
use crate::routes::{
    announcements, auth, enquiries, gallery, health, not_found, slider, staff, syllabus,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub jwt: Arc<JwtConfig>,
}

impl AppState {
    pub fn new(config: Config, pool: PgPool) -> Result<Self, JwtError> {
        let jwt = JwtConfig::with_leeway(
            &config.jwt.secret,
            config.jwt.expiry_secs,
            config.jwt.leeway_secs,
        )?;

        Ok(Self {
            pool,
            config: Arc::new(config),
            jwt: Arc::new(jwt),
        })
    }
}

pub fn create_app(config: Config, pool: PgPool) -> Result<Router, JwtError> {
    let state = AppState::new(config, pool)?;
    let request_timeout = Duration::from_secs(state.config.server.request_timeout_secs);

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/metrics", get(metrics_handler))
        .merge(auth::public_routes())
        .merge(enquiries::public_routes())
        .merge(gallery::public_routes())
        .merge(announcements::public_routes())
        .merge(syllabus::public_routes())
        .merge(slider::public_routes());

    // Any active staff account
    let protected_routes = Router::new()
        .merge(auth::protected_routes())
        .merge(enquiries::protected_routes())
        .merge(gallery::protected_routes())
        .merge(announcements::protected_routes())
        .merge(syllabus::protected_routes())
        .merge(slider::protected_routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    // Owners only; auth is the outer layer so it runs first
    let owner_routes = staff::owner_routes()
        .route_layer(middleware::from_fn(require_owner))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let router = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(owner_routes)
        .fallback(not_found)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .with_state(state);

    Ok(router)
}
