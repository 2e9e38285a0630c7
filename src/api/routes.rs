use axum::http::{header, HeaderValue, Method};
use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, limit::RequestBodyLimitLayer,
    set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

#[cfg(not(test))]
use {
    axum::extract::ConnectInfo,
    std::net::IpAddr,
    std::sync::Arc,
    tower_governor::{governor::GovernorConfigBuilder, key_extractor::KeyExtractor, GovernorLayer},
    tracing::warn,
};

use crate::api::handlers::{self as api_handlers, AppState};
use crate::config::Settings;

/// Burst allowance for the rate limiter: twice the per-second rate, capped at `u32::MAX`
fn rate_limit_burst(per_second: u64) -> u32 {
    u32::try_from(per_second)
        .unwrap_or(u32::MAX)
        .saturating_mul(2)
}

/// Create the router with all endpoints
#[cfg_attr(test, allow(unused_variables))]
pub fn create_router(state: AppState, settings: &Settings) -> Router {
    #[cfg_attr(test, allow(unused_mut))]
    let mut api_routes = Router::new()
        .route(
            "/recipes",
            get(api_handlers::list_recipes).post(api_handlers::create_recipe),
        )
        .route("/recipes/search", post(api_handlers::search_recipes))
        .route(
            "/recipes/:id",
            get(api_handlers::get_recipe)
                .put(api_handlers::update_recipe)
                .delete(api_handlers::delete_recipe),
        )
        .route("/ingredients", get(api_handlers::list_ingredients))
        .with_state(state.clone());

    // Rate limiting is keyed by peer IP and falls back to 127.0.0.1 when the
    // connection info is unavailable. Behind a reverse proxy every request
    // shares that fallback key.
    #[cfg(not(test))]
    {
        #[derive(Clone, Copy, Debug)]
        struct FallbackIpKeyExtractor;

        impl KeyExtractor for FallbackIpKeyExtractor {
            type Key = IpAddr;

            fn extract<B>(
                &self,
                req: &axum::http::Request<B>,
            ) -> Result<Self::Key, tower_governor::GovernorError> {
                if let Some(ConnectInfo(addr)) = req
                    .extensions()
                    .get::<ConnectInfo<std::net::SocketAddr>>()
                {
                    return Ok(addr.ip());
                }

                Ok(IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)))
            }
        }

        let governor_conf = GovernorConfigBuilder::default()
            .key_extractor(FallbackIpKeyExtractor)
            .per_second(settings.server.api_rate_limit)
            .burst_size(rate_limit_burst(settings.server.api_rate_limit))
            .finish();

        match governor_conf {
            Some(config) => {
                api_routes = api_routes.layer(GovernorLayer {
                    config: Arc::new(config),
                });
            }
            None => warn!("Invalid rate limit configuration, API rate limiting disabled"),
        }
    }

    let api_routes = api_routes;

    let health_routes = Router::new()
        .route("/health", get(api_handlers::health_check))
        .route("/ready", get(api_handlers::readiness_check))
        .with_state(state);

    Router::new()
        .merge(health_routes)
        .nest("/api", api_routes)
        .layer(RequestBodyLimitLayer::new(
            settings.server.max_request_body_size,
        ))
        .layer(
            CorsLayer::new()
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .allow_origin(tower_http::cors::Any)
                .max_age(Duration::from_secs(3600)),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
