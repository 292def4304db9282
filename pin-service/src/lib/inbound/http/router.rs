use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::credentials::refresh;
use super::handlers::credentials::register;
use super::handlers::credentials::token;
use super::handlers::pins::create_pin;
use super::handlers::pins::delete_pin;
use super::handlers::pins::get_pin;
use super::handlers::pins::list_pins;
use super::handlers::pins::update_pin;
use super::middleware::authenticate as auth_middleware;
use crate::domain::pin::ports::PinServicePort;
use crate::domain::user::ports::CredentialServicePort;

#[derive(Clone)]
pub struct AppState {
    pub credential_service: Arc<dyn CredentialServicePort>,
    pub pin_service: Arc<dyn PinServicePort>,
    pub authenticator: Arc<Authenticator>,
}

/// Build the HTTP API, served under `/api/v1`.
///
/// Every body is wrapped in a status envelope rather than returned bare:
/// successes as `{"status_code": 200, "data": {...}}` and failures as
/// `{"status_code": 401, "data": {"message": "..."}}`. Clients read the
/// payload from `data`, e.g. `data.access_token` after `POST /token`.
///
/// | Method | Path | Auth | `data` on success |
/// |---|---|---|---|
/// | POST | `/register` | - | 201 `{id, username}` |
/// | POST | `/token` | - | 200 `{access_token, refresh_token}` |
/// | POST | `/refresh` | bearer refresh token | 200 `{access_token}` |
/// | GET | `/pins` | - | 200 `{pins, count}` |
/// | GET | `/pins/:pin_id` | - | 200 pin |
/// | POST | `/pins` | bearer access token | 201 pin |
/// | PUT | `/pins/:pin_id` | bearer access token | 200 pin |
/// | DELETE | `/pins/:pin_id` | bearer access token | 200 `{id}` |
pub fn create_router(
    credential_service: Arc<dyn CredentialServicePort>,
    pin_service: Arc<dyn PinServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        credential_service,
        pin_service,
        authenticator,
    };

    // Mutating pin operations sit behind the access-token gate; reads stay public.
    let require_access_token = middleware::from_fn_with_state(state.clone(), auth_middleware);

    let credential_routes = Router::new()
        .route("/register", post(register))
        .route("/token", post(token))
        .route("/refresh", post(refresh));

    let pin_routes = Router::new()
        .route(
            "/pins",
            get(list_pins).merge(post(create_pin).route_layer(require_access_token.clone())),
        )
        .route(
            "/pins/:pin_id",
            get(get_pin)
                .merge(put(update_pin).route_layer(require_access_token.clone()))
                .merge(delete(delete_pin).route_layer(require_access_token)),
        );

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .nest("/api/v1", credential_routes.merge(pin_routes))
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
