//! HTTP server implementation using Axum.

use crate::handlers::{
    handle_contact, handle_health, handle_method_not_allowed, handle_not_found, handle_preflight,
    handle_search, handle_search_options,
};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use salon_core::config::ServerConfig;
use salon_core::{LeadNotifier, RecordStore, SearchEngine};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// State shared by the search handlers.
pub struct SearchState {
    pub engine: SearchEngine,
}

impl SearchState {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self {
            engine: SearchEngine::new(store),
        }
    }
}

/// State shared by the contact handler.
pub struct ContactState {
    pub notifier: LeadNotifier,
}

const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// Headers attached to every response, including errors and preflights.
const RESPONSE_HEADERS: [(HeaderName, &str); 6] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (header::X_FRAME_OPTIONS, "DENY"),
    (header::X_XSS_PROTECTION, "1; mode=block"),
];

/// Wrap a router with the body limit, CORS, response headers and tracing.
fn with_common_layers(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let router = router.layer(
        ServiceBuilder::new()
            .layer(DefaultBodyLimit::max(ServerConfig::MAX_BODY_BYTES))
            .layer(cors),
    );

    // Outside the CORS layer so preflight answers carry the headers too.
    RESPONSE_HEADERS
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::overriding(
                name,
                HeaderValue::from_static(value),
            ))
        })
        .layer(TraceLayer::new_for_http())
}

/// Router for the inventory search service.
pub fn search_router(state: Arc<SearchState>) -> Router {
    let router = Router::new()
        .route("/health", get(handle_health))
        .route(
            "/search/options",
            get(handle_search_options)
                .options(handle_preflight)
                .fallback(handle_method_not_allowed),
        )
        .route(
            "/search",
            post(handle_search)
                .options(handle_preflight)
                .fallback(handle_method_not_allowed),
        )
        .fallback(handle_not_found)
        .with_state(state);

    with_common_layers(router)
}

/// Router for the lead form service.
pub fn contact_router(state: Arc<ContactState>) -> Router {
    let router = Router::new()
        .route("/health", get(handle_health))
        .route(
            "/contact",
            post(handle_contact)
                .options(handle_preflight)
                .fallback(handle_method_not_allowed),
        )
        .fallback(handle_not_found)
        .with_state(state);

    with_common_layers(router)
}

/// Start the inventory search server.
///
/// Returns the actual address the server is bound to (useful when port=0).
pub async fn start_search_server(
    store: Arc<RecordStore>,
    host: &str,
    port: u16,
) -> anyhow::Result<SocketAddr> {
    let state = Arc::new(SearchState::new(store));
    serve(search_router(state), host, port).await
}

/// Start the lead form server.
///
/// Returns the actual address the server is bound to (useful when port=0).
pub async fn start_contact_server(
    notifier: LeadNotifier,
    host: &str,
    port: u16,
) -> anyhow::Result<SocketAddr> {
    let state = Arc::new(ContactState { notifier });
    serve(contact_router(state), host, port).await
}

async fn serve(app: Router, host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    info!("Server listening on {}", actual_addr);

    // Spawn the server in the background
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
        }
    });

    Ok(actual_addr)
}
