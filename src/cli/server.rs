//! HTTP server exposing the fixture endpoints

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, OriginalUri, Path, Query, State},
    http::{header::CONTENT_TYPE, HeaderMap, Uri},
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::{require_bearer, LoginRequest, LoginResponse, TokenIssuer};
use crate::collection::{generate, SyntheticItem, DEFAULT_LABEL};
use crate::config::FixtureConfig;
use crate::error::{Error, Result, ResultExt};
use crate::links::{LinkStyle, PageLinks, Presentation};
use crate::pagination::{more_page, numbered_page, offset_page, PageResult, Slice};
use crate::params::{CollectionQuery, DEFAULT_SIZE};

/// Number of goats in the root banner
pub const GOAT_COUNT: usize = 20;

/// Default size of `/discover/array`
const DISCOVER_ARRAY_SIZE: u64 = 3;

/// Default size of `/collect/array` and `/private/array`
const COLLECT_ARRAY_SIZE: u64 = 5;

/// App state shared across handlers
#[derive(Debug)]
pub struct AppState {
    /// Loaded configuration
    pub config: FixtureConfig,
    /// Signs and verifies session tokens
    pub issuer: Arc<TokenIssuer>,
}

impl AppState {
    /// Build state from configuration
    pub fn new(config: FixtureConfig) -> Self {
        let issuer = Arc::new(TokenIssuer::new(&config.auth));
        Self { config, issuer }
    }
}

/// Build the complete router with logging and CORS layers
pub fn app(config: FixtureConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router(Arc::new(AppState::new(config))).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    )
}

/// Build the endpoint router.
///
/// # Route Structure
///
/// ## Public
/// - `GET /` - Banner
/// - `GET|POST /echo` - Reflect headers, body and query
/// - `POST /login` - Issue a session token
/// - `GET /discover/object`, `GET /discover/array` - Discovery fixtures
/// - `GET /collect/object/:id`, `GET /collect/array` - Static collections
///
/// ## Pagination
/// - `GET /limit` - Offset mode
/// - `GET /page` - Page number mode
/// - `GET /linking` - Offset mode with `Link` headers
/// - `GET /response/body` - Links embedded in the body
/// - `GET /response/body/more` - `{next, more}` cursor
/// - `GET /response/headers` - `previousLink` / `nextLink` headers
///
/// ## Protected (bearer token)
/// - `GET /private/test`
/// - `GET /private/array`
pub fn router(state: Arc<AppState>) -> Router {
    let private = Router::new()
        .route("/private/test", get(private_test))
        .route("/private/array", get(private_array))
        .route_layer(middleware::from_fn_with_state(
            state.issuer.clone(),
            require_bearer,
        ));

    Router::new()
        .route("/", get(root))
        .route("/echo", get(echo).post(echo))
        .route("/login", post(login))
        .route("/discover/object", get(discover_object))
        .route("/discover/array", get(discover_array))
        .route("/collect/object/:id", get(collect_object))
        .route("/collect/array", get(collect_array))
        .route("/limit", get(limit))
        .route("/page", get(page))
        .route("/linking", get(linking))
        .route("/response/body", get(response_body))
        .route("/response/body/more", get(response_body_more))
        .route("/response/headers", get(response_headers))
        .merge(private)
        .fallback(not_found)
        .with_state(state)
}

/// Start the HTTP server on the configured address
pub async fn serve(config: FixtureConfig) -> Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .context(format!("Failed to bind to {addr}"))?;

    serve_on(listener, config).await
}

/// Serve on an already bound listener until Ctrl-C
pub async fn serve_on(listener: TcpListener, config: FixtureConfig) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("Starting HTTP server on http://{}", addr);

    axum::serve(listener, app(config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}

// ============================================================================
// Basic Endpoints
// ============================================================================

async fn root() -> String {
    format!("It's a goat parade! {}", "🐐".repeat(GOAT_COUNT))
}

/// Reflect the request back as `{headers, body, query}`
async fn echo(
    headers: HeaderMap,
    query: std::result::Result<Query<HashMap<String, String>>, QueryRejection>,
    body: Bytes,
) -> Result<Json<Value>> {
    let Query(query) = query.map_err(|e| Error::bad_request(e.body_text()))?;

    let mut header_map = Map::new();
    for name in headers.keys() {
        let values: Vec<String> = headers
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect();
        header_map.insert(name.as_str().to_string(), Value::String(values.join(", ")));
    }

    let body = if is_json(&headers) && !body.is_empty() {
        serde_json::from_slice(&body)?
    } else {
        json!({})
    };

    Ok(Json(json!({
        "headers": header_map,
        "body": body,
        "query": query,
    })))
}

async fn not_found(uri: Uri) -> Error {
    Error::not_found(uri.path())
}

/// Whether the request declares a JSON body
fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

// ============================================================================
// Authentication
// ============================================================================

/// Only JSON objects carry credentials; any other body logs in as nobody
async fn login(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<LoginResponse>> {
    let request = if is_json(&headers) && !body.is_empty() {
        match serde_json::from_slice::<Value>(&body)? {
            value @ Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => LoginRequest::default(),
        }
    } else {
        LoginRequest::default()
    };

    let issued = state.issuer.issue(
        request.username.as_deref().unwrap_or_default(),
        request.password.as_deref().unwrap_or_default(),
    )?;

    tracing::info!(subject = %issued.claims.sub, exp = issued.claims.exp, "login succeeded");
    Ok(Json(LoginResponse {
        token: issued.token,
    }))
}

async fn private_test() -> &'static str {
    "Success!"
}

async fn private_array(
    State(state): State<Arc<AppState>>,
    query: CollectionQuery,
) -> Result<Json<Vec<SyntheticItem<'static>>>> {
    whole_array(&state, &query, COLLECT_ARRAY_SIZE, DEFAULT_LABEL)
}

// ============================================================================
// Discovery & Static Collections
// ============================================================================

async fn discover_object() -> Json<Value> {
    Json(json!({ "id": 1 }))
}

async fn discover_array(
    State(state): State<Arc<AppState>>,
    query: CollectionQuery,
) -> Result<Json<Vec<SyntheticItem<'static>>>> {
    whole_array(&state, &query, DISCOVER_ARRAY_SIZE, "id")
}

/// Only plain digit ids resolve; anything else is a missing route
async fn collect_object(Path(id): Path<String>) -> Result<Json<Value>> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::not_found(format!("/collect/object/{id}")));
    }
    let id: u64 = id
        .parse()
        .map_err(|_| Error::not_found(format!("/collect/object/{id}")))?;

    Ok(Json(json!({ "item": id })))
}

async fn collect_array(
    State(state): State<Arc<AppState>>,
    query: CollectionQuery,
) -> Result<Json<Vec<SyntheticItem<'static>>>> {
    whole_array(&state, &query, COLLECT_ARRAY_SIZE, DEFAULT_LABEL)
}

/// Build an entire collection, bounded by `collection.max_size`
fn whole_array(
    state: &AppState,
    query: &CollectionQuery,
    default_size: u64,
    label: &'static str,
) -> Result<Json<Vec<SyntheticItem<'static>>>> {
    let size = query.capped_size_or(default_size, state.config.collection.max_size)?;
    Ok(Json(generate(size, label)))
}

// ============================================================================
// Pagination Endpoints
// ============================================================================

async fn limit(query: CollectionQuery) -> impl IntoResponse {
    Json(offset_page(
        query.size_or(DEFAULT_SIZE),
        query.offset(),
        query.limit(),
        DEFAULT_LABEL,
    ))
}

async fn page(query: CollectionQuery) -> impl IntoResponse {
    Json(numbered_page(
        query.size_or(DEFAULT_SIZE),
        query.page(),
        query.limit(),
        DEFAULT_LABEL,
    ))
}

async fn linking(
    OriginalUri(uri): OriginalUri,
    query: CollectionQuery,
) -> Result<impl IntoResponse> {
    let slice = offset_slice(&query);
    let headers = render_headers(&page_links(&uri, &slice), LinkStyle::LinkHeader)?;

    Ok((
        headers,
        Json(offset_page(slice.total, slice.offset, slice.limit, DEFAULT_LABEL)),
    ))
}

async fn response_body(
    OriginalUri(uri): OriginalUri,
    query: CollectionQuery,
) -> Result<impl IntoResponse> {
    let slice = offset_slice(&query);
    let pagination = match page_links(&uri, &slice).render(LinkStyle::Body)? {
        Presentation::Body(body) => body,
        Presentation::Headers(_) => return Err(Error::Other("expected body links".to_string())),
    };

    Ok(Json(PageResult {
        items: slice.items(DEFAULT_LABEL),
        pagination,
    }))
}

async fn response_body_more(query: CollectionQuery) -> impl IntoResponse {
    let slice = offset_slice(&query);
    Json(more_page(slice.total, slice.offset, slice.limit, DEFAULT_LABEL))
}

async fn response_headers(
    OriginalUri(uri): OriginalUri,
    query: CollectionQuery,
) -> Result<impl IntoResponse> {
    let slice = offset_slice(&query);
    let headers = render_headers(&page_links(&uri, &slice), LinkStyle::CustomHeaders)?;

    Ok((
        headers,
        Json(ItemsOnly {
            items: slice.items(DEFAULT_LABEL),
        }),
    ))
}

/// Body of `/response/headers`, where navigation lives in headers only
#[derive(Debug, Serialize)]
struct ItemsOnly<'a> {
    items: Vec<SyntheticItem<'a>>,
}

fn offset_slice(query: &CollectionQuery) -> Slice {
    Slice::new(query.size_or(DEFAULT_SIZE), query.offset(), query.limit())
}

fn page_links(uri: &Uri, slice: &Slice) -> PageLinks {
    let self_url = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_string(), ToString::to_string);
    PageLinks::new(uri.path(), self_url, slice)
}

fn render_headers(links: &PageLinks, style: LinkStyle) -> Result<HeaderMap> {
    match links.render(style)? {
        Presentation::Headers(headers) => Ok(headers),
        Presentation::Body(_) => Err(Error::Other(format!("{style:?} does not render headers"))),
    }
}
