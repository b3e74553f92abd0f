use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sabdakosh_engine::{
    engine::decode_query_param, render, DictEngine, DictEngineError, Lexicon, SearchQuery,
    SearchResponse, DEFAULT_RESULT_LIMIT,
};

#[derive(Clone)]
struct AppState {
    engine: Arc<DictEngine>,
    result_limit: usize,
}

/// Query string parameters understood by both search endpoints
#[derive(Debug, Default)]
struct SearchParams {
    query: String,
    limit: Option<usize>,
    raw: bool,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    entries: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sabdakosh_server=debug,sabdakosh_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let dict_path = std::env::var("DICT_PATH").unwrap_or_else(|_| "sabdakosh.json".to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);
    let result_limit = std::env::var("RESULT_LIMIT")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(DEFAULT_RESULT_LIMIT);

    tracing::info!("🚀 Starting Sabdakosh Server");
    tracing::info!("📦 Dictionary: {}", dict_path);
    tracing::info!("🔌 Port: {}", port);

    // Build the lexicon once; searches share it read-only from here on.
    let engine = match DictEngine::from_path(&dict_path) {
        Ok(engine) => engine,
        Err(e @ DictEngineError::EmptyLexicon) => {
            tracing::warn!("⚠️ {}; serving empty results", e);
            DictEngine::new(Lexicon::empty())
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!("✅ Lexicon loaded: {} entries", engine.lexicon().len());

    let state = AppState {
        engine: Arc::new(engine),
        result_limit,
    };

    // Build router
    let app = Router::new()
        .route("/", get(home_handler))
        .route("/search", get(search_handler))
        .route("/api/search", get(api_search_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("📖 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn home_handler() -> Html<&'static str> {
    Html(render::HOME_PAGE)
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: sabdakosh_engine::VERSION.to_string(),
        entries: state.engine.lexicon().len(),
    })
}

/// HTML fragment endpoint the search page polls while the user types
async fn search_handler(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Html<String>, AppError> {
    let response = run_search(&state, raw.as_deref())?;
    Ok(Html(render::results_fragment(&response)))
}

/// JSON endpoint for programmatic clients
async fn api_search_handler(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Json<SearchResponse>, AppError> {
    let response = run_search(&state, raw.as_deref())?;
    Ok(Json(response))
}

fn run_search(state: &AppState, raw: Option<&str>) -> Result<SearchResponse, AppError> {
    let params = parse_params(raw)?;

    let query = SearchQuery {
        query: params.query,
        limit: params.limit.unwrap_or(state.result_limit),
        romanize: !params.raw,
    };

    let response = state.engine.search(query)?;

    tracing::info!("🔍 {}", response.display());

    Ok(response)
}

/// Decode the raw query string by hand so undecodable percent escapes
/// surface as the malformed-input error instead of a silent drop.
fn parse_params(raw: Option<&str>) -> Result<SearchParams, DictEngineError> {
    let mut params = SearchParams::default();
    let Some(raw) = raw else {
        return Ok(params);
    };

    for pair in raw.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "searchquery" => params.query = decode_query_param(value)?,
            "limit" => params.limit = decode_query_param(value)?.parse().ok(),
            "raw" => {
                let value = decode_query_param(value)?;
                params.raw = matches!(value.as_str(), "1" | "true");
            }
            _ => {}
        }
    }

    Ok(params)
}

// Error handling
struct AppError(DictEngineError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            e @ DictEngineError::MalformedInput(_) => (StatusCode::BAD_REQUEST, e.to_string()),
            e => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        tracing::error!("❌ Error: {} - {}", status, message);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<DictEngineError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
