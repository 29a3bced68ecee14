use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::database::{ConceptRepository, DatabaseManager};
use crate::handlers;
use crate::services::ConceptService;

/// Shared state injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub database: DatabaseManager,
    pub concepts: ConceptService,
}

impl AppState {
    pub fn new(database: DatabaseManager) -> Self {
        let repository = ConceptRepository::new(database.pool().clone());
        Self {
            database,
            concepts: ConceptService::new(repository),
        }
    }
}

pub fn router(state: AppState, config: &AppConfig) -> Router {
    let mut app: Router = Router::new()
        // Public
        .route("/", get(handlers::public::root))
        .route("/health", get(handlers::public::health))
        .merge(concept_routes())
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .with_state(state);

    if config.security.enable_cors {
        app = app.layer(cors_layer(&config.security.cors_origins));
    }
    if config.api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }
    app
}

/// Open the database, bind the listener and serve until Ctrl-C
pub async fn serve(config: &AppConfig) -> anyhow::Result<()> {
    let database = DatabaseManager::connect(&config.database).await?;
    let app = router(AppState::new(database.clone()), config);

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Terminology Hub listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    database.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

fn concept_routes() -> Router<AppState> {
    use handlers::concept;

    Router::new()
        .route("/all-concepts", get(concept::concepts_list))
        .route("/concepts", post(concept::concepts_create))
        .route("/concept/:id", get(concept::concept_get))
        .route("/concept/:id/preferred-term", put(concept::concept_preferred_term_put))
        .route("/concept/:id/update-terms", put(concept::concept_terms_put))
        .route("/concept/:id/terms/:term", delete(concept::concept_term_delete))
        .route("/update-status/:name", put(concept::status_put))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}
