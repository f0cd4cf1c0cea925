use crate::config::QuizConfig;
use crate::handlers;
use crate::services::{MongoDb, QuestionStore, QuizRepository, QuizStore};
use axum::{middleware::from_fn, routing::get, Router};
use service_core::error::AppError;
use service_core::middleware::{metrics_middleware, request_id_middleware, REQUEST_ID_HEADER};
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// State for the question API.
#[derive(Clone)]
pub struct AppState {
    pub quizzes: Arc<dyn QuizStore>,
    pub questions: Arc<dyn QuestionStore>,
}

/// State for the readiness probe.
#[derive(Clone)]
pub struct HealthState {
    pub db: MongoDb,
}

/// Routes of the question API, without middleware.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/question", get(handlers::list_questions))
        .with_state(state)
}

pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .with_state(state)
}

pub struct Application {
    port: u16,
    server: Box<dyn Future<Output = std::io::Result<()>> + Send + Unpin>,
    db: MongoDb,
}

impl Application {
    pub async fn build(config: QuizConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database).await?;

        let repository = Arc::new(QuizRepository::new(&db));
        let state = AppState {
            quizzes: repository.clone(),
            questions: repository,
        };

        let app = api_router(state)
            .merge(health_router(HealthState { db: db.clone() }))
            .layer(from_fn(metrics_middleware))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");

                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                        quiz_id = tracing::field::Empty,
                    )
                }),
            )
            // Outermost, so the trace span sees the assigned id.
            .layer(from_fn(request_id_middleware));

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            db,
        })
    }

    pub fn db(&self) -> &MongoDb {
        &self.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
