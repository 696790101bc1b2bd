use crate::agent::CoachAgent;
use crate::cli::Args;
use crate::error::{ CoachError, CoachResult };
use crate::models::api::{ ChatRequest, ErrorResponse, QuestionsRequest, ResumeRequest };
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    routing::post,
    Router,
    Json,
    extract::{ State, rejection::JsonRejection },
    response::{ IntoResponse, Response },
    http::StatusCode,
};
use serde::Serialize;
use tower_http::cors::{ Any, CorsLayer };
use log::{ info, error };

const CHAT_FAILURE: &str = "Failed to generate response";
const QUESTIONS_FAILURE: &str = "Failed to generate interview questions";
const RESUME_FAILURE: &str = "Failed to generate resume content";

#[derive(Clone)]
struct AppState {
    agent: Arc<CoachAgent>,
}

pub fn router(agent: CoachAgent) -> Router {
    let app_state = AppState {
        agent: Arc::new(agent),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/api/questions", post(questions_handler))
        .route("/api/resume", post(resume_handler))
        .layer(cors)
        .with_state(app_state)
}

pub async fn start_http_server(
    addr: SocketAddr,
    agent: CoachAgent,
    args: &Args
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let app = router(agent);

    if args.enable_tls {
        let (cert_path, key_path) = match (&args.tls_cert_path, &args.tls_key_path) {
            (Some(cert), Some(key)) => (cert, key),
            _ => {
                error!("Both --tls-cert-path and --tls-key-path must be provided to enable TLS.");
                return Err("TLS enabled without cert/key".into());
            }
        };
        info!(
            "TLS enabled. Loading certificate from '{}' and key from '{}'",
            cert_path,
            key_path
        );
        let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(
            cert_path,
            key_path
        ).await?;

        info!("Starting HTTPS API server on: https://{}", addr);
        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service())
            .await?;
    } else {
        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            error!("Failed to bind HTTP server to {}: {}. Try a different port.", addr, e);
            e
        })?;
        info!("Starting HTTP API server on: http://{}", addr);
        axum::serve(listener, app.into_make_service()).await?;
    }

    Ok(())
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> CoachResult<T> {
    payload
        .map(|Json(req)| req)
        .map_err(|rejection| CoachError::MalformedRequest(rejection.body_text()))
}

fn reply<T: Serialize>(endpoint: &str, failure: &str, result: CoachResult<T>) -> Response {
    match result {
        Ok(out) => Json(out).into_response(),
        Err(e) => {
            error!("Error in {} API: {}", endpoint, e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse {
                error: failure.to_string(),
            })).into_response()
        }
    }
}

async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>
) -> Response {
    let result = match body(payload) {
        Ok(req) => state.agent.chat(req.mode, &req.messages).await,
        Err(e) => Err(e),
    };
    reply("chat", CHAT_FAILURE, result)
}

async fn questions_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuestionsRequest>, JsonRejection>
) -> Response {
    let result = match body(payload) {
        Ok(req) => state.agent.questions(&req).await,
        Err(e) => Err(e),
    };
    reply("questions", QUESTIONS_FAILURE, result)
}

async fn resume_handler(
    State(state): State<AppState>,
    payload: Result<Json<ResumeRequest>, JsonRejection>
) -> Response {
    let result = match body(payload) {
        Ok(req) => state.agent.resume(&req).await,
        Err(e) => Err(e),
    };
    reply("resume", RESUME_FAILURE, result)
}
