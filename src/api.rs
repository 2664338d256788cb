//! REST API Server for the storefront chat assistant
//!
//! Exposes the classifier via HTTP endpoints for the chat UI.
//! Stateless: the client owns the transcript.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::catalog::KeywordBucket;
use crate::chat::QuickReply;
use crate::classifier::IntentClassifier;
use crate::models::{ClassificationResult, Intent};
use crate::normalizer::is_space;

/// =============================
/// Request Models
/// =============================

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub intent: Intent,
    pub reply: String,
    pub matched_keyword: Option<String>,
    pub show_quick_reply: bool,
    pub quick_reply: QuickReply,
}

impl From<ClassificationResult> for ChatReply {
    fn from(result: ClassificationResult) -> Self {
        Self {
            intent: result.intent,
            reply: result.reply,
            matched_keyword: result.matched_keyword,
            show_quick_reply: true,
            quick_reply: QuickReply::start_order(),
        }
    }
}

/// =============================
/// Response Wrapper
/// =============================

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub data: Option<serde_json::Value>,
    pub error: Option<String>,
    pub timestamp: String,
}

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> Self {
        Self {
            success: true,
            data: serde_json::to_value(data).ok(),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// =============================
/// API State
/// =============================

#[derive(Clone)]
pub struct ApiState {
    pub classifier: Arc<IntentClassifier>,
    pub buckets: Arc<Vec<KeywordBucket>>,
}

/// =============================
/// Health Endpoint
/// =============================

async fn health(State(state): State<ApiState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "catalog_fingerprint": state.classifier.catalog_fingerprint(),
        "buckets": state.classifier.bucket_count(),
    }))
}

/// =============================
/// Classification Endpoints
/// =============================

async fn classify_handler(
    State(state): State<ApiState>,
    Json(req): Json<ClassifyRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    let result = state.classifier.classify(&req.message);
    info!("Classified request as {}", result.intent);

    (StatusCode::OK, Json(ApiResponse::success(result)))
}

async fn chat_handler(
    State(state): State<ApiState>,
    Json(req): Json<ChatRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    let last_user_message_index = req.messages.iter().rposition(|m| m.role == "user");

    let Some(last_user_message_index) = last_user_message_index else {
        warn!("Chat request without a user message");
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("No user message found".into())),
        );
    };
    let user_msg = &req.messages[last_user_message_index];

    // Only the current user turn is classified; earlier turns carry no context
    let result = state.classifier.classify(user_msg.content.trim_matches(is_space));
    info!(
        "chat_handler => intent={} matched_keyword={:?}",
        result.intent, result.matched_keyword
    );

    (StatusCode::OK, Json(ApiResponse::success(ChatReply::from(result))))
}

async fn intents_handler(State(state): State<ApiState>) -> Json<ApiResponse> {
    Json(ApiResponse::success(serde_json::json!({
        "buckets": state.buckets.as_slice(),
    })))
}

/// =============================
/// Router
/// =============================

pub fn create_router(classifier: Arc<IntentClassifier>, buckets: Vec<KeywordBucket>) -> Router {
    let state = ApiState {
        classifier,
        buckets: Arc::new(buckets),
    };

    Router::new()
        .route("/health", get(health))
        .route("/api/classify", post(classify_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/intents", get(intents_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(
    router: Router,
    port: u16,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("API Server listening on http://0.0.0.0:{}", port);
    info!("Local: http://127.0.0.1:{}", port);

    axum::serve(listener, router).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::replies::reply_for;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use tower::ServiceExt;

    fn router() -> Router {
        let catalog = Catalog::builtin();
        create_router(
            Arc::new(IntentClassifier::new(&catalog)),
            catalog.buckets().to_vec(),
        )
    }

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["buckets"], 28);
        assert_eq!(body["catalog_fingerprint"], Catalog::builtin().fingerprint());
    }

    #[tokio::test]
    async fn test_classify() {
        let (status, body) =
            send(post_json("/api/classify", serde_json::json!({ "message": "ซื้อ1แถม1" }))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["intent"], "PROMO_B1G1");
        assert_eq!(body["data"]["matched_keyword"], "ซื้อ 1 แถม 1");
        assert_eq!(body["data"]["reply"], reply_for(Intent::PromoB1g1));
    }

    #[tokio::test]
    async fn test_classify_unknown() {
        let (status, body) =
            send(post_json("/api/classify", serde_json::json!({ "message": "" }))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["intent"], "UNKNOWN");
        assert!(body["data"]["matched_keyword"].is_null());
    }

    #[tokio::test]
    async fn test_chat_uses_last_user_message() {
        let request = post_json(
            "/api/chat",
            serde_json::json!({
                "messages": [
                    { "role": "user", "content": "hello" },
                    { "role": "bot", "content": "สวัสดีค่ะ" },
                    { "role": "user", "content": "ขอบคุณค่ะ" },
                    { "role": "bot", "content": "..." }
                ]
            }),
        );
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["intent"], "THANKS");
        assert_eq!(body["data"]["show_quick_reply"], true);
        assert_eq!(body["data"]["quick_reply"]["label"], "สั่งเลย!");
        assert_eq!(body["data"]["quick_reply"]["action"], "start_order");
    }

    #[tokio::test]
    async fn test_chat_trims_bom_padding() {
        let request = post_json(
            "/api/chat",
            serde_json::json!({ "messages": [{ "role": "user", "content": "\u{FEFF} b1g1 \u{FEFF}" }] }),
        );
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["intent"], "PROMO_B1G1");
        assert_eq!(body["data"]["matched_keyword"], "b1g1");
    }

    #[tokio::test]
    async fn test_chat_without_user_message() {
        let request = post_json(
            "/api/chat",
            serde_json::json!({ "messages": [{ "role": "bot", "content": "hi" }] }),
        );
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "No user message found");
    }

    #[tokio::test]
    async fn test_intents_in_priority_order() {
        let request = Request::builder().uri("/api/intents").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        let buckets = body["data"]["buckets"].as_array().unwrap();
        assert_eq!(buckets.len(), 28);
        assert_eq!(buckets[0]["intent"], "PROMO_B1G1");
        assert_eq!(buckets[2]["intent"], "PROMO");
        assert_eq!(buckets[0]["phrases"][0], "ซื้อ 1 แถม 1");
    }
}
