use actix_web::{get, web, HttpResponse, Responder};
use serde_json::Value;
use uuid::Uuid;

use super::{error::ApiError, AppState};
use crate::models::GenerationRequest;

#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy"
    }))
}

/// `POST /api/generate`. The body is read raw so that an unknown `type`
/// yields 400 while malformed JSON falls into the 500 envelope. Payload
/// errors (oversize, broken stream) use the same 500 envelope.
pub async fn generate(
    state: web::Data<AppState>,
    body: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, ApiError> {
    let request_id = Uuid::new_v4();

    let body = body.map_err(|e| {
        log::error!("❌ [req:{}] Request body rejected: {}", request_id, e);
        ApiError::Generation(e.to_string())
    })?;

    let value: Value = serde_json::from_slice(&body).map_err(|e| {
        log::error!("❌ [req:{}] Malformed request body: {}", request_id, e);
        ApiError::Generation(e.to_string())
    })?;

    if value.is_null() {
        log::error!("❌ [req:{}] Request body is null", request_id);
        return Err(ApiError::Generation(
            "Cannot read property 'type' of a null body".to_string(),
        ));
    }

    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .map(str::to_owned);

    let request = match kind.as_deref() {
        Some("caption") | Some("hook") => serde_json::from_value::<GenerationRequest>(value)
            .map_err(|e| {
                log::error!("❌ [req:{}] Invalid request fields: {}", request_id, e);
                ApiError::Generation(e.to_string())
            })?,
        other => {
            log::warn!(
                "⚠️  [req:{}] Rejected request type: {:?}",
                request_id,
                other
            );
            return Err(ApiError::InvalidRequestType);
        }
    };

    log::info!(
        "📝 [req:{}] Generating {} for topic {:?}",
        request_id,
        request.kind(),
        request.topic()
    );

    let result = state.generator.generate(&request).await.map_err(|e| {
        log::error!("❌ [req:{}] Generation failed: {}", request_id, e);
        ApiError::Generation(e.to_string())
    })?;

    log::info!("✅ [req:{}] {} generated", request_id, request.kind());
    Ok(HttpResponse::Ok().json(result))
}

pub async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check).service(
        web::resource("/api/generate")
            .route(web::post().to(generate))
            .default_service(web::route().to(method_not_allowed)),
    );
}
