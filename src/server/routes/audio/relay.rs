//! Speech recognition relay endpoint

use super::intake::read_relay_form;
use crate::core::relay::StageError;
use crate::server::middleware::request_id;
use crate::server::state::AppState;
use actix_multipart::Multipart;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::{error, info, warn};

/// Relay an uploaded audio file to the recognition service
///
/// Accepts multipart/form-data with `file`, `token`, and optional
/// `device-profile-id` / `client-id`. On success the recognition service's
/// body is returned untouched with status 200.
pub async fn relay_audio(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    let request_id = request_id(&req);
    info!(request_id = request_id.as_deref().unwrap_or("-"), "Audio relay request");

    let form = match read_relay_form(payload, state.max_upload_size()).await {
        Ok(form) => form,
        Err(e) => return Ok(failure(e, request_id)),
    };

    match state.relay.relay(form).await {
        Ok(response) => Ok(HttpResponse::Ok()
            .content_type(ContentType::json())
            .body(response.body)),
        Err(e) => Ok(failure(e, request_id)),
    }
}

fn failure(e: StageError, request_id: Option<String>) -> HttpResponse {
    if e.is_client_error() {
        warn!(code = e.code(), request_id = request_id.as_deref().unwrap_or("-"), "{}", e);
    } else {
        error!(code = e.code(), request_id = request_id.as_deref().unwrap_or("-"), "{}", e);
    }
    e.to_response(request_id)
}
