use actix_web::http::StatusCode;
use actix_web::web::{Bytes, Data};
use actix_web::{HttpResponse, Responder, mime};

use crate::consts;
use crate::errors::RelayError;
use crate::models::request::AskRequest;
use crate::models::response::{AskResponse, ErrorResponse};
use crate::service::RelayService;

pub async fn liveness() -> impl Responder {
    HttpResponse::Ok()
        .content_type(mime::TEXT_PLAIN_UTF_8)
        .body(consts::LIVENESS_MESSAGE)
}

pub async fn ask_gemini(service: Data<RelayService>, body: Bytes) -> impl Responder {
    let request = match AskRequest::from_body(&body) {
        Ok(request) => request,
        Err(e) => return error_response(RelayError::ValidationError(e.to_string())),
    };

    match service.ask(&request.question).await {
        Ok(answer) => HttpResponse::Ok().json(AskResponse { answer }),
        Err(e) => {
            log::error!("Gemini API error: {}", e);
            error_response(e)
        }
    }
}

pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "route not found".to_string(),
    })
}

fn error_response(error: RelayError) -> HttpResponse {
    let status = match error {
        RelayError::ValidationError(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
    })
}
