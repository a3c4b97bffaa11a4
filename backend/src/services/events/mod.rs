//! Best-effort analytics sink.
//!
//! The frontend emits fire-and-forget events here. The sink only logs them;
//! it never fails the caller, so a broken analytics path can never affect a
//! form submission.

use actix_web::web::{post, scope};
use actix_web::{web, HttpResponse, Responder, Scope};
use log::info;

const API_PATH: &str = "/api/events";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(process))
}

/// Accepts any JSON event body and answers 204.
pub async fn process(payload: web::Json<serde_json::Value>) -> impl Responder {
    info!("analytics event: {}", payload.into_inner());
    HttpResponse::NoContent().finish()
}
