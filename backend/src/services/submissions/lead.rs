use actix_web::{web, HttpResponse, Responder};
use common::requests::{LeadRequest, SubmitResponse};
use log::error;

use crate::persistence::DocumentStore;

const STORE_ERROR: &str = "Unable to save your submission right now.";

/// Handler for `POST /api/submissions/lead`. Covers the waitlist, demo
/// request, and email capture forms; the questionnaire kind picks the
/// collection.
pub async fn process(
    store: web::Data<DocumentStore>,
    payload: web::Json<LeadRequest>,
) -> impl Responder {
    if let Err(message) = payload.validate() {
        return HttpResponse::BadRequest().json(SubmitResponse::failed(message));
    }
    match store_lead(&store, &payload) {
        Ok(_) => HttpResponse::Ok().json(SubmitResponse::ok()),
        Err(cause) => {
            error!("lead submission failed: {}", cause);
            HttpResponse::InternalServerError().json(SubmitResponse::failed(STORE_ERROR))
        }
    }
}

fn store_lead(store: &DocumentStore, payload: &LeadRequest) -> Result<String, String> {
    let document = serde_json::to_value(payload).map_err(|e| e.to_string())?;
    store.insert(payload.collection(), &document)
}
