use actix_web::{web, HttpResponse, Responder};
use common::requests::{ContactRequest, SubmitResponse};
use log::error;

use crate::persistence::DocumentStore;

/// User-facing message for persistence failures; the cause is only logged.
const STORE_ERROR: &str = "Unable to save your message right now.";

/// Handler for `POST /api/submissions/contact`.
pub async fn process(
    store: web::Data<DocumentStore>,
    payload: web::Json<ContactRequest>,
) -> impl Responder {
    if let Err(message) = payload.validate() {
        return HttpResponse::BadRequest().json(SubmitResponse::failed(message));
    }
    match store_contact(&store, &payload) {
        Ok(_) => HttpResponse::Ok().json(SubmitResponse::ok()),
        Err(cause) => {
            error!("contact submission failed: {}", cause);
            HttpResponse::InternalServerError().json(SubmitResponse::failed(STORE_ERROR))
        }
    }
}

fn store_contact(store: &DocumentStore, payload: &ContactRequest) -> Result<String, String> {
    let document = serde_json::to_value(payload).map_err(|e| e.to_string())?;
    store.insert(ContactRequest::COLLECTION, &document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::submissions::configure_routes;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    fn temp_store() -> (tempfile::TempDir, DocumentStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contact.sqlite");
        let store = DocumentStore::open(path.to_str().unwrap()).unwrap();
        (dir, store)
    }

    fn valid_contact() -> ContactRequest {
        ContactRequest {
            name: "Alex Morgan".to_string(),
            email: "alex@agency.com".to_string(),
            company: "Morgan Realty".to_string(),
            message: "Interested in alerts for the north end.".to_string(),
        }
    }

    #[actix_web::test]
    async fn accepts_a_complete_contact_submission() {
        let (_dir, store) = temp_store();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/submissions/contact")
            .set_json(valid_contact())
            .to_request();
        let body: SubmitResponse = test::call_and_read_body_json(&app, req).await;
        assert!(body.success);
    }

    #[actix_web::test]
    async fn rejects_an_invalid_email_with_400() {
        let (_dir, store) = temp_store();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(configure_routes()),
        )
        .await;

        let mut contact = valid_contact();
        contact.email = "alex@agency".to_string();
        let req = test::TestRequest::post()
            .uri("/api/submissions/contact")
            .set_json(contact)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn rejects_an_overlong_message_with_400() {
        let (_dir, store) = temp_store();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(configure_routes()),
        )
        .await;

        let mut contact = valid_contact();
        contact.message = "x".repeat(1201);
        let req = test::TestRequest::post()
            .uri("/api/submissions/contact")
            .set_json(contact)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
