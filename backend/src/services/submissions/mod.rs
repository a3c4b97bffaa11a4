//! # Submission Service Module
//!
//! Aggregates the lead-generation endpoints under `/api/submissions`. Each
//! handler validates the payload shape, files the document in the store, and
//! answers with the uniform `SubmitResponse` body.
//!
//! ## Registered routes
//!
//! *   **`POST /contact`**:
//!     - **Handler**: `contact::process`
//!     - **Description**: Estate Beacon's contact form: name, email, company,
//!       and a message of at most 1200 characters. Invalid input answers 400;
//!       a persistence failure answers 500 with a generic message (the cause
//!       is logged, not returned).
//!
//! *   **`POST /lead`**:
//!     - **Handler**: `lead::process`
//!     - **Description**: The generic waitlist/demo/email-capture shape: an
//!       email plus an optional form-specific questionnaire, a source tag,
//!       and the client timestamp. Only the email is validated; the document
//!       is filed under a collection chosen by the questionnaire kind.

mod contact;
mod lead;

use actix_web::web::{post, scope};
use actix_web::Scope;

/// The base path for all submission endpoints.
const API_PATH: &str = "/api/submissions";

/// Configures and returns the Actix `Scope` for the submission routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/contact", post().to(contact::process))
        .route("/lead", post().to(lead::process))
}
