//! Submission Gateway: exactly one network call per invocation, outcome
//! normalized to a binary result.
//!
//! Any non-2xx response, `success:false` body, or transport error collapses
//! into the single opaque [`GatewayError`]. The underlying detail is logged
//! to the console here and never travels further; the caller only needs
//! "it failed". No retry, no queue, no state between calls.

use common::requests::{SubmissionRequest, SubmitResponse};
use gloo_console::error;
use gloo_net::http::Request;

/// Opaque submission failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayError;

pub async fn submit(request: &SubmissionRequest) -> Result<(), GatewayError> {
    let built = match Request::post(request.endpoint()).json(request) {
        Ok(built) => built,
        Err(err) => {
            error!(format!("submission payload rejected: {}", err));
            return Err(GatewayError);
        }
    };
    match built.send().await {
        Ok(response) if response.ok() => match response.json::<SubmitResponse>().await {
            Ok(body) if body.success => Ok(()),
            Ok(body) => {
                error!(format!("submission rejected: {:?}", body.error));
                Err(GatewayError)
            }
            Err(err) => {
                error!(format!("submission response unreadable: {}", err));
                Err(GatewayError)
            }
        },
        Ok(response) => {
            error!(format!("submission failed with status {}", response.status()));
            Err(GatewayError)
        }
        Err(err) => {
            error!(format!("submission transport error: {}", err));
            Err(GatewayError)
        }
    }
}
