//! Best-effort analytics emission.
//!
//! Every call site is a non-propagating boundary: failures are swallowed and
//! logged, so analytics can never affect form state.

use gloo_console::warn;
use gloo_net::http::Request;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;

const EVENTS_ENDPOINT: &str = "/api/events";

/// Fires an event and forgets about it.
pub fn emit(event: &str, properties: Value) {
    let body = serde_json::json!({ "event": event, "properties": properties });
    spawn_local(async move {
        let request = match Request::post(EVENTS_ENDPOINT).json(&body) {
            Ok(request) => request,
            Err(err) => {
                warn!(format!("analytics event dropped: {}", err));
                return;
            }
        };
        if let Err(err) = request.send().await {
            warn!(format!("analytics event dropped: {}", err));
        }
    });
}
