//! Update function for the generic multi-step form component.
//!
//! Follows an Elm-style architecture: receives the current component state,
//! the `Context`, and a `Msg`, mutates the state, and returns whether the
//! view should re-render. All wizard decisions are delegated to the
//! `FormSession`; this layer's own work is the async gateway call, the
//! success-URL push, and best-effort analytics.

use common::forms::session::{StepOutcome, SubmissionDraft};
use serde_json::json;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::{analytics, gateway};

use super::helpers::{push_success_url, show_toast};
use super::messages::Msg;
use super::state::MultiStepFormComponent;

pub fn update(
    component: &mut MultiStepFormComponent,
    ctx: &Context<MultiStepFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Edit { name, value } => {
            component.session.edit_field(&name, &value);
            true
        }
        Msg::Next => {
            let completed_step = component.session.current_step();
            match component.session.go_next() {
                StepOutcome::Advanced(_) => {
                    emit_step_completed(component, completed_step);
                    true
                }
                StepOutcome::SubmitStarted(draft) => {
                    emit_step_completed(component, completed_step);
                    start_submission(ctx, draft);
                    true
                }
                StepOutcome::Rejected(_) => true,
                StepOutcome::Ignored => false,
            }
        }
        Msg::Back => {
            component.session.go_back();
            true
        }
        Msg::Retry => {
            if let Some(draft) = component.session.submit() {
                start_submission(ctx, draft);
            }
            true
        }
        Msg::Resolved(result) => {
            let succeeded = result.is_ok();
            component.session.finish_submission(result.map_err(|_| ()));
            if succeeded {
                let definition = component.session.definition();
                push_success_url(&definition.success_path);
                analytics::emit(
                    "form_submitted",
                    json!({
                        "formId": definition.id,
                        "sessionId": component.session_id,
                    }),
                );
                show_toast("Thanks! Your submission was received.");
            }
            true
        }
        Msg::Reset => {
            component.session.reset();
            true
        }
    }
}

/// Sends the draft to the gateway and reports the outcome back to the
/// component. The session is already `Submitting`, so nothing else can fire
/// while this is in flight.
fn start_submission(ctx: &Context<MultiStepFormComponent>, draft: SubmissionDraft) {
    let request = draft.into_request(js_sys::Date::now() as u64);
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = gateway::submit(&request).await;
        link.send_message(Msg::Resolved(result));
    });
}

fn emit_step_completed(component: &MultiStepFormComponent, step: usize) {
    analytics::emit(
        "form_step_completed",
        json!({
            "formId": component.session.definition().id,
            "sessionId": component.session_id,
            "step": step,
        }),
    );
}
