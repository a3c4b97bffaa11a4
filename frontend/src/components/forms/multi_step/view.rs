//! View rendering for the generic multi-step form component.
//!
//! Rendering is entirely data-driven: the current step's fields come from
//! the `FormDefinition` and are mapped to controls by widget kind. The
//! session status picks the frame: the active step while `Editing`, a
//! blocking notice while `Submitting`, a retry panel after a failure, and a
//! success panel once the submission lands.

use common::forms::definition::{FieldDefinition, StepDefinition, Widget};
use common::forms::session::{FormSession, SubmissionStatus};
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::MultiStepFormComponent;

pub fn view(component: &MultiStepFormComponent, ctx: &Context<MultiStepFormComponent>) -> Html {
    let link = ctx.link();
    let session = &component.session;

    let body = match session.status() {
        SubmissionStatus::Succeeded => build_success_panel(link),
        SubmissionStatus::Submitting => build_submitting_panel(),
        SubmissionStatus::Editing | SubmissionStatus::Failed => {
            match session.definition().step(session.current_step()) {
                Some(step) => build_step_panel(component, link, step),
                // Past the last step: the previous attempt failed (or was
                // edited back to Editing); offer retry and navigation.
                None => build_failure_panel(component, link),
            }
        }
    };

    html! {
        <div class="multi-step-form">
            { body }
        </div>
    }
}

fn build_step_panel(
    component: &MultiStepFormComponent,
    link: &Scope<MultiStepFormComponent>,
    step: &StepDefinition,
) -> Html {
    let session = &component.session;
    let definition = session.definition();
    let is_last = session.current_step() + 1 == definition.total_steps();

    html! {
        <>
            <div class="step-header">
                <h3>{ &step.title }</h3>
                <span class="step-count">
                    { format!("Step {} of {}", session.current_step() + 1, definition.total_steps()) }
                </span>
            </div>
            <div class="step-fields">
                { for step.fields.iter().map(|field| render_field(session, link, field)) }
            </div>
            { build_error_banner(session) }
            <div class="step-controls">
                {
                    if session.current_step() > 0 {
                        html! {
                            <button class="btn-back" onclick={link.callback(|_| Msg::Back)}>
                                {"Back"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
                <button class="btn-next" onclick={link.callback(|_| Msg::Next)}>
                    { if is_last { "Submit" } else { "Continue" } }
                </button>
            </div>
        </>
    }
}

fn render_field(
    session: &FormSession,
    link: &Scope<MultiStepFormComponent>,
    field: &FieldDefinition,
) -> Html {
    let value = session.field(&field.name).to_string();

    let control = match &field.widget {
        Widget::Text | Widget::Email => {
            let name = field.name.clone();
            let oninput = link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::Edit {
                    name: name.clone(),
                    value: input.value(),
                }
            });
            let kind = if matches!(field.widget, Widget::Email) { "email" } else { "text" };
            html! {
                <input
                    type={kind}
                    value={value}
                    placeholder={field.placeholder.clone()}
                    {oninput}
                />
            }
        }
        Widget::TextArea => {
            let name = field.name.clone();
            let oninput = link.callback(move |e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                Msg::Edit {
                    name: name.clone(),
                    value: input.value(),
                }
            });
            html! {
                <textarea
                    rows="6"
                    value={value}
                    placeholder={field.placeholder.clone()}
                    {oninput}
                />
            }
        }
        Widget::Select(options) => {
            let name = field.name.clone();
            let onchange = link.callback(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                Msg::Edit {
                    name: name.clone(),
                    value: select.value(),
                }
            });
            html! {
                <select {onchange}>
                    <option value="" selected={value.is_empty()} disabled={true}>{"Select…"}</option>
                    { for options.iter().map(|option| html! {
                        <option value={option.clone()} selected={*option == value}>{ option }</option>
                    }) }
                </select>
            }
        }
    };

    html! {
        <label class="form-field">
            <span class="field-label">{ &field.label }</span>
            { control }
        </label>
    }
}

fn build_error_banner(session: &FormSession) -> Html {
    match session.error_message() {
        Some(message) => html! { <div class="form-error" role="alert">{ message }</div> },
        None => html! {},
    }
}

fn build_submitting_panel() -> Html {
    html! {
        <div class="submit-pending">
            <p>{"Submitting…"}</p>
        </div>
    }
}

fn build_failure_panel(
    component: &MultiStepFormComponent,
    link: &Scope<MultiStepFormComponent>,
) -> Html {
    html! {
        <div class="submit-failed">
            { build_error_banner(&component.session) }
            <div class="step-controls">
                <button class="btn-back" onclick={link.callback(|_| Msg::Back)}>
                    {"Back"}
                </button>
                <button class="btn-next" onclick={link.callback(|_| Msg::Retry)}>
                    {"Try again"}
                </button>
            </div>
        </div>
    }
}

fn build_success_panel(link: &Scope<MultiStepFormComponent>) -> Html {
    html! {
        <div class="submit-succeeded">
            <h3>{"You're all set"}</h3>
            <p>{"We received your submission and will be in touch."}</p>
            <button class="btn-reset" onclick={link.callback(|_| Msg::Reset)}>
                {"Start over"}
            </button>
        </div>
    }
}
