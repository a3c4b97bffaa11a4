//! Generic multi-step form: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and helpers.
//!
//! One component, parameterized by a `FormDefinition` prop, replaces the
//! per-landing-page form variants. The wizard state itself lives in
//! `common::forms::session::FormSession`; this layer renders it, runs the
//! gateway call while the session is `Submitting`, and emits best-effort
//! analytics along the way.

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use yew::prelude::*;

pub use messages::Msg;
pub use props::MultiStepFormProps;
pub use state::MultiStepFormComponent;

impl Component for MultiStepFormComponent {
    type Message = Msg;
    type Properties = MultiStepFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        MultiStepFormComponent::new(ctx.props().definition.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
