use yew::{html, Component, Context, Html};

use crate::components::pages::aperture_iq::ApertureIqPage;
use crate::components::pages::call_clerk::CallClerkPage;
use crate::components::pages::estate_beacon::EstateBeaconPage;

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        // Each landing site is served from its own path prefix; the server
        // falls back to index.html for all of them.
        let path = current_path();
        if path.starts_with("/call-clerk") {
            html! { <CallClerkPage /> }
        } else if path.starts_with("/estate-beacon") {
            html! { <EstateBeaconPage /> }
        } else {
            html! { <ApertureIqPage /> }
        }
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default()
}
