use common::forms::catalog;
use yew::{html, Component, Context, Html};

use crate::components::forms::multi_step::MultiStepFormComponent;

/// Estate Beacon landing page with the two-step contact form.
pub struct EstateBeaconPage;

impl Component for EstateBeaconPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="landing landing-estate">
                <header class="hero">
                    <h1>{"Estate Beacon"}</h1>
                    <p>{"Property alerts your clients actually open. Listings matched and delivered before the competition calls."}</p>
                </header>
                <section class="signup">
                    <h2>{"Talk to us"}</h2>
                    <MultiStepFormComponent definition={catalog::estate_contact()} />
                </section>
            </div>
        }
    }
}
