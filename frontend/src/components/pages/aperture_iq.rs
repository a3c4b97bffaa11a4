use common::forms::catalog;
use yew::{html, Component, Context, Html};

use crate::components::forms::multi_step::MultiStepFormComponent;

/// ApertureIQ landing page: hero copy plus the three-step waitlist
/// questionnaire.
pub struct ApertureIqPage;

impl Component for ApertureIqPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="landing landing-aperture">
                <header class="hero">
                    <h1>{"ApertureIQ"}</h1>
                    <p>{"See every candidate clearly. Sourcing intelligence for recruiting teams that hire at volume."}</p>
                </header>
                <section class="signup">
                    <h2>{"Join the waitlist"}</h2>
                    <MultiStepFormComponent definition={catalog::aperture_waitlist()} />
                </section>
            </div>
        }
    }
}
