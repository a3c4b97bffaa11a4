use common::forms::catalog;
use yew::{html, Component, Context, Html};

use crate::components::forms::multi_step::MultiStepFormComponent;

/// Call Clerk landing page. Carries two independent form sessions: the demo
/// request wizard and the footer email capture.
pub struct CallClerkPage;

impl Component for CallClerkPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="landing landing-callclerk">
                <header class="hero">
                    <h1>{"Call Clerk"}</h1>
                    <p>{"Never miss a customer call again. An answering service that books, routes, and takes messages."}</p>
                </header>
                <section class="signup">
                    <h2>{"Book a demo"}</h2>
                    <MultiStepFormComponent definition={catalog::call_clerk_demo()} />
                </section>
                <footer class="updates">
                    <h2>{"Get product updates"}</h2>
                    <MultiStepFormComponent definition={catalog::call_clerk_email_capture()} />
                </footer>
            </div>
        }
    }
}
