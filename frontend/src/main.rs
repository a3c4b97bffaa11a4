use crate::app::App;

mod analytics;
mod app;
mod components;
mod gateway;

fn main() {
    yew::Renderer::<App>::new().render();
}
