use crate::app::App;

mod app;
mod components;
mod layout;
mod pages;
mod routes;
mod services;

fn main() {
    yew::Renderer::<App>::new().render();
}
