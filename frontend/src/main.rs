use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod drafts;
mod query_cache;
mod routes;
mod single_flight;
mod storage;

fn main() {
    yew::Renderer::<App>::new().render();
}
