use common::model::config::AppConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::platform::spawn_local;
use yew::{html, Callback, Component, Context, Html};

use crate::api::ApiClient;
use crate::components::csv_import::CsvImportComponent;
use crate::components::dashboard::Dashboard;
use crate::components::layout::nav::NavLinks;
use crate::components::title_create::TitleCreateComponent;
use crate::config::{self, SESSION_TOKEN_KEY};
use crate::query_cache::QueryCache;
use crate::routes::{self, Route};
use crate::storage::{KeyValueStore, StoreHandle};

pub enum Msg {
    ConfigLoaded(AppConfig),
    Navigate(String),
    HistoryChanged,
}

/// Application shell: loads the runtime configuration, owns the shared
/// query cache and storage handle, and swaps pages on navigation.
pub struct App {
    path: String,
    client: Option<ApiClient>,
    cache: QueryCache,
    store: StoreHandle,
    popstate: Option<Closure<dyn Fn()>>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ConfigLoaded(config::load().await));
        });

        let link = ctx.link().clone();
        let popstate = Closure::<dyn Fn()>::new(move || link.send_message(Msg::HistoryChanged));
        let registered = web_sys::window().is_some_and(|window| {
            window
                .add_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref())
                .is_ok()
        });

        Self {
            path: routes::current_path(),
            client: None,
            cache: QueryCache::default(),
            store: StoreHandle::browser(),
            popstate: registered.then_some(popstate),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => {
                gloo_console::log!(format!("Backend at {}", config.backend_url));
                let token = self.store.get(SESSION_TOKEN_KEY);
                self.client = Some(ApiClient::new(config, token));
                true
            }
            Msg::Navigate(path) => match Route::recognize(&path) {
                Some(_) => {
                    routes::push(&path);
                    self.path = path;
                    true
                }
                None => {
                    routes::redirect(&path);
                    false
                }
            },
            Msg::HistoryChanged => {
                self.path = routes::current_path();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(client) = &self.client else {
            return html! { <div class="loading">{ "Loading..." }</div> };
        };
        let on_navigate: Callback<String> = ctx.link().callback(Msg::Navigate);
        let route = Route::recognize(&self.path).unwrap_or(Route::Dashboard);

        let page = match route {
            Route::Dashboard => html! {
                <Dashboard on_navigate={on_navigate.clone()} />
            },
            Route::ParentsFromCsv => html! {
                <CsvImportComponent
                    client={client.clone()}
                    cache={self.cache.clone()}
                    on_navigate={on_navigate.clone()}
                />
            },
            Route::TitleCreate => html! {
                <TitleCreateComponent
                    client={client.clone()}
                    store={self.store.clone()}
                    on_navigate={on_navigate.clone()}
                />
            },
        };

        html! {
            <div class="shell">
                <header class="topbar">
                    <span class="brand">
                        <i class="material-icons">{ "school" }</i>
                        { "School Dashboard" }
                    </span>
                </header>
                <aside class="sidebar">
                    <NavLinks
                        client={client.clone()}
                        cache={self.cache.clone()}
                        current_path={self.path.clone()}
                        on_navigate={on_navigate}
                    />
                </aside>
                <main class="content">{ page }</main>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(popstate)) = (web_sys::window(), self.popstate.take()) {
            window
                .remove_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref())
                .ok();
        }
    }
}
