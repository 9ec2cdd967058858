//! Side navigation. The Forms link carries a badge with the number of
//! pending forms, fetched once per session and kept in the query cache.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{ApiClient, ApiError};
use crate::query_cache::QueryCache;
use crate::routes::Route;

pub const FORMS_HREF: &str = "/forms";
const FORMS_COUNT_KEY: &str = "FormsCount";

/// (href, material icon, label)
const LINKS: [(&str, &str, &str); 5] = [
    (Route::Dashboard.path(), "dashboard", "Dashboard"),
    ("/parents", "family_restroom", "Parents"),
    (Route::ParentsFromCsv.path(), "upload_file", "Parents from CSV"),
    (Route::TitleCreate.path(), "chat", "Message title"),
    (FORMS_HREF, "assignment", "Forms"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct NavLinksProps {
    pub client: ApiClient,
    pub cache: QueryCache,
    pub current_path: AttrValue,
    pub on_navigate: Callback<String>,
}

#[function_component(NavLinks)]
pub fn nav_links(props: &NavLinksProps) -> Html {
    html! {
        <nav class="nav-links">
            {
                for LINKS.iter().map(|(href, icon, name)| html! {
                    <NavLink
                        key={*href}
                        href={*href}
                        icon={*icon}
                        name={*name}
                        active={props.current_path.starts_with(href)}
                        client={props.client.clone()}
                        cache={props.cache.clone()}
                        on_navigate={props.on_navigate.clone()}
                    />
                })
            }
        </nav>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct NavLinkProps {
    pub href: AttrValue,
    pub icon: AttrValue,
    pub name: AttrValue,
    pub active: bool,
    pub client: ApiClient,
    pub cache: QueryCache,
    pub on_navigate: Callback<String>,
}

pub enum NavLinkMsg {
    Counted(Result<u32, ApiError>),
}

pub struct NavLink {
    badge: Option<u32>,
}

impl NavLink {
    fn count_key(name: &str) -> [&str; 2] {
        [FORMS_COUNT_KEY, name]
    }
}

impl Component for NavLink {
    type Message = NavLinkMsg;
    type Properties = NavLinkProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        if &*props.href != FORMS_HREF || !props.client.has_session() {
            return Self { badge: None };
        }

        let cached = props.cache.get::<u32>(&Self::count_key(&props.name));
        if cached.is_none() {
            let client = props.client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(NavLinkMsg::Counted(client.form_count().await));
            });
        }
        Self { badge: cached }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            NavLinkMsg::Counted(Ok(count)) => {
                let props = ctx.props();
                props.cache.put(&Self::count_key(&props.name), &count);
                self.badge = Some(count);
                true
            }
            NavLinkMsg::Counted(Err(err)) => {
                gloo_console::warn!(format!("Form count unavailable: {}", err));
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let onclick = {
            let href = props.href.to_string();
            let on_navigate = props.on_navigate.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                on_navigate.emit(href.clone());
            })
        };

        html! {
            <a
                href={props.href.clone()}
                class={classes!("nav-link", props.active.then_some("active"))}
                {onclick}
            >
                <i class="material-icons">{ props.icon.clone() }</i>
                <span class="nav-label">{ props.name.clone() }</span>
                {
                    match self.badge {
                        Some(count) if count > 0 => html! { <span class="badge">{ count }</span> },
                        _ => html! {},
                    }
                }
            </a>
        }
    }
}
