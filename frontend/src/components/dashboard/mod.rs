//! Landing page: one card per record type with its current count.

use num_format::{Locale, ToFormattedString};
use yew::prelude::*;

use crate::components::layout::card_grid::CardGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountCard {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub count: u64,
}

// Fixed figures: the backend has no count endpoints for these yet.
pub const CARDS: [CountCard; 5] = [
    CountCard {
        title: "Students",
        description: "The number of Students",
        href: "/students",
        icon: "school",
        count: 254,
    },
    CountCard {
        title: "Parents",
        description: "The number of Parents",
        href: "/parents",
        icon: "family_restroom",
        count: 323,
    },
    CountCard {
        title: "Groups",
        description: "The number of Groups",
        href: "/groups",
        icon: "groups",
        count: 125,
    },
    CountCard {
        title: "Admins",
        description: "The number of Admins",
        href: "/admins",
        icon: "admin_panel_settings",
        count: 12,
    },
    CountCard {
        title: "Forms",
        description: "The number of Forms",
        href: "/forms",
        icon: "assignment",
        count: 734,
    },
];

pub fn format_count(count: u64) -> String {
    count.to_formatted_string(&Locale::en)
}

#[derive(Properties, PartialEq, Clone)]
pub struct DashboardProps {
    pub on_navigate: Callback<String>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    html! {
        <div class="page dashboard">
            <h1 class="page-title">{ "Dashboard" }</h1>
            <CardGrid columns={CARDS.len()}>
                { for CARDS.iter().map(|card| count_card(card, &props.on_navigate)) }
            </CardGrid>
        </div>
    }
}

fn count_card(card: &CountCard, on_navigate: &Callback<String>) -> Html {
    let onclick = {
        let href = card.href.to_string();
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(href.clone());
        })
    };

    html! {
        <a class="card count-card" href={card.href} {onclick}>
            <div class="card-header">
                <i class="material-icons">{ card.icon }</i>
                <span class="card-title">{ card.title }</span>
            </div>
            <div class="card-footer">
                <p class="muted">{ card.description }</p>
                <p class="count">{ format_count(card.count) }</p>
            </div>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_use_thousands_separators() {
        assert_eq!(format_count(734), "734");
        assert_eq!(format_count(12_500), "12,500");
    }

    #[test]
    fn every_card_links_to_its_listing() {
        for card in CARDS {
            assert_eq!(card.href, format!("/{}", card.title.to_lowercase()));
        }
    }
}
