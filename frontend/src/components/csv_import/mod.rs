//! Parents CSV import page: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic and view
//! rendering, plus the pure report reconciliation and export helpers.

use yew::prelude::*;

pub mod export;
mod messages;
mod props;
pub mod reconcile;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CsvImportProps;
pub use state::CsvImportComponent;

impl Component for CsvImportComponent {
    type Message = Msg;
    type Properties = CsvImportProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CsvImportComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
