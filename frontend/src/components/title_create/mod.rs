//! Message title composer: root module wiring the Yew `Component`
//! implementation. State hydration happens in `create`, so a reload keeps
//! whatever the user typed last.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::TitleCreateProps;
pub use state::TitleCreateComponent;

impl Component for TitleCreateComponent {
    type Message = Msg;
    type Properties = TitleCreateProps;

    fn create(ctx: &Context<Self>) -> Self {
        TitleCreateComponent::open(ctx.props().store.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
