use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    /// Column count on wide screens; narrower screens wrap automatically.
    pub columns: usize,
    #[prop_or(8)]
    pub gap_px: usize,
    pub children: Children,
}

pub struct CardGrid;

impl Component for CardGrid {
    type Message = ();
    type Properties = CardGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CardGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat(auto-fit, minmax(max(180px, calc((100% - {gap}px * {cols_minus}) / {cols})), 1fr));
             gap: {gap}px;",
            gap = props.gap_px,
            cols = props.columns.max(1),
            cols_minus = props.columns.max(1) - 1,
        );

        html! {
            <div class="card-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
