//! View rendering for the message title composer: title input with a preset
//! picker next to it, label input and the save button.

use common::model::title::TitlePreset;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{DraftField, TitleCreateComponent};

pub fn view(component: &TitleCreateComponent, ctx: &Context<TitleCreateComponent>) -> Html {
    let link = ctx.link();
    let pending = component.flight.is_pending();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="page title-create">
            <form class="stack" {onsubmit}>
                <div class="spread">
                    <h1 class="page-title">{ "Send message" }</h1>
                    <button type="button" class="btn btn-dark" onclick={link.callback(|_| Msg::Back)}>
                        { "Back" }
                    </button>
                </div>

                <div class="form-item">
                    <label for="title-input">{ "Title" }</label>
                    <div class="row">
                        <input
                            id="title-input"
                            class="grow"
                            placeholder="Type a title"
                            value={component.draft.title.clone()}
                            oninput={edit_callback(link, DraftField::Title)}
                        />
                        { build_picker(component, link) }
                    </div>
                    { field_message(component.errors.title) }
                </div>

                <div class="form-item">
                    <label for="label-input">{ "Label" }</label>
                    <input
                        id="label-input"
                        placeholder="Type a label"
                        value={component.draft.label.clone()}
                        oninput={edit_callback(link, DraftField::Label)}
                    />
                    { field_message(component.errors.label) }
                </div>

                <div>
                    <button type="submit" class="btn" disabled={pending}>
                        { if pending { "Saving..." } else { "Save" } }
                    </button>
                </div>
            </form>
        </div>
    }
}

fn edit_callback(link: &Scope<TitleCreateComponent>, field: DraftField) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        Msg::Edit(field, value)
    })
}

fn field_message(message: Option<&'static str>) -> Html {
    match message {
        Some(message) => html! { <p class="form-message">{ message }</p> },
        None => html! {},
    }
}

fn build_picker(component: &TitleCreateComponent, link: &Scope<TitleCreateComponent>) -> Html {
    let presets = component.drafts.presets();

    html! {
        <div class="picker">
            <button type="button" class="btn btn-outline" onclick={link.callback(|_| Msg::TogglePicker)}>
                { "Sample Title List" }
                <i class="material-icons">{ if component.picker_open { "expand_less" } else { "expand_more" } }</i>
            </button>
            {
                if !component.picker_open {
                    html! {}
                } else if presets.is_empty() {
                    html! { <div class="picker-list empty">{ "There is no Title Sample" }</div> }
                } else {
                    html! {
                        <ul class="picker-list">
                            <li class="picker-heading">{ "Title" }</li>
                            { for presets.iter().map(|preset| build_preset(preset, link)) }
                        </ul>
                    }
                }
            }
        </div>
    }
}

fn build_preset(preset: &TitlePreset, link: &Scope<TitleCreateComponent>) -> Html {
    let choose = {
        let value = preset.value.clone();
        link.callback(move |_| Msg::ChoosePreset(value.clone()))
    };
    let remove = {
        let value = preset.value.clone();
        link.callback(move |_| Msg::RemovePreset(value.clone()))
    };

    html! {
        <li key={preset.value.clone()} class="picker-item">
            <span class="grow">{ preset.label.clone() }</span>
            <button type="button" class="btn btn-sm" onclick={choose}>{ "choose" }</button>
            <button type="button" class="btn btn-sm btn-outline" onclick={remove}>{ "delete" }</button>
        </li>
    }
}
