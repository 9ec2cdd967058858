//! Update function for the message title composer.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::toast::{show_error_toast, show_toast};
use crate::drafts::PresetAdded;
use crate::storage::StorageError;

use super::messages::Msg;
use super::state::{SubmitBlocked, TitleCreateComponent};

pub const MESSAGES_HREF: &str = "/messages/create";

pub fn update(component: &mut TitleCreateComponent, ctx: &Context<TitleCreateComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Edit(field, value) => {
            log_storage(component.edit(field, value));
            true
        }
        Msg::TogglePicker => {
            component.picker_open = !component.picker_open;
            true
        }
        Msg::ChoosePreset(value) => {
            log_storage(component.choose_preset(value));
            true
        }
        Msg::RemovePreset(value) => {
            log_storage(component.drafts.remove_preset(&value).map(|_| ()));
            true
        }
        Msg::Submit => {
            let (ticket, request) = match component.begin_submit() {
                Ok(started) => started,
                Err(SubmitBlocked::InFlight) => return false,
                Err(SubmitBlocked::Invalid) => return true,
            };

            match component.drafts.add_preset(&request.title, &request.title) {
                Ok(PresetAdded::Added) => {
                    gloo_console::log!(format!("Saved title preset {:?}", request.title));
                }
                Ok(PresetAdded::Duplicate | PresetAdded::Blank) => {}
                Err(err) => log_storage(Err(err)),
            }

            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client.create_title(request).await;
                link.send_message(Msg::Created(ticket, result));
            });
            true
        }
        Msg::Created(ticket, result) => {
            if !component.flight.finish(ticket) {
                return false;
            }
            match result {
                Ok(created) => {
                    log_storage(component.reset());
                    show_toast("Message sent", &created.post.title);
                    ctx.props().on_navigate.emit(MESSAGES_HREF.to_string());
                }
                Err(err) => show_error_toast("Could not save the title", &err.to_string()),
            }
            true
        }
        Msg::Back => {
            ctx.props().on_navigate.emit(MESSAGES_HREF.to_string());
            false
        }
    }
}

/// Storage failures never block the form; the draft just stops surviving
/// reloads.
fn log_storage(result: Result<(), StorageError>) {
    if let Err(err) = result {
        gloo_console::error!(format!("Title draft not saved: {}", err));
    }
}
