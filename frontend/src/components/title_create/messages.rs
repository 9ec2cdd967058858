use common::responses::TitleCreated;

use crate::api::ApiError;
use crate::single_flight::Ticket;

use super::state::DraftField;

#[derive(Clone)]
pub enum Msg {
    Edit(DraftField, String),
    TogglePicker,
    ChoosePreset(String),
    RemovePreset(String),
    Submit,
    Created(Ticket, Result<TitleCreated, ApiError>),
    Back,
}
