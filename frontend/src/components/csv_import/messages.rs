use common::model::upload::UploadMode;
use common::responses::UploadAccepted;

use crate::api::UploadError;
use crate::single_flight::Ticket;

#[derive(Clone)]
pub enum Msg {
    FileSelected(Option<web_sys::File>),
    SetMode(UploadMode),
    Submit,
    Uploaded(Ticket, Result<UploadAccepted, UploadError>),
    Export,
    OpenInstructions,
}
