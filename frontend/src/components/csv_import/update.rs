//! Update function for the parents CSV import page.
//!
//! Submitting validates the file name, claims the single upload slot and
//! posts the multipart form. The response either sends the user to the
//! parents listing or leaves a report behind for the tables to render.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::UploadError;
use crate::components::toast::{show_error_toast, show_toast};

use super::export::{export, REPORT_FILE_NAME};
use super::messages::Msg;
use super::state::{begin_submit, CsvImportComponent, SubmitBlocked};

pub const PARENTS_QUERY: &str = "parents";
pub const PARENTS_HREF: &str = "/parents";
pub const INSTRUCTIONS_HREF: &str = "/instruction";

pub fn update(component: &mut CsvImportComponent, ctx: &Context<CsvImportComponent>, msg: Msg) -> bool {
    match msg {
        Msg::FileSelected(file) => {
            component.file = file;
            component.file_error = None;
            true
        }
        Msg::SetMode(mode) => {
            component.mode = mode;
            true
        }
        Msg::Submit => {
            let ticket = match begin_submit(component.file_name().as_deref(), &mut component.flight) {
                Ok(ticket) => ticket,
                Err(SubmitBlocked::InFlight) => return false,
                Err(SubmitBlocked::Invalid(err)) => {
                    component.file_error = Some(err.to_string());
                    return true;
                }
            };
            let Some(file) = component.file.clone() else {
                component.flight.finish(ticket);
                return true;
            };

            let client = ctx.props().client.clone();
            let mode = component.mode;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client.upload_parents(file, mode).await;
                link.send_message(Msg::Uploaded(ticket, result));
            });
            true
        }
        Msg::Uploaded(ticket, result) => {
            if !component.flight.finish(ticket) {
                return false;
            }
            component.report = None;
            component.failure = None;

            match result {
                Ok(accepted) => {
                    component.reset_form();
                    let dropped = ctx.props().cache.invalidate(&[PARENTS_QUERY]);
                    gloo_console::log!(format!(
                        "Parents upload accepted, {} cached queries invalidated",
                        dropped
                    ));
                    show_toast("Parents uploaded", accepted.message.as_deref().unwrap_or_default());
                    ctx.props().on_navigate.emit(PARENTS_HREF.to_string());
                }
                Err(UploadError::Rejected(report)) => {
                    gloo_console::warn!(format!(
                        "Parents upload rejected: {} row error(s)",
                        report.errors.len()
                    ));
                    component.report = Some(*report);
                }
                Err(err) => {
                    show_error_toast("Upload failed", &err.to_string());
                    component.failure = Some(err.to_string());
                }
            }
            true
        }
        Msg::Export => {
            if let Some(report) = &component.report {
                export(REPORT_FILE_NAME, report.csv_file.as_bytes());
            }
            false
        }
        Msg::OpenInstructions => {
            ctx.props().on_navigate.emit(INSTRUCTIONS_HREF.to_string());
            false
        }
    }
}
