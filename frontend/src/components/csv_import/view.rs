//! View rendering for the parents CSV import page.
//!
//! Three blocks: the upload form, the error card (only when the last report
//! refused rows) and one card per non-empty outcome list.

use common::model::parent::{Parent, ParentField};
use common::model::upload::{UploadMode, UploadResult};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::reconcile::{error_rows, outcome_tables, ErrorCell, ErrorRow, OutcomeTable};
use super::state::CsvImportComponent;

pub fn view(component: &CsvImportComponent, ctx: &Context<CsvImportComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="page csv-import">
            <h1 class="page-title">{ "Create parents from CSV" }</h1>
            { build_form(component, link) }
            { build_failure(component) }
            {
                match &component.report {
                    Some(report) => build_report(report, link),
                    None => html! {},
                }
            }
        </div>
    }
}

fn build_form(component: &CsvImportComponent, link: &Scope<CsvImportComponent>) -> Html {
    let pending = component.flight.is_pending();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let onchange_file = link.callback(|e: Event| {
        let input = e.target_unchecked_into::<HtmlInputElement>();
        Msg::FileSelected(input.files().and_then(|files| files.get(0)))
    });
    let onchange_mode = link.callback(|e: Event| {
        let select = e.target_unchecked_into::<HtmlSelectElement>();
        Msg::SetMode(select.value().parse().unwrap_or_default())
    });
    let on_instructions = link.callback(|e: MouseEvent| {
        e.prevent_default();
        Msg::OpenInstructions
    });

    html! {
        <section class="card">
            <form class="stack" {onsubmit}>
                <div class="form-item">
                    <label for="csv-file">{ "Create parents" }</label>
                    <input
                        id="csv-file"
                        type="file"
                        accept=".csv"
                        ref={component.file_input_ref.clone()}
                        onchange={onchange_file}
                    />
                    <p class="form-description">{ "Upload csv file" }</p>
                    {
                        match &component.file_error {
                            Some(message) => html! { <p class="form-message">{ message }</p> },
                            None => html! {},
                        }
                    }
                </div>

                <div class="form-item">
                    <label for="csv-mode">{ "Mode" }</label>
                    <select id="csv-mode" onchange={onchange_mode}>
                        {
                            for UploadMode::ALL.iter().map(|mode| html! {
                                <option
                                    value={mode.as_str()}
                                    selected={*mode == component.mode}
                                >
                                    { mode_label(*mode) }
                                </option>
                            })
                        }
                    </select>
                    <p class="form-description">{ "Choose what to do with every row of the file" }</p>
                </div>

                <button type="submit" class="btn" disabled={pending}>
                    { if pending { "Upload csv file..." } else { "Upload csv file" } }
                </button>
            </form>
            <div>{ "New here?" }</div>
            <a href="/instruction" class="link" onclick={on_instructions}>
                { "How to create parents from CSV" }
            </a>
        </section>
    }
}

fn mode_label(mode: UploadMode) -> &'static str {
    match mode {
        UploadMode::Create => "Create",
        UploadMode::Update => "Update",
        UploadMode::Delete => "Delete",
    }
}

fn build_failure(component: &CsvImportComponent) -> Html {
    match &component.failure {
        Some(message) => html! {
            <div class="banner banner-error" role="alert">{ message }</div>
        },
        None => html! {},
    }
}

fn build_report(report: &UploadResult, link: &Scope<CsvImportComponent>) -> Html {
    let tables = outcome_tables(report);
    html! {
        <>
            { build_error_card(report, link) }
            { for tables.iter().map(build_outcome_card) }
        </>
    }
}

/// Error card with the export button. Nothing is rendered when the report
/// refused no rows.
fn build_error_card(report: &UploadResult, link: &Scope<CsvImportComponent>) -> Html {
    let rows = error_rows(report);
    if rows.is_empty() {
        return html! {};
    }

    html! {
        <section class="card">
            <header class="card-header spread">
                <div>
                    <h2 class="card-title">{ "Parents schema" }</h2>
                    <p class="muted">{ "Rows of the file that could not be saved" }</p>
                </div>
                <button
                    class="btn btn-outline btn-sm"
                    disabled={report.csv_file.is_empty()}
                    onclick={link.callback(|_| Msg::Export)}
                >
                    <i class="material-icons">{ "description" }</i>
                    <span>{ "Export" }</span>
                </button>
            </header>
            <table class="table">
                { table_head() }
                <tbody>
                    { for rows.iter().map(build_error_row) }
                </tbody>
            </table>
        </section>
    }
}

fn table_head() -> Html {
    html! {
        <thead>
            <tr>
                { for ParentField::ALL.iter().map(|field| html! { <th>{ field.as_str() }</th> }) }
            </tr>
        </thead>
    }
}

fn build_error_row(row: &ErrorRow<'_>) -> Html {
    html! {
        <tr>
            { for row.cells.iter().map(build_error_cell) }
        </tr>
    }
}

/// Submitted value on the left, an error marker on the right when the column
/// has a message. The message shows on hover or keyboard focus.
fn build_error_cell(cell: &ErrorCell<'_>) -> Html {
    html! {
        <td>
            <div class="error-cell">
                {
                    match cell.value {
                        Some(value) => html! { <span>{ value }</span> },
                        None => html! {},
                    }
                }
                {
                    if cell.has_marker() {
                        let message = cell.message.unwrap_or_default();
                        html! {
                            <span class="error-marker" tabindex="0" aria-label={message.to_string()}>
                                <i class="material-icons">{ "info" }</i>
                                <span class="hover-card" role="tooltip">{ message }</span>
                            </span>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </td>
    }
}

fn build_outcome_card(table: &OutcomeTable<'_>) -> Html {
    html! {
        <section class="card">
            <header class="card-header spread">
                <h2 class="card-title">{ table.title }</h2>
                <p class="muted">{ table.description }</p>
            </header>
            <table class="table">
                { table_head() }
                <tbody>
                    { for table.records.iter().map(build_record_row) }
                </tbody>
            </table>
        </section>
    }
}

fn build_record_row(parent: &Parent) -> Html {
    html! {
        <tr>
            {
                for ParentField::ALL.iter().map(|field| html! {
                    <td><span>{ parent.get(*field) }</span></td>
                })
            }
        </tr>
    }
}
