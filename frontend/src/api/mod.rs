//! HTTP client for the school REST API.
//!
//! Every call is fire-once: no timeout, no retry. Failed responses are
//! classified here so components only deal with typed errors.

use common::model::config::AppConfig;
use common::model::form::FormCount;
use common::model::upload::{UploadMode, UploadResult};
use common::requests::{upload, TitleCreateRequest};
use common::responses::{TitleCreated, UploadAccepted};
use gloo_net::http::{Request, RequestBuilder, Response};
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("could not build the request: {0}")]
    Request(String),
    #[error("could not reach the server: {0}")]
    Network(String),
    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Request(format!("{:?}", err))
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadError {
    #[error("{} row(s) were rejected", .0.errors.len())]
    Rejected(Box<UploadResult>),
    #[error("the server sent a malformed upload report: {0}")]
    MalformedReport(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    config: AppConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: AppConfig, token: Option<String>) -> Self {
        let token = token.filter(|t| !t.trim().is_empty());
        Self { config, token }
    }

    pub fn has_session(&self) -> bool {
        self.token.is_some()
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// `POST /parent/upload`. A refused batch comes back as
    /// `UploadError::Rejected` carrying the backend's report.
    pub async fn upload_parents(
        &self,
        file: File,
        mode: UploadMode,
    ) -> Result<UploadAccepted, UploadError> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename(upload::FIELD_FILE, &file, &file.name())
            .map_err(js_error)?;
        form.append_with_str(upload::FIELD_THROW_IN_ERROR, upload::THROW_IN_ERROR)
            .map_err(js_error)?;
        form.append_with_str(upload::FIELD_WITH_CSV, upload::WITH_CSV)
            .map_err(js_error)?;
        form.append_with_str(upload::FIELD_ACTION, mode.as_str())
            .map_err(js_error)?;

        let response = self
            .authorize(Request::post(&self.config.endpoint("parent/upload")))
            .body(form)
            .map_err(ApiError::from)?
            .send()
            .await
            .map_err(ApiError::from)?;

        let (status, ok, body) = read_body(&response).await?;
        if ok {
            Ok(decode_accepted(&body))
        } else {
            Err(upload_failure(status, &body))
        }
    }

    /// `POST /post/titleCreate`.
    pub async fn create_title(&self, request: TitleCreateRequest) -> Result<TitleCreated, ApiError> {
        let response = self
            .authorize(Request::post(&self.config.endpoint("post/titleCreate")))
            .json(&request)?
            .send()
            .await?;

        let (status, ok, body) = read_body(&response).await?;
        if !ok {
            return Err(status_error(status, &body));
        }
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `GET /form/count`, bearer-authenticated.
    pub async fn form_count(&self) -> Result<u32, ApiError> {
        let response = self
            .authorize(Request::get(&self.config.endpoint("form/count")))
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let (status, ok, body) = read_body(&response).await?;
        if !ok {
            return Err(status_error(status, &body));
        }
        serde_json::from_slice::<FormCount>(&body)
            .map(|c| c.form_count)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

async fn read_body(response: &Response) -> Result<(u16, bool, Vec<u8>), ApiError> {
    let status = response.status();
    let ok = response.ok();
    let body = response.binary().await?;
    Ok((status, ok, body))
}

/// Reads the optional message of a 2xx upload response. A JSON `message`
/// string wins; other JSON carries no message; plain text is the message.
fn decode_accepted(body: &[u8]) -> UploadAccepted {
    let message = match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(value) => value
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string),
        Err(_) => Some(String::from_utf8_lossy(body).trim().to_string()).filter(|m| !m.is_empty()),
    };
    UploadAccepted { message }
}

/// Classifies a failed upload response.
///
/// A JSON object carrying any upload report key must decode as a full
/// `UploadResult`; a mismatch is reported instead of rendered as blanks.
/// Anything else is a plain status error.
pub fn upload_failure(status: u16, body: &[u8]) -> UploadError {
    let value: serde_json::Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(_) => return status_error(status, body).into(),
    };

    let is_report = value
        .as_object()
        .is_some_and(|obj| UploadResult::KEYS.iter().any(|k| obj.contains_key(*k)));
    if !is_report {
        return status_error(status, body).into();
    }

    match serde_json::from_value::<UploadResult>(value) {
        Ok(report) => UploadError::Rejected(Box::new(report)),
        Err(e) => UploadError::MalformedReport(e.to_string()),
    }
}

/// Builds a status error, preferring the `message` field of a JSON body.
pub fn status_error(status: u16, body: &[u8]) -> ApiError {
    let message = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string());
    ApiError::Status { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::parent::ParentField;

    #[test]
    fn report_body_becomes_rejected() {
        let body = br#"{"csvFile":{"type":"Buffer","data":[97]},"errors":[{"row":{"email":"a@x.com"},"errors":{"email":"invalid"}}]}"#;

        match upload_failure(400, body) {
            UploadError::Rejected(report) => {
                assert_eq!(report.errors.len(), 1);
                assert_eq!(report.errors[0].errors.get(ParentField::Email), Some("invalid"));
                assert_eq!(report.csv_file.as_bytes(), b"a");
            }
            other => panic!("expected a report, got {other:?}"),
        }
    }

    #[test]
    fn misshapen_report_is_explicit() {
        let err = upload_failure(400, br#"{"errors":[{"row":"a@x.com"}]}"#);
        assert!(matches!(err, UploadError::MalformedReport(_)));
    }

    #[test]
    fn plain_json_error_keeps_the_message() {
        let err = upload_failure(401, br#"{"message":"Unauthorized"}"#);
        assert_eq!(
            err,
            UploadError::Api(ApiError::Status {
                status: 401,
                message: "Unauthorized".into()
            })
        );
    }

    #[test]
    fn non_json_error_uses_the_text() {
        let err = status_error(502, b"Bad Gateway\n");
        assert_eq!(err.to_string(), "server responded with 502: Bad Gateway");
    }

    #[test]
    fn empty_success_body_is_accepted() {
        assert_eq!(decode_accepted(b""), UploadAccepted::default());
        assert_eq!(
            decode_accepted(br#"{"message":"3 parents created"}"#).message.as_deref(),
            Some("3 parents created")
        );
    }

    #[test]
    fn any_success_body_is_accepted() {
        assert_eq!(decode_accepted(br#"{"message":null}"#).message, None);
        assert_eq!(decode_accepted(br#"{"count":3}"#).message, None);
        assert_eq!(decode_accepted(br#"[1,2]"#).message, None);
        assert_eq!(
            decode_accepted(b"Created\n").message.as_deref(),
            Some("Created")
        );
    }

    #[test]
    fn blank_token_means_no_session() {
        let config = AppConfig::new("http://localhost:4000");
        assert!(!ApiClient::new(config.clone(), Some("  ".into())).has_session());
        assert!(ApiClient::new(config, Some("abc".into())).has_session());
    }
}
