//! Calls to the external video question answering service.
//!
//! Both calls are single shot: no retries, the caller decides what to show.

mod error;
mod types;

pub use error::{error_detail, RequestError};
pub use types::{AskRequest, AskResponse, UploadResponse};

use consts::{ASK_API_BASE, ASK_PATH, UPLOAD_API_BASE, UPLOAD_PATH};
use reqwest::Url;

use crate::web::VideoFile;

/// Where the upload and ask endpoints live
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub upload_base: Url,
    pub ask_base: Url,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            upload_base: UPLOAD_API_BASE.clone(),
            ask_base: ASK_API_BASE.clone(),
        }
    }
}

impl ApiConfig {
    pub fn upload_url(&self) -> Result<Url, RequestError> {
        join(&self.upload_base, UPLOAD_PATH)
    }

    pub fn ask_url(&self) -> Result<Url, RequestError> {
        join(&self.ask_base, ASK_PATH)
    }
}

fn join(base: &Url, path: &str) -> Result<Url, RequestError> {
    base.join(path)
        .map_err(|e| RequestError::Build(format!("{base} + {path}: {e}")))
}

pub async fn ask_question(
    config: &ApiConfig,
    request: &AskRequest,
) -> Result<AskResponse, RequestError> {
    let url = config.ask_url()?;

    let client = reqwest::Client::new();
    let res = client
        .post(url.clone())
        .json(request)
        .send()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;

    if !status.is_success() {
        log::warn!("ask request to {url} failed with status {status}");
        return Err(RequestError::from_status(status.as_u16(), &body));
    }

    AskResponse::from_body(&body)
}

/// Sends the video as multipart form data under [`consts::UPLOAD_FORM_FIELD`]
#[cfg(feature = "hydrate")]
pub async fn upload_video(
    config: &ApiConfig,
    video: &VideoFile,
) -> Result<UploadResponse, RequestError> {
    use crate::web::FileMeta;
    use consts::UPLOAD_FORM_FIELD;
    use gloo::net::http::Request;
    use web_sys::FormData;

    let url = config.upload_url()?;

    let form = FormData::new()
        .map_err(|js_value| RequestError::Build(format!("Failed to create FormData: {js_value:?}")))?;
    form.append_with_blob_and_filename(UPLOAD_FORM_FIELD, video.file(), video.file_name())
        .map_err(|js_value| {
            RequestError::Build(format!("Failed to append file to FormData: {js_value:?}"))
        })?;

    let response = Request::post(url.as_str())
        .body(form)
        .map_err(|e| RequestError::Build(e.to_string()))?
        .send()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;

    let body = response
        .text()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;

    if !response.ok() {
        log::warn!(
            "upload to {url} failed with status {} {}",
            response.status(),
            response.status_text()
        );
        return Err(RequestError::from_status(response.status(), &body));
    }

    UploadResponse::from_body(&body)
}

#[cfg(not(feature = "hydrate"))]
pub async fn upload_video(
    _config: &ApiConfig,
    _video: &VideoFile,
) -> Result<UploadResponse, RequestError> {
    Err(RequestError::Unsupported)
}
