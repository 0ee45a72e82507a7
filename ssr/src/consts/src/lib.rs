use once_cell::sync::Lazy;
use reqwest::Url;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Build time override for the upload service base URL
pub const UPLOAD_API_URL_ENV: &str = "VIDEO_QA_UPLOAD_API_URL";
/// Build time override for the question answering service base URL
pub const ASK_API_URL_ENV: &str = "VIDEO_QA_ASK_API_URL";

// the wasm bundle has no process environment, so both bases are baked in at compile time
pub static UPLOAD_API_BASE: Lazy<Url> =
    Lazy::new(|| api_base_or_default(UPLOAD_API_URL_ENV, option_env!("VIDEO_QA_UPLOAD_API_URL")));
pub static ASK_API_BASE: Lazy<Url> =
    Lazy::new(|| api_base_or_default(ASK_API_URL_ENV, option_env!("VIDEO_QA_ASK_API_URL")));

pub const UPLOAD_PATH: &str = "upload";
pub const ASK_PATH: &str = "ask";
pub const UPLOAD_FORM_FIELD: &str = "file";

pub const MP4_MIME: &str = "video/mp4";
pub const MP4_EXTENSION: &str = ".mp4";
pub const FILE_INPUT_ACCEPT: &str = ".mp4,video/mp4";

pub mod copy {
    pub const UPLOAD_SUCCESS_FALLBACK: &str = "Video uploaded successfully!";
    pub const NO_ANSWER: &str = "No answer received";

    pub const UPLOAD_IDLE_LABEL: &str = "Upload Video";
    pub const UPLOAD_BUSY_LABEL: &str = "Uploading...";
    pub const ASK_IDLE_LABEL: &str = "Ask Question";
    pub const ASK_BUSY_LABEL: &str = "Thinking...";
}

/// Parses `raw` as an API base, falling back to [`DEFAULT_API_BASE`].
///
/// The returned URL always has a trailing slash so that joining an endpoint
/// path keeps any prefix (`https://host/api` + `upload` -> `https://host/api/upload`).
pub fn api_base_or_default(var: &str, raw: Option<&str>) -> Url {
    let parsed = raw
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .and_then(|raw| match Url::parse(raw) {
            Ok(url) if !url.cannot_be_a_base() => Some(url),
            Ok(_) => {
                log::warn!("{var}={raw} cannot be used as a base url, using {DEFAULT_API_BASE}");
                None
            }
            Err(e) => {
                log::warn!("{var}={raw} is not a valid url ({e}), using {DEFAULT_API_BASE}");
                None
            }
        });

    let mut url = parsed.unwrap_or_else(default_api_base);
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn default_api_base() -> Url {
    Url::parse(DEFAULT_API_BASE).expect("default api base is a valid url")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_value_uses_default() {
        assert_eq!(
            api_base_or_default("X", None).as_str(),
            "http://localhost:8000/"
        );
        assert_eq!(
            api_base_or_default("X", Some("   ")).as_str(),
            "http://localhost:8000/"
        );
    }

    #[test]
    fn garbage_value_uses_default() {
        assert_eq!(
            api_base_or_default("X", Some("not a url")).as_str(),
            "http://localhost:8000/"
        );
        assert_eq!(
            api_base_or_default("X", Some("mailto:someone@example.com")).as_str(),
            "http://localhost:8000/"
        );
    }

    #[test]
    fn path_prefix_survives_endpoint_join() {
        let base = api_base_or_default("X", Some("https://videos.example.com/api"));
        assert_eq!(
            base.join(UPLOAD_PATH).unwrap().as_str(),
            "https://videos.example.com/api/upload"
        );

        let base = api_base_or_default("X", Some("https://videos.example.com/api/"));
        assert_eq!(
            base.join(ASK_PATH).unwrap().as_str(),
            "https://videos.example.com/api/ask"
        );
    }
}
