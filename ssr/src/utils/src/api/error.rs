use serde_json::Value;

// longer bodies are almost always proxy error pages, not something to show inline
const MAX_PLAIN_DETAIL_LEN: usize = 300;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("{}", status_message(*status, detail.as_deref()))]
    Status { status: u16, detail: Option<String> },
    #[error("{0}")]
    Network(String),
    #[error("invalid response from server: {0}")]
    InvalidResponse(String),
    #[error("could not build request: {0}")]
    Build(String),
    #[error("video uploads are only available in the browser")]
    Unsupported,
}

fn status_message(status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) => detail.to_string(),
        None => format!("HTTP error! status: {status}"),
    }
}

impl RequestError {
    /// Error for a non 2xx response, keeping whatever explanation the body carries
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            detail: error_detail(body),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Human readable explanation from an error response body, if there is one.
///
/// Understands `{"detail": "..."}`, the `{"detail": [{"msg": ...}]}` list used
/// for request validation failures, `{"message": ...}` and `{"error": ...}`.
/// Short non JSON bodies are returned as is.
pub fn error_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => ["detail", "message", "error"]
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(detail_text),
        Ok(Value::String(s)) => non_empty(s),
        Ok(_) => None,
        Err(_) => {
            if body.starts_with('<') || body.len() > MAX_PLAIN_DETAIL_LEN {
                None
            } else {
                Some(body.to_string())
            }
        }
    }
}

fn detail_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_empty(s.clone()),
        Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.as_str()),
                    Value::Object(obj) => obj.get("msg").and_then(Value::as_str),
                    _ => None,
                })
                .filter(|msg| !msg.trim().is_empty())
                .collect();
            (!msgs.is_empty()).then(|| msgs.join("; "))
        }
        _ => None,
    }
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
