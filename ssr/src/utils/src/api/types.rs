use consts::copy::{NO_ANSWER, UPLOAD_SUCCESS_FALLBACK};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::RequestError;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AskRequest {
    pub video_id: String,
    pub question: String,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadResponse {
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub filename: Option<String>,
}

impl UploadResponse {
    pub fn from_body(body: &str) -> Result<Self, RequestError> {
        parse_body(body)
    }

    pub fn message_text(&self) -> &str {
        self.message.as_deref().unwrap_or(UPLOAD_SUCCESS_FALLBACK)
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AskResponse {
    #[serde(default, deserialize_with = "lenient_text")]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub response: Option<String>,
}

impl AskResponse {
    pub fn from_body(body: &str) -> Result<Self, RequestError> {
        parse_body(body)
    }

    /// `answer` first, then `response`, then a placeholder
    pub fn answer_text(&self) -> &str {
        self.answer
            .as_deref()
            .or(self.response.as_deref())
            .unwrap_or(NO_ANSWER)
    }
}

fn parse_body<T: for<'de> Deserialize<'de> + Default>(body: &str) -> Result<T, RequestError> {
    // an empty 2xx body carries no fields, treat it like `{}`
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    let invalid = |e: serde_json::Error| RequestError::InvalidResponse(e.to_string());
    match serde_json::from_str::<Value>(body).map_err(invalid)? {
        obj @ Value::Object(_) => serde_json::from_value(obj).map_err(invalid),
        // valid JSON that is not an object has no fields to read
        _ => Ok(T::default()),
    }
}

/// Accepts any JSON scalar, keeping only values worth displaying
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(true)) => Some("true".to_string()),
        _ => None,
    })
}
