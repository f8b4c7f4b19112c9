use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::{ApiError, RequestId, ResponseFormat};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid XML response: {0}")]
    Xml(#[from] quick_xml::de::DeError),

    #[error("response field `{field}` is empty")]
    EmptyField { field: &'static str },
}

/// Deserialize a body in the format that was requested via `Accept`.
pub fn decode_body<T: DeserializeOwned>(
    format: ResponseFormat,
    body: &str,
) -> Result<T, TransportError> {
    match format {
        ResponseFormat::Json => Ok(serde_json::from_str(body)?),
        ResponseFormat::Xml => Ok(quick_xml::de::from_str(body)?),
    }
}

pub fn request_id_field(value: String) -> Result<RequestId, TransportError> {
    RequestId::new(value).map_err(|_| TransportError::EmptyField {
        field: RequestId::FIELD,
    })
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    code: i32,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
}

/// Decode the `{error: {code, name, description}}` shape shared by every endpoint.
pub fn decode_api_error(format: ResponseFormat, body: &str) -> Result<ApiError, TransportError> {
    let parsed: ErrorEnvelope = decode_body(format, body)?;
    Ok(ApiError {
        code: parsed.error.code,
        name: parsed.error.name,
        description: parsed.error.description,
    })
}
