//! Response envelope returned by the endpoint client.
//!
//! The [`ApiResponse`] type carries the decoded body (if any) next to the raw
//! status and body, which is what the unpacking layer classifies.

use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

/// A raw endpoint response.
///
/// `body` is only populated for 2xx responses whose body decoded into `T`.
///
/// # Examples
///
/// ```
/// use depscian::api::ApiResponse;
/// use http::{HeaderMap, StatusCode};
///
/// let response: ApiResponse<serde_json::Value> = ApiResponse::decode(
///     StatusCode::OK,
///     "200 OK".to_string(),
///     HeaderMap::new(),
///     r#"{"online": 12}"#.to_string(),
/// );
///
/// assert_eq!(response.status_text, "200 OK");
/// assert_eq!(response.body.unwrap()["online"], 12);
/// ```
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// The decoded response body, if the request succeeded and it parsed.
    pub body: Option<T>,

    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The status line text as sent by the server, e.g. `404 Not Found`.
    pub status_text: String,

    /// The response headers.
    pub headers: HeaderMap,

    /// The raw response body as a string.
    pub raw_body: String,
}

impl<T> ApiResponse<T> {
    /// Creates an envelope from its parts.
    pub fn new(
        body: Option<T>,
        status: StatusCode,
        status_text: String,
        headers: HeaderMap,
        raw_body: String,
    ) -> Self {
        Self {
            body,
            status,
            status_text,
            headers,
            raw_body,
        }
    }

    /// Maps the decoded body to a different type, preserving the metadata.
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            body: self.body.map(f),
            status: self.status,
            status_text: self.status_text,
            headers: self.headers,
            raw_body: self.raw_body,
        }
    }

    /// Returns a reference to a header value by name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Builds an envelope, decoding `raw_body` only for 2xx statuses.
    ///
    /// An empty or malformed success body leaves `body` as `None`.
    pub fn decode(
        status: StatusCode,
        status_text: String,
        headers: HeaderMap,
        raw_body: String,
    ) -> Self {
        let body = if status.is_success() && !raw_body.trim().is_empty() {
            match serde_json::from_str::<T>(&raw_body) {
                Ok(data) => Some(data),
                Err(e) => {
                    tracing::debug!(
                        error = %e,
                        status = status.as_u16(),
                        "Failed to decode response body"
                    );
                    None
                }
            }
        } else {
            None
        };

        Self::new(body, status, status_text, headers, raw_body)
    }
}

/// Formats a status line from the code and the reason phrase the server sent.
///
/// Falls back to the canonical reason, then to the bare code for
/// non-standard statuses.
///
/// # Examples
///
/// ```
/// use depscian::api::status_line;
/// use http::StatusCode;
///
/// let maintenance = StatusCode::SERVICE_UNAVAILABLE;
/// assert_eq!(status_line(maintenance, Some("Down For Maintenance")), "503 Down For Maintenance");
/// assert_eq!(status_line(maintenance, None), "503 Service Unavailable");
/// ```
pub fn status_line(status: StatusCode, reason: Option<&str>) -> String {
    match reason.or_else(|| status.canonical_reason()) {
        Some(reason) if !reason.is_empty() => format!("{} {}", status.as_str(), reason),
        _ => status.as_str().to_string(),
    }
}
