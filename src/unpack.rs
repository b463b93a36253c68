//! Classification of endpoint outcomes.

use crate::api::ApiResponse;
use crate::{Error, Result};
use http::StatusCode;

/// Turns an endpoint call outcome into a decoded value or a classified error.
///
/// First match wins:
///
/// 1. transport error: [`Error::Execution`] with the original error as source
/// 2. status 404: [`Error::NotFound`]
/// 3. any other non-2xx status: [`Error::Status`] carrying the status text
/// 4. 2xx without a decoded body: [`Error::NotFound`]
/// 5. otherwise the decoded body
///
/// Rule 4 also hides payloads that failed to decode behind the not-found
/// sentinel; inspect [`ApiResponse::raw_body`] through
/// [`Client::api`](crate::Client::api) when that distinction matters.
///
/// # Examples
///
/// ```
/// use depscian::{api::ApiResponse, unpack, Error};
/// use http::{HeaderMap, StatusCode};
///
/// let found = ApiResponse::new(Some(7), StatusCode::OK, "200 OK".into(), HeaderMap::new(), "7".into());
/// assert_eq!(unpack::<_, std::io::Error>(Ok(found)).unwrap(), 7);
///
/// let empty = ApiResponse::<i32>::new(None, StatusCode::OK, "200 OK".into(), HeaderMap::new(), String::new());
/// assert!(matches!(unpack::<_, std::io::Error>(Ok(empty)), Err(Error::NotFound)));
/// ```
pub fn unpack<T, E>(outcome: std::result::Result<ApiResponse<T>, E>) -> Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    let response = outcome.map_err(Error::execution)?;

    if response.status == StatusCode::NOT_FOUND {
        return Err(Error::NotFound);
    }

    if !response.status.is_success() {
        return Err(Error::Status {
            status: response.status,
            status_text: response.status_text,
            raw_response: response.raw_body,
        });
    }

    response.body.ok_or(Error::NotFound)
}
