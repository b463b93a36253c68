//! Request editors applied to every outgoing request.

use crate::error::{Error, Result};
use http::{HeaderName, HeaderValue};

/// Header carrying the raw API key on every request.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Intercepts an outgoing request before it is sent.
///
/// Editors are run in registration order by the endpoint client, regardless
/// of which service issued the call.
pub trait RequestEditor: Send + Sync {
    /// Mutates the request in place.
    ///
    /// Returning an error aborts the call; the error reaches the caller as
    /// [`Error::Execution`].
    fn edit(&self, request: &mut reqwest::Request) -> Result<()>;
}

/// Sets the API key header, replacing any value already present.
#[derive(Clone)]
pub struct ApiKeyAuth {
    value: HeaderValue,
}

impl ApiKeyAuth {
    /// Creates the editor for `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the key is not a valid header value.
    pub fn new(api_key: impl AsRef<str>) -> Result<Self> {
        let mut value = HeaderValue::from_str(api_key.as_ref())
            .map_err(|e| Error::Configuration(format!("Invalid API key: {}", e)))?;
        value.set_sensitive(true);
        Ok(Self { value })
    }
}

impl RequestEditor for ApiKeyAuth {
    fn edit(&self, request: &mut reqwest::Request) -> Result<()> {
        request
            .headers_mut()
            .insert(HeaderName::from_static("x-api-key"), self.value.clone());
        Ok(())
    }
}

// Keeps the key out of debug output.
impl std::fmt::Debug for ApiKeyAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyAuth").field("value", &"***").finish()
    }
}
