//! Error types for Depscian API calls.
//!
//! Every facade call surfaces exactly one of three outcomes to the caller: a
//! decoded value, [`Error::NotFound`], or some other error. Transport failures
//! and unexpected HTTP statuses are kept apart so callers can still tell a dead
//! network from a misbehaving server, but no finer classification is made.

use http::StatusCode;

/// Boxed error type used for wrapped causes.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for Depscian API calls.
///
/// # Examples
///
/// ```no_run
/// use depscian::{Client, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::new("my-api-key", [])?;
///
/// match client.player().find(1, "Nick_Name").await {
///     Ok(player) => println!("Found: {}", *player),
///     Err(Error::NotFound) => println!("No such player"),
///     Err(e) => eprintln!("Lookup failed: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced an HTTP status.
    ///
    /// Covers DNS and connection failures, timeouts and request serialization
    /// problems. The original transport error is kept as the [`source`].
    ///
    /// [`source`]: std::error::Error::source
    #[error("client execution error: {0}")]
    Execution(#[source] BoxError),

    /// The resource does not exist.
    ///
    /// Returned for HTTP 404 and for successful responses whose body was
    /// empty or could not be decoded into the expected payload.
    #[error("not found")]
    NotFound,

    /// The server answered with a non-2xx status other than 404.
    #[error("unexpected status: {status_text}")]
    Status {
        /// The HTTP status code
        status: StatusCode,
        /// The raw status line text, e.g. `500 Internal Server Error`
        status_text: String,
        /// The raw response body
        raw_response: String,
    },

    /// A configuration option reported a failure while building the client.
    #[error("failed to apply option: {0}")]
    OptionFailed(#[source] BoxError),

    /// Invalid configuration was provided.
    ///
    /// For example an API key that is not a valid header value, or an HTTP
    /// client that could not be built.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The base URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Wraps a transport error as [`Error::Execution`].
    pub fn execution<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Execution(Box::new(error))
    }

    /// Returns `true` for the not-found sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use depscian::Error;
    ///
    /// assert!(Error::NotFound.is_not_found());
    /// assert!(!Error::Configuration("bad".into()).is_not_found());
    /// ```
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound)
    }

    /// Returns `true` if the request failed because it timed out.
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Execution(source) => {
                if let Some(transport) = source.downcast_ref::<crate::api::TransportError>() {
                    return transport.is_timeout();
                }
                source
                    .downcast_ref::<reqwest::Error>()
                    .is_some_and(reqwest::Error::is_timeout)
            }
            _ => false,
        }
    }

    /// Returns the HTTP status code of a [`Error::Status`] error.
    ///
    /// [`Error::NotFound`] returns `None`: the sentinel may stand for a 404 or
    /// for a 2xx response without a usable body.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body for status errors.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::Status { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }
}

/// A specialized `Result` type for Depscian API calls.
pub type Result<T> = std::result::Result<T, Error>;
