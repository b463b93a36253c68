//! Transport configuration and the options that mutate it.
//!
//! A [`TransportConfig`] starts from the defaults and is then mutated by a
//! list of [`ConfigOption`]s, applied strictly in the order given. Later
//! options win when they touch the same field.

use crate::error::{BoxError, Error, Result};
use std::fmt;
use std::time::Duration;

/// The versioned API root used when no base URL override is given.
pub const DEFAULT_BASE_URL: &str = "https://api.depscian.tech/v2";

/// The per-request timeout applied to the default HTTP client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings used to build the underlying HTTP transport.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// The API root every endpoint path is joined onto.
    pub base_url: String,

    /// Per-request timeout.
    ///
    /// `None` leaves timing entirely to the HTTP client, which is what
    /// happens after a custom client is installed.
    pub timeout: Option<Duration>,

    /// A fully custom HTTP client replacing the default one.
    pub http_client: Option<reqwest::Client>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            http_client: None,
        }
    }
}

impl TransportConfig {
    /// Applies `options` in order, stopping at the first one that fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OptionFailed`] wrapping the failing option's error.
    pub fn apply(&mut self, options: impl IntoIterator<Item = ConfigOption>) -> Result<()> {
        for option in options {
            option.apply_to(self)?;
        }
        Ok(())
    }
}

type ApplyFn = dyn FnOnce(&mut TransportConfig) -> std::result::Result<(), BoxError> + Send;

/// An order-applied mutator of [`TransportConfig`].
///
/// # Examples
///
/// ```
/// use depscian::{ConfigOption, TransportConfig};
/// use std::time::Duration;
///
/// let mut config = TransportConfig::default();
/// config
///     .apply([
///         ConfigOption::base_url("http://localhost:8080/v2"),
///         ConfigOption::timeout(Duration::from_secs(5)),
///     ])
///     .unwrap();
///
/// assert_eq!(config.base_url, "http://localhost:8080/v2");
/// assert_eq!(config.timeout, Some(Duration::from_secs(5)));
/// ```
pub struct ConfigOption {
    name: &'static str,
    apply: Box<ApplyFn>,
}

impl ConfigOption {
    /// Replaces the base URL.
    pub fn base_url(url: impl Into<String>) -> Self {
        let url = url.into();
        Self::named("base_url", move |config| {
            config.base_url = url;
            Ok(())
        })
    }

    /// Replaces the per-request timeout.
    ///
    /// When applied after [`ConfigOption::http_client`], the timeout is
    /// enforced on top of the custom client.
    pub fn timeout(timeout: Duration) -> Self {
        Self::named("timeout", move |config| {
            config.timeout = Some(timeout);
            Ok(())
        })
    }

    /// Replaces the whole HTTP client.
    ///
    /// This is a full replacement: any timeout set by an earlier option is
    /// discarded and the custom client's own timeout applies.
    pub fn http_client(client: reqwest::Client) -> Self {
        Self::named("http_client", move |config| {
            config.http_client = Some(client);
            config.timeout = None;
            Ok(())
        })
    }

    /// Builds an option from an arbitrary, possibly failing, mutator.
    ///
    /// # Examples
    ///
    /// ```
    /// use depscian::{ConfigOption, TransportConfig};
    ///
    /// let from_env = ConfigOption::from_fn(|config| {
    ///     let url = std::env::var("DEPSCIAN_TEST_URL_UNSET")?;
    ///     config.base_url = url;
    ///     Ok(())
    /// });
    ///
    /// let err = TransportConfig::default().apply([from_env]).unwrap_err();
    /// assert!(err.to_string().starts_with("failed to apply option"));
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnOnce(&mut TransportConfig) -> std::result::Result<(), BoxError> + Send + 'static,
    {
        Self::named("custom", f)
    }

    fn named<F>(name: &'static str, f: F) -> Self
    where
        F: FnOnce(&mut TransportConfig) -> std::result::Result<(), BoxError> + Send + 'static,
    {
        Self {
            name,
            apply: Box::new(f),
        }
    }

    fn apply_to(self, config: &mut TransportConfig) -> Result<()> {
        (self.apply)(config).map_err(Error::OptionFailed)
    }
}

impl fmt::Debug for ConfigOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigOption")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
