//! Top-level client owning the endpoint client and every service facade.
//!
//! The [`Client`] type is the main entry point. Use [`Client::new`] with a list
//! of [`ConfigOption`]s, or [`ClientBuilder`] for a fluent equivalent.

use crate::{
    api::ApiClient,
    auth::ApiKeyAuth,
    config::{ConfigOption, TransportConfig},
    services::{
        AdminsService, FamiliesService, FractionsService, GhettoService, LeadershipService,
        MapService, OnlineService, PlayerService, SobesService, StatusService,
    },
    Result,
};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// A client for the Depscian API.
///
/// Every service shares one configured [`ApiClient`], so cloning a `Client`
/// is cheap and clones share the same connection pool. Every request carries
/// the API key in the `X-API-Key` header.
///
/// # Cancellation
///
/// Calls have no context argument. Dropping the returned future cancels the
/// request. A configured timeout that fires comes back as
/// [`Error::Execution`](crate::Error::Execution) with
/// [`is_timeout`](crate::Error::is_timeout) set, but a deadline the caller
/// imposes with `tokio::time::timeout` returns tokio's own `Elapsed` error,
/// not a classified [`Error`](crate::Error).
///
/// # Examples
///
/// ```no_run
/// use depscian::{Client, ConfigOption};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), depscian::Error> {
/// let client = Client::new(
///     "my-api-key",
///     [ConfigOption::timeout(Duration::from_secs(10))],
/// )?;
///
/// let online = client.online().get(1).await?;
/// println!("Online: {}", *online);
///
/// let status = client.status().get().await?;
/// println!("Status: {}", *status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    api: Arc<ApiClient>,
    admins: AdminsService,
    families: FamiliesService,
    fractions: FractionsService,
    ghetto: GhettoService,
    leadership: LeadershipService,
    map: MapService,
    online: OnlineService,
    player: PlayerService,
    sobes: SobesService,
    status: StatusService,
}

impl Client {
    /// Creates a client, applying `options` in order on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OptionFailed`](crate::Error::OptionFailed) if an option
    /// fails, and a configuration or URL error if the API key or base URL is
    /// unusable. No client is returned in either case.
    pub fn new(
        api_key: impl AsRef<str>,
        options: impl IntoIterator<Item = ConfigOption>,
    ) -> Result<Self> {
        let mut config = TransportConfig::default();
        config.apply(options)?;

        let auth = ApiKeyAuth::new(api_key)?;
        let api = Arc::new(ApiClient::new(config)?.with_editor(auth));

        tracing::debug!(
            base_url = %api.base_url(),
            timeout = ?api.timeout(),
            "Created Depscian client"
        );

        Ok(Self::from_api(api))
    }

    /// Creates a new `ClientBuilder` for `api_key`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use depscian::Client;
    ///
    /// # fn example() -> Result<(), depscian::Error> {
    /// let client = Client::builder("my-api-key")
    ///     .base_url("https://staging.example.com/v2")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Wires every service onto an already configured endpoint client.
    pub fn from_api(api: Arc<ApiClient>) -> Self {
        Self {
            admins: AdminsService::new(Arc::clone(&api)),
            families: FamiliesService::new(Arc::clone(&api)),
            fractions: FractionsService::new(Arc::clone(&api)),
            ghetto: GhettoService::new(Arc::clone(&api)),
            leadership: LeadershipService::new(Arc::clone(&api)),
            map: MapService::new(Arc::clone(&api)),
            online: OnlineService::new(Arc::clone(&api)),
            player: PlayerService::new(Arc::clone(&api)),
            sobes: SobesService::new(Arc::clone(&api)),
            status: StatusService::new(Arc::clone(&api)),
            api,
        }
    }

    /// The shared endpoint client, for access to raw response envelopes.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// The effective base URL (always ends with `/`).
    pub fn base_url(&self) -> &Url {
        self.api.base_url()
    }

    /// The per-request timeout, or `None` when a custom HTTP client governs it.
    pub fn timeout(&self) -> Option<Duration> {
        self.api.timeout()
    }

    /// Server administrators.
    pub fn admins(&self) -> &AdminsService {
        &self.admins
    }

    /// Player families.
    pub fn families(&self) -> &FamiliesService {
        &self.families
    }

    /// Fractions and their members.
    pub fn fractions(&self) -> &FractionsService {
        &self.fractions
    }

    /// Ghetto territories.
    pub fn ghetto(&self) -> &GhettoService {
        &self.ghetto
    }

    /// Fraction leaders and deputies.
    pub fn leadership(&self) -> &LeadershipService {
        &self.leadership
    }

    /// Property map with points of interest.
    pub fn map(&self) -> &MapService {
        &self.map
    }

    /// Players currently online.
    pub fn online(&self) -> &OnlineService {
        &self.online
    }

    /// Player lookup by nickname.
    pub fn player(&self) -> &PlayerService {
        &self.player
    }

    /// Interview announcements.
    pub fn sobes(&self) -> &SobesService {
        &self.sobes
    }

    /// Global service status.
    pub fn status(&self) -> &StatusService {
        &self.status
    }
}

/// Builder for configuring and creating a [`Client`].
///
/// Each call records a [`ConfigOption`]; they are applied in call order when
/// [`build`](ClientBuilder::build) runs, so later calls win.
///
/// # Examples
///
/// ```no_run
/// use depscian::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), depscian::Error> {
/// let http = reqwest::Client::builder()
///     .timeout(Duration::from_secs(5))
///     .build()
///     .expect("http client");
///
/// let client = ClientBuilder::new("my-api-key")
///     .timeout(Duration::from_secs(60))
///     .http_client(http) // replaces the client, the 60s timeout is dropped
///     .build()?;
///
/// assert_eq!(client.timeout(), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    api_key: String,
    options: Vec<ConfigOption>,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            options: Vec::new(),
        }
    }

    /// Sets the base URL for all requests.
    pub fn base_url(self, url: impl Into<String>) -> Self {
        self.option(ConfigOption::base_url(url))
    }

    /// Sets the request timeout.
    pub fn timeout(self, timeout: Duration) -> Self {
        self.option(ConfigOption::timeout(timeout))
    }

    /// Replaces the whole HTTP client.
    pub fn http_client(self, client: reqwest::Client) -> Self {
        self.option(ConfigOption::http_client(client))
    }

    /// Adds an arbitrary configuration option.
    pub fn option(mut self, option: ConfigOption) -> Self {
        self.options.push(option);
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// See [`Client::new`].
    pub fn build(self) -> Result<Client> {
        Client::new(self.api_key, self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;
    use crate::Error;

    #[test]
    fn defaults_without_options() {
        let client = Client::new("key", []).unwrap();

        assert_eq!(client.base_url().as_str(), format!("{}/", DEFAULT_BASE_URL));
        assert_eq!(client.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn custom_client_after_timeout_wins() {
        let custom = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap();

        let client = Client::builder("key")
            .timeout(Duration::from_secs(5))
            .http_client(custom)
            .build()
            .unwrap();

        assert_eq!(client.timeout(), None);
    }

    #[test]
    fn failing_option_returns_no_client() {
        let result = Client::new("key", [ConfigOption::from_fn(|_| Err("nope".into()))]);
        assert!(matches!(result, Err(Error::OptionFailed(_))));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = Client::builder("key").base_url("::not a url::").build();
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn invalid_api_key_is_rejected() {
        let result = Client::new("line\nbreak", []);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn client_is_shareable_across_tasks() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Client>();
    }
}
