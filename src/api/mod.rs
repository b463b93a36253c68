//! Low-level endpoint client.
//!
//! [`ApiClient`] issues exactly one HTTP request per operation and hands back
//! the raw [`ApiResponse`] envelope, or a [`TransportError`] if no status was
//! obtained. It does not interpret statuses; that is the job of
//! [`unpack`](crate::unpack()). Most callers go through the service facades on
//! [`Client`](crate::Client) instead.

mod params;
mod response;

pub use params::{FamilyParams, FindPlayerParams, FractionMembersParams, ServerParams};
pub use response::{status_line, ApiResponse};

use crate::auth::RequestEditor;
use crate::config::TransportConfig;
use crate::models::{
    AdminsList, FamiliesList, Family, FractionMembers, FractionsList, GhettoList, LeadersList,
    OnlineList, PlayerSearch, PropertyMap, ServiceStatus, SobesList, SubleadersList,
};
use crate::{Error, Result};
use hyper::ext::ReasonPhrase;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::time::{Duration, Instant};
use url::Url;

/// A failure that happened before any HTTP status was obtained.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// Connection, DNS, TLS, timeout or body read failure.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The endpoint path could not be joined onto the base URL.
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    /// A request editor refused the request.
    #[error("request editor failed: {0}")]
    Editor(#[source] Box<Error>),
}

impl TransportError {
    /// Returns `true` if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Http(e) if e.is_timeout())
    }
}

/// Endpoint client for the Depscian API.
///
/// Holds the HTTP client, the normalized base URL, the optional per-request
/// timeout and the request editors run on every outgoing request.
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: Url,
    timeout: Option<Duration>,
    editors: Vec<Box<dyn RequestEditor>>,
}

impl ApiClient {
    /// Builds an endpoint client from a fully applied configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the default HTTP client
    /// cannot be built.
    pub fn new(config: TransportConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        let http_client = match config.http_client {
            Some(client) => client,
            None => reqwest::Client::builder().build().map_err(|e| {
                Error::Configuration(format!("Failed to build HTTP client: {}", e))
            })?,
        };

        Ok(Self {
            http_client,
            base_url,
            timeout: config.timeout,
            editors: Vec::new(),
        })
    }

    /// Registers an editor run on every outgoing request.
    pub fn with_editor(mut self, editor: impl RequestEditor + 'static) -> Self {
        self.editors.push(Box::new(editor));
        self
    }

    /// The base URL every endpoint path is joined onto.
    ///
    /// Always ends with a `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The per-request timeout, if one is enforced on top of the HTTP client.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// `GET /admins`
    pub async fn get_server_admins(
        &self,
        params: &ServerParams,
    ) -> std::result::Result<ApiResponse<AdminsList>, TransportError> {
        self.get("admins", Some(params)).await
    }

    /// `GET /families`
    pub async fn get_families(
        &self,
        params: &ServerParams,
    ) -> std::result::Result<ApiResponse<FamiliesList>, TransportError> {
        self.get("families", Some(params)).await
    }

    /// `GET /family`
    pub async fn get_family(
        &self,
        params: &FamilyParams,
    ) -> std::result::Result<ApiResponse<Family>, TransportError> {
        self.get("family", Some(params)).await
    }

    /// `GET /fractions`
    pub async fn get_fractions_list(
        &self,
        params: &ServerParams,
    ) -> std::result::Result<ApiResponse<FractionsList>, TransportError> {
        self.get("fractions", Some(params)).await
    }

    /// `GET /fraction`
    pub async fn get_fraction_members(
        &self,
        params: &FractionMembersParams,
    ) -> std::result::Result<ApiResponse<FractionMembers>, TransportError> {
        self.get("fraction", Some(params)).await
    }

    /// `GET /ghetto`
    pub async fn get_ghetto_list(
        &self,
        params: &ServerParams,
    ) -> std::result::Result<ApiResponse<GhettoList>, TransportError> {
        self.get("ghetto", Some(params)).await
    }

    /// `GET /leaders`
    pub async fn get_leaders_list(
        &self,
        params: &ServerParams,
    ) -> std::result::Result<ApiResponse<LeadersList>, TransportError> {
        self.get("leaders", Some(params)).await
    }

    /// `GET /subleaders`
    pub async fn get_subleaders_list(
        &self,
        params: &ServerParams,
    ) -> std::result::Result<ApiResponse<SubleadersList>, TransportError> {
        self.get("subleaders", Some(params)).await
    }

    /// `GET /map`
    pub async fn get_property_map(
        &self,
        params: &ServerParams,
    ) -> std::result::Result<ApiResponse<PropertyMap>, TransportError> {
        self.get("map", Some(params)).await
    }

    /// `GET /online`
    pub async fn get_online_list(
        &self,
        params: &ServerParams,
    ) -> std::result::Result<ApiResponse<OnlineList>, TransportError> {
        self.get("online", Some(params)).await
    }

    /// `GET /player/find`
    pub async fn find_player(
        &self,
        params: &FindPlayerParams,
    ) -> std::result::Result<ApiResponse<PlayerSearch>, TransportError> {
        self.get("player/find", Some(params)).await
    }

    /// `GET /sobes`
    pub async fn get_sobes_list(
        &self,
        params: &ServerParams,
    ) -> std::result::Result<ApiResponse<SobesList>, TransportError> {
        self.get("sobes", Some(params)).await
    }

    /// `GET /status`
    pub async fn get_status(
        &self,
    ) -> std::result::Result<ApiResponse<ServiceStatus>, TransportError> {
        self.get::<(), _>("status", None).await
    }

    /// Executes a single GET request and reads the whole body.
    async fn get<Q, T>(
        &self,
        path: &str,
        query: Option<&Q>,
    ) -> std::result::Result<ApiResponse<T>, TransportError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.base_url.join(path)?;

        let mut builder = self.http_client.get(url);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let mut request = builder.build()?;
        for editor in &self.editors {
            editor
                .edit(&mut request)
                .map_err(|e| TransportError::Editor(Box::new(e)))?;
        }

        tracing::debug!(
            method = %request.method(),
            url = %request.url(),
            "Executing HTTP request"
        );

        let start_time = Instant::now();
        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let reason = response
            .extensions()
            .get::<ReasonPhrase>()
            .map(|phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned());
        let status_text = status_line(status, reason.as_deref());
        let headers = response.headers().clone();
        let raw_body = response.text().await?;

        tracing::debug!(
            status = status.as_u16(),
            latency_ms = start_time.elapsed().as_millis(),
            "Received HTTP response"
        );

        Ok(ApiResponse::decode(status, status_text, headers, raw_body))
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("editors", &self.editors.len())
            .finish()
    }
}

/// Parses the base URL and makes sure relative joins append to its path.
fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(Error::Configuration(format!(
            "Base URL cannot carry a path: {}",
            raw
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
