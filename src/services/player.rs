use crate::api::{ApiClient, FindPlayerParams};
use crate::models::PlayerSearch;
use crate::{unpack, Result};
use std::sync::Arc;

/// Player lookup.
#[derive(Debug, Clone)]
pub struct PlayerService {
    api: Arc<ApiClient>,
}

impl PlayerService {
    pub(crate) fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Finds a player on `server_id` by exact nickname.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`](crate::Error::NotFound) when no such
    /// player exists.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example() -> Result<(), depscian::Error> {
    /// let client = depscian::Client::new("my-api-key", [])?;
    /// let player = client.player().find(1, "Nick_Name").await?;
    /// println!("{}", *player);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn find(&self, server_id: i64, nickname: impl Into<String>) -> Result<PlayerSearch> {
        let params = FindPlayerParams {
            server_id,
            nickname: nickname.into(),
        };
        unpack(self.api.find_player(&params).await)
    }
}
