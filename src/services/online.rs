use crate::api::{ApiClient, ServerParams};
use crate::models::OnlineList;
use crate::{unpack, Result};
use std::sync::Arc;

/// Players currently online.
#[derive(Debug, Clone)]
pub struct OnlineService {
    api: Arc<ApiClient>,
}

impl OnlineService {
    pub(crate) fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Lists the players online on `server_id` right now.
    pub async fn get(&self, server_id: i64) -> Result<OnlineList> {
        let params = ServerParams { server_id };
        unpack(self.api.get_online_list(&params).await)
    }
}
