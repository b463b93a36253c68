use crate::api::{ApiClient, ServerParams};
use crate::models::AdminsList;
use crate::{unpack, Result};
use std::sync::Arc;

/// Server administrators.
#[derive(Debug, Clone)]
pub struct AdminsService {
    api: Arc<ApiClient>,
}

impl AdminsService {
    pub(crate) fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Lists the administrators of `server_id`.
    pub async fn get(&self, server_id: i64) -> Result<AdminsList> {
        let params = ServerParams { server_id };
        unpack(self.api.get_server_admins(&params).await)
    }
}
