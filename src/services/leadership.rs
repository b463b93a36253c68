use crate::api::{ApiClient, ServerParams};
use crate::models::{LeadersList, SubleadersList};
use crate::{unpack, Result};
use std::sync::Arc;

/// Fraction leaders and their deputies.
#[derive(Debug, Clone)]
pub struct LeadershipService {
    api: Arc<ApiClient>,
}

impl LeadershipService {
    pub(crate) fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Lists the current fraction leaders on `server_id`.
    pub async fn get_leaders(&self, server_id: i64) -> Result<LeadersList> {
        let params = ServerParams { server_id };
        unpack(self.api.get_leaders_list(&params).await)
    }

    /// Lists the deputy leaders on `server_id`.
    pub async fn get_subleaders(&self, server_id: i64) -> Result<SubleadersList> {
        let params = ServerParams { server_id };
        unpack(self.api.get_subleaders_list(&params).await)
    }
}
