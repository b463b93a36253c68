use crate::api::{ApiClient, ServerParams};
use crate::models::GhettoList;
use crate::{unpack, Result};
use std::sync::Arc;

/// Ghetto territories.
#[derive(Debug, Clone)]
pub struct GhettoService {
    api: Arc<ApiClient>,
}

impl GhettoService {
    pub(crate) fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn get(&self, server_id: i64) -> Result<GhettoList> {
        let params = ServerParams { server_id };
        unpack(self.api.get_ghetto_list(&params).await)
    }
}
