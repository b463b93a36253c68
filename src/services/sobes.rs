use crate::api::{ApiClient, ServerParams};
use crate::models::SobesList;
use crate::{unpack, Result};
use std::sync::Arc;

/// Interview ("sobes") announcements.
#[derive(Debug, Clone)]
pub struct SobesService {
    api: Arc<ApiClient>,
}

impl SobesService {
    pub(crate) fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn get(&self, server_id: i64) -> Result<SobesList> {
        let params = ServerParams { server_id };
        unpack(self.api.get_sobes_list(&params).await)
    }
}
