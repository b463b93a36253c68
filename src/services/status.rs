use crate::api::ApiClient;
use crate::models::ServiceStatus;
use crate::{unpack, Result};
use std::sync::Arc;

/// Global service status.
#[derive(Debug, Clone)]
pub struct StatusService {
    api: Arc<ApiClient>,
}

impl StatusService {
    pub(crate) fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Fetches the status of the whole service. Not scoped to a server.
    pub async fn get(&self) -> Result<ServiceStatus> {
        unpack(self.api.get_status().await)
    }
}
