use crate::api::{ApiClient, ServerParams};
use crate::models::PropertyMap;
use crate::{unpack, Result};
use std::sync::Arc;

/// Property map with points of interest.
#[derive(Debug, Clone)]
pub struct MapService {
    api: Arc<ApiClient>,
}

impl MapService {
    pub(crate) fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn get(&self, server_id: i64) -> Result<PropertyMap> {
        let params = ServerParams { server_id };
        unpack(self.api.get_property_map(&params).await)
    }
}
