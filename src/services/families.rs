use crate::api::{ApiClient, FamilyParams, ServerParams};
use crate::models::{FamiliesList, Family};
use crate::{unpack, Result};
use std::sync::Arc;

/// Player families.
#[derive(Debug, Clone)]
pub struct FamiliesService {
    api: Arc<ApiClient>,
}

impl FamiliesService {
    pub(crate) fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Lists every family on `server_id`.
    pub async fn list(&self, server_id: i64) -> Result<FamiliesList> {
        let params = ServerParams { server_id };
        unpack(self.api.get_families(&params).await)
    }

    /// Fetches one family by its numeric id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`](crate::Error::NotFound) if the server has
    /// no family with that id.
    pub async fn get(&self, server_id: i64, fam_id: i64) -> Result<Family> {
        let params = FamilyParams { server_id, fam_id };
        unpack(self.api.get_family(&params).await)
    }
}
