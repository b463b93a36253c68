use crate::api::{ApiClient, FractionMembersParams, ServerParams};
use crate::models::{FractionMembers, FractionsList};
use crate::{unpack, Result};
use std::sync::Arc;

/// Fractions (factions) and their members.
#[derive(Debug, Clone)]
pub struct FractionsService {
    api: Arc<ApiClient>,
}

impl FractionsService {
    pub(crate) fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Lists the fractions on `server_id`.
    pub async fn list(&self, server_id: i64) -> Result<FractionsList> {
        let params = ServerParams { server_id };
        unpack(self.api.get_fractions_list(&params).await)
    }

    /// Lists the members of `fraction_id` on `server_id`.
    pub async fn get_members(
        &self,
        server_id: i64,
        fraction_id: impl Into<String>,
    ) -> Result<FractionMembers> {
        let params = FractionMembersParams {
            server_id,
            fraction_id: fraction_id.into(),
        };
        unpack(self.api.get_fraction_members(&params).await)
    }
}
