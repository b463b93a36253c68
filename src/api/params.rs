//! Query parameters for each endpoint.

use serde::Serialize;

/// Parameters for endpoints that take only a server identifier.
///
/// Used by admins, families, fractions, ghetto, leaders, subleaders, map,
/// online and sobes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerParams {
    pub server_id: i64,
}

/// Parameters for `GET /family`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyParams {
    pub server_id: i64,
    pub fam_id: i64,
}

/// Parameters for `GET /fraction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FractionMembersParams {
    pub server_id: i64,
    pub fraction_id: String,
}

/// Parameters for `GET /player/find`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindPlayerParams {
    pub server_id: i64,
    pub nickname: String,
}
