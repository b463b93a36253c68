//! Resource-scoped facades over the endpoint client.
//!
//! Each service builds the endpoint parameters, issues the call through the
//! shared [`ApiClient`](crate::api::ApiClient) and unpacks the outcome with
//! [`unpack`](crate::unpack()). Services hold no per-call state and can be
//! used concurrently.

mod admins;
mod families;
mod fractions;
mod ghetto;
mod leadership;
mod map;
mod online;
mod player;
mod sobes;
mod status;

pub use admins::AdminsService;
pub use families::FamiliesService;
pub use fractions::FractionsService;
pub use ghetto::GhettoService;
pub use leadership::LeadershipService;
pub use map::MapService;
pub use online::OnlineService;
pub use player::PlayerService;
pub use sobes::SobesService;
pub use status::StatusService;
