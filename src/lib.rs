//! # Depscian - typed client for the Depscian statistics API
//!
//! Depscian exposes per-resource services (status, online players, player
//! lookup, fractions, families, leadership, map, admins, ghetto and interview
//! listings) over one shared HTTP transport. Every call performs a single
//! request and returns either the decoded payload or a classified [`Error`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use depscian::{Client, Error};
//! use serde::Deserialize;
//! use std::time::Duration;
//!
//! #[derive(Deserialize)]
//! struct Player {
//!     nickname: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let client = Client::builder("my-api-key")
//!         .timeout(Duration::from_secs(10))
//!         .build()?;
//!
//!     match client.player().find(1, "Nick_Name").await {
//!         Ok(found) => {
//!             let player: Player = found.parse().expect("player shape");
//!             println!("Found {}", player.nickname);
//!         }
//!         Err(Error::NotFound) => println!("No such player"),
//!         Err(e) => return Err(e),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Outcomes
//!
//! - **Value** - a 2xx response whose body decoded.
//! - **[`Error::NotFound`]** - HTTP 404, or a 2xx response with an empty or
//!   undecodable body.
//! - **Any other error** - [`Error::Execution`] when no status was obtained
//!   (connection failure, timeout), [`Error::Status`] for every other non-2xx.
//!
//! There is no retry, rate limiting, caching or pagination. Cancel a call by
//! dropping its future, or bound it with `tokio::time::timeout`.
//!
//! ## Configuration
//!
//! Options are applied in order; later ones win:
//!
//! ```no_run
//! use depscian::{Client, ConfigOption};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), depscian::Error> {
//! let client = Client::new(
//!     "my-api-key",
//!     [
//!         ConfigOption::base_url("https://api.depscian.tech/v2"),
//!         ConfigOption::timeout(Duration::from_secs(5)),
//!     ],
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
mod client;
pub mod config;
mod error;
pub mod models;
pub mod services;
mod unpack;

pub use auth::{ApiKeyAuth, RequestEditor, API_KEY_HEADER};
pub use client::{Client, ClientBuilder};
pub use config::{ConfigOption, TransportConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{BoxError, Error, Result};
pub use unpack::unpack;
