//! Example looking up a player and the server they play on.
//!
//! This example shows how to:
//! - Create a client with an API key and a timeout
//! - Tell "not found" apart from other failures
//! - View a payload through your own types
//!
//! Run with: `DEPSCIAN_API_KEY=... cargo run --example player_lookup -- 1 Nick_Name`

use depscian::{Client, Error};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Player {
    #[serde(default)]
    nickname: Option<String>,
    #[serde(default)]
    level: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("depscian=debug,player_lookup=info")
        .init();

    let api_key = std::env::var("DEPSCIAN_API_KEY")?;
    let mut args = std::env::args().skip(1);
    let server_id: i64 = args.next().unwrap_or_else(|| "1".to_string()).parse()?;
    let nickname = args.next().unwrap_or_else(|| "Nick_Name".to_string());

    let client = Client::builder(api_key)
        .timeout(Duration::from_secs(10))
        .build()?;

    println!("=== Service Status ===");
    let status = client.status().get().await?;
    println!("{}", serde_json::to_string_pretty(&status)?);
    println!();

    println!("=== Player Lookup ===");
    match client.player().find(server_id, &nickname).await {
        Ok(found) => {
            let player: Player = found.parse()?;
            println!("Found: {:?}", player);
        }
        Err(Error::NotFound) => println!("{} is not on server {}", nickname, server_id),
        Err(e) => {
            eprintln!("Lookup failed: {}", e);
            if let Some(body) = e.raw_response() {
                eprintln!("  Raw response: {}", body);
            }
        }
    }

    Ok(())
}
