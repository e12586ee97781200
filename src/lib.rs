//! Client library for the xmlsoccer.com football data web service.
//!
//! The service answers form-encoded HTTP POST requests with XML documents.
//! [`Client`] wraps the query operations (leagues, fixtures, teams) and
//! deserializes the payloads into typed results.
//!
//! ```no_run
//! use xmlsoccer_rs::Client;
//!
//! # async fn run() -> Result<(), xmlsoccer_rs::Error> {
//! let client = Client::demo("your-api-key");
//! for league in client.get_all_leagues().await? {
//!     println!("{} ({})", league.name, league.id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod models;
pub mod models_external;
pub mod rest_client;

pub use models::MatchStatus;
pub use models_external::{League, Match, Team};
pub use rest_client::{Client, Error, DEMO_URL, FULL_URL};
