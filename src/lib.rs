//! DEL (Deutsche Eishockey Liga) API helper library
//!
//! This library wraps the league's mobile form API and web JSON API, and turns
//! match rosters into line-by-line lineup reports.
//!
//! # Examples
//!
//! ```rust,no_run
//! use del_app_helper::{Config, DelClient, Side};
//! use del_app_helper::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = DelClient::new(config)?;
//!
//!     // Fetch and render the home lineup of a match
//!     let report = client.lineup_format(1523, Side::Home).await?;
//!     print!("{}", report.text());
//!
//!     // Line blocks keyed r1..r5
//!     for (line, block) in report.rendered.by_line() {
//!         println!("{line}:\n{block}");
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod lineup;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::DelClient;
pub use data_fetcher::models::{Game, TournamentEntry};
pub use error::AppError;
pub use lineup::{LineSlot, LineupIndex, LineupReport, RenderedLineup, Side, decode, render};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
