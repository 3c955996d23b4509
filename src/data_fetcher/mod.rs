pub mod api;
pub mod client;
pub mod models;

pub use client::DelClient;
pub use models::{Game, PlayerRecord, RefereeCrew, TournamentEntry};
