pub mod games;
pub mod players;
pub mod referees;

pub use games::{Game, TournamentEntry, find_game};
pub use players::{Jersey, PlayerRecord};
pub use referees::{Referee, RefereeCrew};
