use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// DEL API helper
///
/// Queries the Deutsche Eishockey Liga mobile and web APIs and prints match
/// lineups grouped by line.
///
/// Endpoints are read from the config file, or from the DEL_MOBILE_API and
/// DEL_API environment variables when no config file exists.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging. Logs are also written to stdout.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the lineup of one or more games, fetched concurrently.
    Lineup {
        /// Game ids
        #[arg(required = true)]
        games: Vec<u32>,

        /// Show the visiting team instead of the home team.
        #[arg(long)]
        visitor: bool,

        /// Print the decoded line index and raw roster as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the referees of a game, head referees first.
    Referees { game: u32 },

    /// List the games of a tournament.
    Games {
        /// Tournament id. Defaults to the configured one, or the current one.
        #[arg(long)]
        tournament: Option<i64>,
    },

    /// Find the game starting at DATE_TIME in which TEAM plays.
    FindGame {
        /// Start time exactly as the API reports it
        date_time: String,
        /// Team code, home or guest
        team: String,
    },

    /// Print the standings table.
    Standings {
        /// Table id
        #[arg(long)]
        table: Option<u32>,
    },

    /// Print the current tournament id.
    Tournament,

    /// Print the shift data of a game.
    Shifts { game: u32 },

    /// List current configuration settings.
    Config,
}
