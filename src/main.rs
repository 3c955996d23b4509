// src/main.rs
mod cli;
mod logging;

use clap::Parser;
use cli::{Args, Command};
use del_app_helper::DelClient;
use del_app_helper::config::Config;
use del_app_helper::error::AppError;
use del_app_helper::lineup::{Side, render};
use futures::future::join_all;
use serde_json::json;
use std::collections::BTreeMap;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    info!("Logs are being written to: {log_file_path}");

    if args.command == Command::Config {
        return Config::display().await;
    }

    let config = Config::load().await?;
    let client = DelClient::new(config)?;

    match args.command {
        Command::Lineup {
            games,
            visitor,
            json,
        } => print_lineups(&client, &games, Side::from_home_match(!visitor), json).await?,
        Command::Referees { game } => {
            let (names, _) = client.referees(game).await?;
            if names.is_empty() {
                println!("No referees listed for game {game}");
            }
            for name in names {
                println!("{name}");
            }
        }
        Command::Games { tournament } => {
            let client = with_tournament(client, tournament).await?;
            let games = client.games(tournament).await?;
            println!("{}", serde_json::to_string_pretty(&games)?);
        }
        Command::FindGame { date_time, team } => {
            let client = with_tournament(client, None).await?;
            match client.game_filter(&date_time, &team).await? {
                Some(game) => println!("{}", serde_json::to_string_pretty(&game)?),
                None => println!("No game at {date_time} for {team}"),
            }
        }
        Command::Standings { table } => {
            let standings = client.standings(table).await?;
            println!("{}", serde_json::to_string_pretty(&standings)?);
        }
        Command::Tournament => {
            let resolved = client.resolve_tournament_id().await?;
            if let Some(id) = resolved.config().tournament_id {
                println!("{id}");
            }
        }
        Command::Shifts { game } => {
            let shifts = client.shifts(game).await?;
            println!("{}", serde_json::to_string_pretty(&shifts)?);
        }
        Command::Config => {}
    }

    Ok(())
}

/// Uses the configured tournament, or looks up the current one when neither
/// the config nor the command line names one.
async fn with_tournament(client: DelClient, explicit: Option<i64>) -> Result<DelClient, AppError> {
    if explicit.is_some() || client.config().tournament_id.is_some() {
        return Ok(client);
    }
    client.resolve_tournament_id().await
}

/// Fetches every requested lineup concurrently and prints them in request
/// order. One failed game does not hide the others; the first error is
/// returned after everything has been printed.
async fn print_lineups(
    client: &DelClient,
    games: &[u32],
    side: Side,
    as_json: bool,
) -> Result<(), AppError> {
    let results = join_all(games.iter().map(|&game| client.lineup_dict(game, side))).await;

    let mut first_error = None;
    for (game, result) in games.iter().zip(results) {
        match result {
            Ok((index, raw)) if as_json => {
                let slots: BTreeMap<u8, BTreeMap<String, String>> = index
                    .line_numbers()
                    .map(|line| (line, index.named_slots(line)))
                    .collect();
                let output = json!({
                    "game": game,
                    "side": side,
                    "lines": index,
                    "slots": slots,
                    "raw": raw,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            Ok((index, _)) => {
                if games.len() > 1 {
                    println!("# {game} ({side})\n");
                }
                print!("{}", render(&index));
            }
            Err(e) => {
                error!("Lineup for game {game} failed: {e}");
                eprintln!("Game {game}: {e}");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
