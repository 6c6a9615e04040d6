//! Morpion Solitaire terminal application.
//!
//! This is the main entry point for the interactive game.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser as _;
use morpion_app::{
    cli::{Cli, Command, normalize_nickname},
    persistence::SaveStore,
    session::{Outcome, Session},
    ui::{StdinSource, TextPresenter},
};
use morpion_game::Game;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let store = SaveStore::new(data_dir);

    match run(cli, store) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("morpion: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, store: SaveStore) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::New { nickname } => {
            let nickname = normalize_nickname(&nickname);
            let mut game = Game::new(nickname, cli.variant.into());
            game.set_filepath(store.available_path(game.nickname())?);
            log::info!("new {} game for {}", game.variant(), game.nickname());
            play(game, store)
        }
        Command::Load { file } => {
            let game = store.load(&file)?;
            log::info!(
                "resumed {} game for {} with {} lines",
                game.variant(),
                game.nickname(),
                game.lines_count()
            );
            play(game, store)
        }
        Command::Highscores => {
            let scores = store.scores()?;
            if scores.is_empty() {
                println!("No scores recorded yet.");
            } else {
                for (rank, entry) in scores.iter().enumerate() {
                    println!(
                        "{:>3}. {:<32} {:>4} lines  ({})",
                        rank + 1,
                        entry.nickname,
                        entry.lines,
                        entry.variant
                    );
                }
            }
            Ok(())
        }
    }
}

fn play(game: Game, store: SaveStore) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(game, store);
    let mut source = StdinSource::new();
    let mut presenter = TextPresenter::new();
    match session.run(&mut source, &mut presenter)? {
        Outcome::Finished { lines, rank } => {
            log::info!("game over with {lines} lines, rank {rank:?}");
        }
        Outcome::Interrupted => {
            log::info!("session interrupted, save kept");
        }
    }
    Ok(())
}
