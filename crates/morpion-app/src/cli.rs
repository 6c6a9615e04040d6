//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use morpion_game::Variant;

use crate::persistence::NICKNAME_LENGTH;

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    /// Rule variant to play.
    #[arg(long, value_enum, default_value_t = VariantArg::Touching, global = true)]
    pub variant: VariantArg,
    /// Directory for save files and high scores (defaults to the current
    /// directory).
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start a new game.
    New {
        /// Player nickname used for save files and the score table.
        nickname: String,
    },
    /// Resume a saved game.
    Load {
        /// Path to a save file.
        file: PathBuf,
    },
    /// Show the high-score table.
    Highscores,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum VariantArg {
    /// Played lines may touch: only shared segments are forbidden.
    #[value(name = "5t")]
    Touching,
    /// Played lines must be disjoint except at their endpoints.
    #[value(name = "5d")]
    Disjoint,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Touching => Variant::Touching,
            VariantArg::Disjoint => Variant::Disjoint,
        }
    }
}

/// Makes a nickname safe to use as a file-name stem: non-alphanumeric
/// characters become `_`, overlong names are truncated, and an empty
/// result falls back to `"player"`.
pub fn normalize_nickname(raw: &str) -> String {
    let mut name: String = raw
        .chars()
        .take(NICKNAME_LENGTH)
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if name.chars().all(|c| c == '_') {
        name = "player".to_owned();
    }
    name
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_variant_flag_parses() {
        let cli = Cli::parse_from(["morpion", "new", "ada", "--variant", "5d"]);
        assert!(matches!(Variant::from(cli.variant), Variant::Disjoint));
        let cli = Cli::parse_from(["morpion", "new", "ada"]);
        assert!(matches!(Variant::from(cli.variant), Variant::Touching));
    }

    #[test]
    fn test_normalize_nickname() {
        assert_eq!(normalize_nickname("ada"), "ada");
        assert_eq!(normalize_nickname("ada lovelace!"), "ada_lovelace_");
        assert_eq!(normalize_nickname(""), "player");
        assert_eq!(normalize_nickname("../.."), "player");
        assert_eq!(normalize_nickname(&"x".repeat(100)).len(), NICKNAME_LENGTH);
    }
}
