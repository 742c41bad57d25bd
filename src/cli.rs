use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "chess.com ETL pipeline")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Fetch profile, stats and game archives from chess.com into the data directory
    Fetch {
        /// chess.com username to fetch data for
        username: String,
    },
    /// Normalize raw data into player_profile.json and match_history.json
    Process {
        /// Player whose perspective games are normalized from
        username: String,
    },
    /// Store the normalized collections in the SQLite database
    Store,
    /// Fetch, process and store in one go
    Run {
        /// chess.com username to run the pipeline for
        username: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_command() {
        let cli = Cli::try_parse_from(["chess_etl", "run", "hikaru"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Run {
                username: "hikaru".to_string()
            }
        );
    }

    #[test]
    fn test_store_takes_no_username() {
        assert!(Cli::try_parse_from(["chess_etl", "store", "hikaru"]).is_err());
        let cli = Cli::try_parse_from(["chess_etl", "store"]).unwrap();
        assert_eq!(cli.command, Command::Store);
    }
}
