//! CLI argument definitions for Roster.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `list` | List every student |
//! | `get` | Fetch one student by id |
//! | `create` | Create a student |
//! | `update` | Replace a student's name and age |
//! | `delete` | Delete one student |
//! | `delete-all` | Delete every student (requires `--confirm`) |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--base-url` | `$ROSTER_BASE_URL` or the hosted service | Service origin |
//! | `--api-key` | `$ROSTER_API_KEY` | Value sent as `X-API-Key` |
//! | `--timeout-secs` | `$ROSTER_TIMEOUT_SECS` or `60` | Connect and request timeout |
//! | `--pretty` | `false` | Pretty-print JSON output |
//!
//! # Examples
//!
//! ```bash
//! roster list --pretty
//! roster create --name Ana --age 20
//! roster update 5 --name Bob --age 21
//! roster delete-all --confirm
//! ```

use clap::{Args, Parser, Subcommand};

/// Command-line client for the remote student service.
#[derive(Debug, Parser)]
#[command(
    name = "roster",
    author,
    version,
    about = "Command-line client for the remote student service"
)]
pub struct Cli {
    /// Service origin, e.g. https://students.example.com/.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// API key sent in the X-API-Key header.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Connect and request timeout in seconds.
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every student.
    List,

    /// Fetch one student by id.
    Get(IdArgs),

    /// Create a student. The server assigns the id.
    Create(DraftArgs),

    /// Replace the name and age of an existing student.
    Update(UpdateArgs),

    /// Delete one student.
    Delete(IdArgs),

    /// Delete every student. Refused unless --confirm is given.
    DeleteAll(DeleteAllArgs),
}

#[derive(Debug, Args)]
pub struct IdArgs {
    /// Student id.
    pub id: i64,
}

#[derive(Debug, Args)]
pub struct DraftArgs {
    /// Student name, sent as given.
    #[arg(long)]
    pub name: String,

    /// Student age.
    #[arg(long, allow_negative_numbers = true)]
    pub age: i64,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Student id.
    pub id: i64,

    #[command(flatten)]
    pub draft: DraftArgs,
}

#[derive(Debug, Args)]
pub struct DeleteAllArgs {
    /// Confirm the bulk delete.
    #[arg(long, default_value_t = false)]
    pub confirm: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn update_parses_id_and_draft() {
        let cli = Cli::try_parse_from([
            "roster", "update", "5", "--name", "Bob", "--age", "21", "--api-key", "k",
        ])
        .expect("parses");

        match cli.command {
            Command::Update(args) => {
                assert_eq!(args.id, 5);
                assert_eq!(args.draft.name, "Bob");
                assert_eq!(args.draft.age, 21);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn delete_all_defaults_to_unconfirmed() {
        let cli = Cli::try_parse_from(["roster", "delete-all"]).expect("parses");
        assert!(matches!(
            cli.command,
            Command::DeleteAll(DeleteAllArgs { confirm: false })
        ));
    }
}
