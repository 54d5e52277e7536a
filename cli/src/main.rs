//! Command-line client for the notes service.
//!
//! Commands:
//! - create: Create a note
//! - list: List notes, optionally filtered with --query
//! - get: Fetch one note
//! - update: Replace a note's title and content
//! - delete: Delete a note
//!
//! Configuration via environment:
//! - NOTES_URL: Base URL of the notes server (default: http://localhost:3000)

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    create::CreateArgs, delete::DeleteArgs, get::GetArgs, list::ListArgs, update::UpdateArgs,
};

/// Notes service CLI
///
/// Prints JSON by default; pass --human for formatted output.
#[derive(Parser)]
#[command(name = "notes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Notes server URL
    #[arg(
        long,
        env = "NOTES_URL",
        default_value = "http://localhost:3000",
        global = true
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new note
    Create(CreateArgs),

    /// List notes
    List(ListArgs),

    /// Show a note
    Get(GetArgs),

    /// Replace a note's title and content
    Update(UpdateArgs),

    /// Delete a note
    Delete(DeleteArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let url = cli.url.trim_end_matches('/');

    let result = match cli.command {
        Commands::Create(args) => commands::create::execute(&client, url, cli.human, args).await,
        Commands::List(args) => commands::list::execute(&client, url, cli.human, args).await,
        Commands::Get(args) => commands::get::execute(&client, url, cli.human, args).await,
        Commands::Update(args) => commands::update::execute(&client, url, cli.human, args).await,
        Commands::Delete(args) => commands::delete::execute(&client, url, cli.human, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create_with_title() {
        let cli = Cli::try_parse_from(["notes", "create", "Hello world", "--title", "Hi"]).unwrap();
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.content, "Hello world");
                assert_eq!(args.title.as_deref(), Some("Hi"));
            }
            _ => panic!("expected create"),
        }
    }

    #[test]
    fn test_parse_list_query() {
        let cli = Cli::try_parse_from(["notes", "--human", "list", "-q", "milk"]).unwrap();
        assert!(cli.human);
        match cli.command {
            Commands::List(args) => assert_eq!(args.query.as_deref(), Some("milk")),
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_parse_rejects_non_integer_id() {
        assert!(Cli::try_parse_from(["notes", "get", "abc"]).is_err());
    }
}
