//! LIST command - List notes, optionally filtered by a search query.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, NoteView, make_request, output, truncate};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Only show notes whose content or title contains this text (case-sensitive)
    #[arg(short, long)]
    pub query: Option<String>,
}

/// Response from listing notes.
#[derive(Debug, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ListNotesResponse(pub Vec<NoteView>);

impl HumanReadable for ListNotesResponse {
    fn print_human(&self) {
        println!("{}", "Notes".green().bold());
        println!("{}", "=".repeat(80));
        println!();

        if self.0.is_empty() {
            println!("  {}", "(No notes)".dimmed());
            return;
        }

        for note in &self.0 {
            let title = note.title.as_deref().unwrap_or_default();
            println!("  {} {}", format!("#{}", note.id).yellow(), title.bold());
            let first_line = note.content.lines().next().unwrap_or_default();
            println!("    {}", truncate(first_line, 76).dimmed());
        }

        println!();
        println!("  {} {}", "Total:".cyan(), self.0.len());
    }
}

/// Execute the list command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: ListArgs,
) -> Result<()> {
    let url = format!("{}/notes", base_url);

    let mut request = client.get(&url);
    if let Some(query) = &args.query {
        request = request.query(&[("query", query)]);
    }

    let response: ListNotesResponse = make_request(request).await?;

    output(&response, human)
}
