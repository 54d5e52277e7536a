//! UPDATE command - Replace a note's title and content.

use anyhow::Result;
use clap::Args;
use serde::{Deserialize, Serialize};

use super::create::NoteRequest;
use super::{HumanReadable, NoteView, make_request, output, read_content};

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Note ID to update
    pub id: i64,

    /// New content (use @filename to read from file, or - for stdin)
    pub content: String,

    /// New title; omitting it clears the stored title
    #[arg(short, long)]
    pub title: Option<String>,
}

/// Response from updating a note.
#[derive(Debug, Deserialize, Serialize)]
#[serde(transparent)]
pub struct UpdateNoteResponse(pub NoteView);

impl HumanReadable for UpdateNoteResponse {
    fn print_human(&self) {
        self.0.print_with_heading("Note updated successfully!");
    }
}

/// Execute the update command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: UpdateArgs,
) -> Result<()> {
    let url = format!("{}/notes/{}", base_url, args.id);

    let request_body = NoteRequest {
        title: args.title,
        content: read_content(args.content)?,
    };

    let response: UpdateNoteResponse = make_request(client.put(&url).json(&request_body)).await?;

    output(&response, human)
}
