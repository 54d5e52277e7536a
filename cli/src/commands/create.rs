//! CREATE command - Create a new note.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::{HumanReadable, NoteView, make_request, output, read_content};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Note content (use @filename to read from file, or - for stdin)
    pub content: String,

    /// Optional title; untitled notes are shown with a prefix of their content
    #[arg(short, long)]
    pub title: Option<String>,
}

/// Request body for creating or replacing a note.
#[derive(Debug, Serialize)]
pub(crate) struct NoteRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
}

/// Response from creating a note.
#[derive(Debug, serde::Deserialize, Serialize)]
#[serde(transparent)]
pub struct CreateNoteResponse(pub NoteView);

impl HumanReadable for CreateNoteResponse {
    fn print_human(&self) {
        self.0.print_with_heading("Note created successfully!");
    }
}

/// Execute the create command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: CreateArgs,
) -> Result<()> {
    let url = format!("{}/notes", base_url);

    let request_body = NoteRequest {
        title: args.title,
        content: read_content(args.content)?,
    };

    let response: CreateNoteResponse = make_request(client.post(&url).json(&request_body)).await?;

    output(&response, human)
}
