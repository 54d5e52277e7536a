//! GET command - Fetch one note.

use anyhow::Result;
use clap::Args;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, NoteView, make_request, output};

/// Arguments for the get command.
#[derive(Args)]
pub struct GetArgs {
    /// Note ID to fetch
    pub id: i64,
}

/// Response from fetching a note.
#[derive(Debug, Deserialize, Serialize)]
#[serde(transparent)]
pub struct GetNoteResponse(pub NoteView);

impl HumanReadable for GetNoteResponse {
    fn print_human(&self) {
        self.0.print_fields();
    }
}

/// Execute the get command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: GetArgs,
) -> Result<()> {
    let url = format!("{}/notes/{}", base_url, args.id);

    let response: GetNoteResponse = make_request(client.get(&url)).await?;

    output(&response, human)
}
