// Chat command: one question, one answer

use crate::client::Client;
use crate::output::OutputFormat;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Serialize)]
struct ChatRequest {
    message: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatResponse {
    reply: String,
}

pub async fn run(client: &Client, output: OutputFormat, message: String) -> Result<()> {
    let response: ChatResponse = client.post("/chat", &ChatRequest { message }).await?;

    let mut out = std::io::stdout();
    if output.is_text() {
        writeln!(out, "{}", response.reply)?;
        Ok(())
    } else {
        output.write_value(&mut out, &response)
    }
}
