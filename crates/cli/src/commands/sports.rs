// Sports event commands

use super::{collection_path, not_found_with_id};
use crate::client::Client;
use crate::output::{write_field, write_table_header, write_table_row, OutputFormat};
use anyhow::Result;
use clap::Subcommand;
use marquee_core::{Category, EventFilter, SportsEvent};
use std::io::Write;

#[derive(Subcommand)]
pub enum SportsCommand {
    /// List sports events, optionally filtered
    List {
        /// Case-insensitive part of the location
        #[arg(long, short)]
        location: Option<String>,

        /// Exact date (YYYY-MM-DD)
        #[arg(long, short)]
        date: Option<String>,
    },

    /// Get sports event by ID
    Get {
        /// Sports event ID
        id: String,
    },
}

pub async fn run(command: SportsCommand, client: &Client, output: OutputFormat) -> Result<()> {
    let mut out = std::io::stdout();
    match command {
        SportsCommand::List { location, date } => {
            let filter = EventFilter {
                location,
                date,
                kind: None,
            };
            list(client, output, &filter, &mut out).await
        }
        SportsCommand::Get { id } => get(client, output, &id, &mut out).await,
    }
}

async fn list(
    client: &Client,
    output: OutputFormat,
    filter: &EventFilter,
    out: &mut impl Write,
) -> Result<()> {
    let events: Vec<SportsEvent> = client.get(&collection_path(Category::Sports)).await?;
    let matching = filter.apply(&events);

    if !output.is_text() {
        return output.write_value(out, &matching);
    }

    if matching.is_empty() {
        writeln!(out, "No sports events match your filters.")?;
        return Ok(());
    }

    write_table_header(
        out,
        &[("ID", 4), ("TITLE", 28), ("DATE", 10), ("LOCATION", 16)],
    )?;

    for event in matching {
        write_table_row(
            out,
            &[
                (&event.id, 4),
                (&event.title, 28),
                (&event.date, 10),
                (&event.location, 16),
            ],
        )?;
    }

    Ok(())
}

async fn get(client: &Client, output: OutputFormat, id: &str, out: &mut impl Write) -> Result<()> {
    let event: SportsEvent = client
        .get_by_id(&collection_path(Category::Sports), id)
        .await
        .map_err(|e| not_found_with_id(e, id))?;

    if !output.is_text() {
        return output.write_value(out, &event);
    }

    write_field(out, "ID", &event.id)?;
    write_field(out, "Title", &event.title)?;
    write_field(out, "Date", &event.date)?;
    write_field(out, "Location", &event.location)?;
    write_field(out, "Image", &event.image)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::seed;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve_sports(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/api/sports"))
            .respond_with(ResponseTemplate::new(200).set_body_json(seed::sports()))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_unmatched_location_reports_no_results_after_one_fetch() {
        let server = MockServer::start().await;
        serve_sports(&server).await;

        let mut out = Vec::new();
        let filter = EventFilter::new().with_location("Atlantis");
        list(&Client::new(&server.uri()), OutputFormat::Text, &filter, &mut out)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No sports events match your filters.\n"
        );
    }

    #[tokio::test]
    async fn test_json_output_keeps_filtered_records_in_order() {
        let server = MockServer::start().await;
        serve_sports(&server).await;

        let mut out = Vec::new();
        list(
            &Client::new(&server.uri()),
            OutputFormat::Json,
            &EventFilter::new().with_location("a"),
            &mut out,
        )
        .await
        .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let titles: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["title"].as_str().unwrap())
            .collect();
        assert_eq!(
            titles,
            vec!["IPL Final 2025", "Pro Kabaddi League", "Indian Super League"]
        );
    }

    #[tokio::test]
    async fn test_get_missing_id_surfaces_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/sports/42"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({ "error": "Sports event not found" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut out = Vec::new();
        let err = get(&Client::new(&server.uri()), OutputFormat::Text, "42", &mut out)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Sports event not found: 42");
        assert!(out.is_empty());
    }
}
