// Theatre and art event commands

use super::{collection_path, not_found_with_id};
use crate::client::Client;
use crate::output::{write_field, write_table_header, write_table_row, OutputFormat};
use anyhow::Result;
use clap::Subcommand;
use marquee_core::{Category, EventFilter, TheatreArtEvent, TheatreArtKind};
use std::io::Write;

#[derive(Subcommand)]
pub enum TheatreArtsCommand {
    /// List theatre and art events, optionally filtered
    List {
        /// Case-insensitive part of the location
        #[arg(long, short)]
        location: Option<String>,

        /// Exact date (YYYY-MM-DD)
        #[arg(long, short)]
        date: Option<String>,

        /// Only "theatre" or only "art" events
        #[arg(long, short)]
        kind: Option<TheatreArtKind>,
    },

    /// Get theatre/art event by ID
    Get {
        /// Event ID
        id: String,
    },
}

pub async fn run(command: TheatreArtsCommand, client: &Client, output: OutputFormat) -> Result<()> {
    let mut out = std::io::stdout();
    match command {
        TheatreArtsCommand::List {
            location,
            date,
            kind,
        } => {
            let filter = EventFilter {
                location,
                date,
                kind,
            };
            list(client, output, &filter, &mut out).await
        }
        TheatreArtsCommand::Get { id } => get(client, output, &id, &mut out).await,
    }
}

async fn list(
    client: &Client,
    output: OutputFormat,
    filter: &EventFilter,
    out: &mut impl Write,
) -> Result<()> {
    let events: Vec<TheatreArtEvent> = client.get(&collection_path(Category::TheatresArts)).await?;
    let matching = filter.apply(&events);

    if !output.is_text() {
        return output.write_value(out, &matching);
    }

    if matching.is_empty() {
        writeln!(out, "No events found for the selected filters.")?;
        return Ok(());
    }

    write_table_header(
        out,
        &[
            ("ID", 4),
            ("TITLE", 34),
            ("TYPE", 7),
            ("DATE", 10),
            ("LOCATION", 12),
        ],
    )?;

    for event in matching {
        write_table_row(
            out,
            &[
                (&event.id, 4),
                (&event.title, 34),
                (&event.kind.to_string(), 7),
                (&event.date, 10),
                (&event.location, 12),
            ],
        )?;
    }

    Ok(())
}

async fn get(client: &Client, output: OutputFormat, id: &str, out: &mut impl Write) -> Result<()> {
    let event: TheatreArtEvent = client
        .get_by_id(&collection_path(Category::TheatresArts), id)
        .await
        .map_err(|e| not_found_with_id(e, id))?;

    if !output.is_text() {
        return output.write_value(out, &event);
    }

    write_field(out, "ID", &event.id)?;
    write_field(out, "Title", &event.title)?;
    write_field(out, "Type", &event.kind.to_string())?;
    write_field(out, "Date", &event.date)?;
    write_field(out, "Location", &event.location)?;
    write_field(out, "Image", &event.image)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::seed;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn list_text(filter: EventFilter) -> String {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/theatres-arts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(seed::theatre_arts()))
            .expect(1)
            .mount(&server)
            .await;

        let mut out = Vec::new();
        list(&Client::new(&server.uri()), OutputFormat::Text, &filter, &mut out)
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_kind_filter_keeps_only_art() {
        let text = list_text(EventFilter::new().with_kind(TheatreArtKind::Art)).await;

        assert!(text.contains("Indian Classical Dance Show"));
        assert!(text.contains("Modern Art Exhibition"));
        assert!(!text.contains("Hamlet"));
        assert!(!text.contains("Stand-up Comedy Night"));
    }

    #[tokio::test]
    async fn test_conflicting_filters_report_no_results() {
        let text = list_text(
            EventFilter::new()
                .with_location("mumbai")
                .with_kind(TheatreArtKind::Art),
        )
        .await;

        assert_eq!(text, "No events found for the selected filters.\n");
    }
}
