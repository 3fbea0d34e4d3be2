// Concert commands

use super::{collection_path, not_found_with_id};
use crate::client::Client;
use crate::output::{write_field, write_table_header, write_table_row, OutputFormat};
use anyhow::Result;
use clap::Subcommand;
use marquee_core::{Category, ConcertEvent, EventFilter};
use std::io::Write;

#[derive(Subcommand)]
pub enum ConcertsCommand {
    /// List concerts, optionally filtered
    List {
        /// Case-insensitive part of the city name
        #[arg(long, short)]
        location: Option<String>,

        /// Exact date (YYYY-MM-DD)
        #[arg(long, short)]
        date: Option<String>,
    },

    /// Get concert by ID
    Get {
        /// Concert ID
        id: String,
    },
}

pub async fn run(command: ConcertsCommand, client: &Client, output: OutputFormat) -> Result<()> {
    let mut out = std::io::stdout();
    match command {
        ConcertsCommand::List { location, date } => {
            let filter = EventFilter {
                location,
                date,
                kind: None,
            };
            list(client, output, &filter, &mut out).await
        }
        ConcertsCommand::Get { id } => get(client, output, &id, &mut out).await,
    }
}

async fn list(
    client: &Client,
    output: OutputFormat,
    filter: &EventFilter,
    out: &mut impl Write,
) -> Result<()> {
    let concerts: Vec<ConcertEvent> = client.get(&collection_path(Category::Concerts)).await?;
    let matching = filter.apply(&concerts);

    if !output.is_text() {
        return output.write_value(out, &matching);
    }

    if matching.is_empty() {
        writeln!(out, "No concerts found.")?;
        return Ok(());
    }

    write_table_header(
        out,
        &[
            ("ID", 4),
            ("NAME", 28),
            ("DATE", 10),
            ("TIME", 5),
            ("VENUE", 22),
            ("CITY", 12),
            ("PRICE", 7),
        ],
    )?;

    for concert in matching {
        let price = format!("₹{}", concert.price);
        write_table_row(
            out,
            &[
                (&concert.id, 4),
                (&concert.name, 28),
                (&concert.date, 10),
                (&concert.time, 5),
                (&concert.venue, 22),
                (&concert.city, 12),
                (&price, 7),
            ],
        )?;
    }

    Ok(())
}

async fn get(client: &Client, output: OutputFormat, id: &str, out: &mut impl Write) -> Result<()> {
    let concert: ConcertEvent = client
        .get_by_id(&collection_path(Category::Concerts), id)
        .await
        .map_err(|e| not_found_with_id(e, id))?;

    if !output.is_text() {
        return output.write_value(out, &concert);
    }

    write_field(out, "ID", &concert.id)?;
    write_field(out, "Name", &concert.name)?;
    write_field(out, "Date", &concert.date)?;
    write_field(out, "Time", &concert.time)?;
    write_field(out, "Venue", &concert.venue)?;
    write_field(out, "City", &concert.city)?;
    write_field(out, "Price", &format!("₹{}", concert.price))?;
    write_field(out, "Image", &concert.image)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::seed;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve_concerts(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/api/concerts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(seed::concerts()))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_list_filters_by_city() {
        let server = MockServer::start().await;
        serve_concerts(&server).await;

        let mut out = Vec::new();
        let filter = EventFilter::new().with_location("BENGAL");
        list(&Client::new(&server.uri()), OutputFormat::Text, &filter, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Prateek Kuhad India Tour"));
        assert!(!text.contains("Arijit Singh Live"));
    }

    #[tokio::test]
    async fn test_list_without_matches_reports_no_results() {
        let server = MockServer::start().await;
        serve_concerts(&server).await;

        let mut out = Vec::new();
        let filter = EventFilter::new().with_date("1999-01-01");
        list(&Client::new(&server.uri()), OutputFormat::Text, &filter, &mut out)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "No concerts found.\n");
    }

    #[tokio::test]
    async fn test_get_with_query_characters_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/concerts/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&seed::concerts()[0]))
            .expect(0)
            .mount(&server)
            .await;

        let client = Client::new(&server.uri());
        for id in ["1?x", "1#frag"] {
            let mut out = Vec::new();
            let err = get(&client, OutputFormat::Json, id, &mut out)
                .await
                .unwrap_err();

            assert_eq!(err.to_string(), format!("Not Found: {}", id));
            assert!(out.is_empty());
        }
    }

    #[tokio::test]
    async fn test_get_renders_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/concerts/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&seed::concerts()[0]))
            .expect(1)
            .mount(&server)
            .await;

        let mut out = Vec::new();
        get(&Client::new(&server.uri()), OutputFormat::Text, "1", &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Name:      Arijit Singh Live"));
        assert!(text.contains("Price:     ₹1499"));
    }
}
