// Marquee CLI
//
// Design Decision: Use clap derive for ergonomic argument parsing.
// Design Decision: Support text/json/yaml output formats for scripting.
// Design Decision: Filters run locally on the fetched list; the API has no query parameters.

mod client;
mod commands;
mod output;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Marquee CLI - Browse concerts, sports and theatre/arts events")]
#[command(version)]
pub struct Cli {
    /// API base URL
    #[arg(
        long,
        env = "MARQUEE_API_URL",
        default_value = "http://localhost:5000"
    )]
    pub api_url: String,

    /// Output format
    #[arg(long, short, default_value = "text", value_parser = ["text", "json", "yaml"])]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse concerts
    Concerts {
        #[command(subcommand)]
        command: commands::concerts::ConcertsCommand,
    },

    /// Browse sports events
    Sports {
        #[command(subcommand)]
        command: commands::sports::SportsCommand,
    },

    /// Browse theatre and art events
    #[command(name = "theatres-arts")]
    TheatresArts {
        #[command(subcommand)]
        command: commands::theatre_arts::TheatreArtsCommand,
    },

    /// Ask the storefront assistant a question
    Chat {
        /// Message text to send
        message: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = client::Client::new(&cli.api_url);
    let output_format = output::OutputFormat::from_str(&cli.output);

    match cli.command {
        Commands::Concerts { command } => {
            commands::concerts::run(command, &client, output_format).await
        }
        Commands::Sports { command } => commands::sports::run(command, &client, output_format).await,
        Commands::TheatresArts { command } => {
            commands::theatre_arts::run(command, &client, output_format).await
        }
        Commands::Chat { message } => commands::chat::run(&client, output_format, message).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::TheatreArtKind;

    #[test]
    fn test_parse_list_with_filters() {
        let cli = Cli::try_parse_from([
            "marquee",
            "theatres-arts",
            "list",
            "--location",
            "mum",
            "--kind",
            "Theatre",
        ])
        .unwrap();

        assert_eq!(cli.api_url, "http://localhost:5000");
        match cli.command {
            Commands::TheatresArts {
                command: commands::theatre_arts::TheatreArtsCommand::List { location, date, kind },
            } => {
                assert_eq!(location.as_deref(), Some("mum"));
                assert!(date.is_none());
                assert_eq!(kind, Some(TheatreArtKind::Theatre));
            }
            _ => panic!("expected theatres-arts list"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        let result = Cli::try_parse_from(["marquee", "theatres-arts", "list", "--kind", "opera"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_get_and_output() {
        let cli = Cli::try_parse_from(["marquee", "-o", "json", "concerts", "get", "2"]).unwrap();
        assert_eq!(cli.output, "json");
        assert!(matches!(
            cli.command,
            Commands::Concerts {
                command: commands::concerts::ConcertsCommand::Get { ref id }
            } if id == "2"
        ));
    }
}
