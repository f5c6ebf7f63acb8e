// MindWell - Student wellness chat proxy
// Main entry point

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::prelude::*;

use mindwell::config::load_config;
use mindwell::crisis::CrisisDetector;
use mindwell::providers::create_provider;
use mindwell::server::WellnessServer;
use mindwell::text::TextNormalizer;

#[derive(Parser, Debug)]
#[command(name = "mindwell")]
#[command(about = "Student wellness chat proxy with crisis triage", version)]
struct Args {
    /// Run mode (defaults to serve)
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Parser, Debug)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Bind address (overrides config and MINDWELL_BIND)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Check a message against the crisis keywords without calling the model
    Triage {
        /// Message text
        #[arg(required_unless_present = "list")]
        message: Option<String>,

        /// List every category and its trigger phrases instead
        #[arg(long, conflicts_with = "message")]
        list: bool,
    },
    /// Print the normalized form of a transcript
    Normalize {
        /// Transcript text
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing();

    match args.command {
        Some(Command::Triage { list: true, .. }) => {
            print!("{}", format_keyword_list(&CrisisDetector::new()));
            Ok(())
        }
        Some(Command::Triage { message, .. }) => run_triage(message.as_deref().unwrap_or_default()),
        Some(Command::Normalize { text }) => {
            println!("{}", TextNormalizer::new().normalize(&text));
            Ok(())
        }
        Some(Command::Serve { bind }) => run_server(bind).await,
        None => run_server(None).await,
    }
}

/// Initialize tracing
///
/// Default level is INFO; RUST_LOG overrides it. `init()` also installs the
/// log → tracing bridge for dependencies using the log crate.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

/// One block per category, in match priority order
fn format_keyword_list(detector: &CrisisDetector) -> String {
    let mut out = String::new();
    for (category, phrases) in detector.categories() {
        out.push_str(&format!("{}\n", category));
        for phrase in phrases {
            out.push_str(&format!("  {}\n", phrase));
        }
    }
    out
}

fn run_triage(message: &str) -> Result<()> {
    let detector = CrisisDetector::new();

    match detector.detect(message) {
        Some(found) => {
            println!("category: {}", found.category);
            println!("trigger:  {}", found.phrase);
            println!();
            println!("{}", found.response);
        }
        None => println!("no match"),
    }

    Ok(())
}

async fn run_server(bind: Option<String>) -> Result<()> {
    let mut config = load_config()?;
    if let Some(bind) = bind {
        config.server.bind_address = bind;
    }

    let provider = create_provider(&config.provider)?;
    tracing::info!(
        provider = provider.name(),
        model = provider.default_model(),
        origins = ?config.server.allowed_origins,
        "Configured generation provider"
    );

    let server = WellnessServer::new(config.server, Arc::from(provider));
    server.serve().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_triage_list_flag() {
        let args = Args::try_parse_from(["mindwell", "triage", "--list"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Command::Triage { list: true, message: None })
        ));

        assert!(Args::try_parse_from(["mindwell", "triage"]).is_err());
        assert!(Args::try_parse_from(["mindwell", "triage", "hi", "--list"]).is_err());
    }

    #[test]
    fn test_format_keyword_list() {
        let listing = format_keyword_list(&CrisisDetector::new());
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(lines[0], "SUICIDE_RISK");
        assert_eq!(lines[1], "  suicide");
        assert!(listing.contains("UNSAFE_SITUATION\n  unsafe\n"));
        assert_eq!(lines.len(), 4 + 24);
    }
}
