//! Command-line front end for the Gamma API client.

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gamma_sdk::config::ClientConfig;
use gamma_sdk::metrics;
use gamma_sdk::{AsyncGammaClient, PageBound, Payload, Query};

/// Query the Polymarket Gamma metadata API.
#[derive(Parser, Debug)]
#[command(name = "gamma")]
#[command(about = "Query the Polymarket Gamma metadata API")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Override GAMMA_BASE_URL.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Override GAMMA_TIMEOUT_MS.
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the upstream status.
    Status,

    /// Legacy search (raw JSON).
    Search {
        q: String,
        /// Extra query parameter, `key=value`. Repeatable.
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// Public search, one page or all of them.
    PublicSearch {
        q: String,
        /// Fetch and concatenate every page.
        #[arg(long)]
        all: bool,
        /// With --all, also fetch the last computed page.
        #[arg(long, requires = "all")]
        inclusive: bool,
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// Fetch one market by id or slug.
    Market {
        #[arg(required_unless_present = "slug")]
        id: Option<String>,
        #[arg(long, conflicts_with = "id")]
        slug: Option<String>,
    },

    /// Fetch one event by id or slug.
    Event {
        #[arg(required_unless_present = "slug")]
        id: Option<String>,
        #[arg(long, conflicts_with = "id")]
        slug: Option<String>,
    },

    /// List markets.
    Markets {
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// List events.
    Events {
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// List tags.
    Tags {
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// Resolve a polymarket.com URL to its market or event.
    Resolve { url: String },

    /// Check configuration validity.
    CheckConfig,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got {raw:?}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("gamma_sdk=debug,gamma=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    metrics::init_metrics();

    let mut config = ClientConfig::load()?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(timeout_ms) = args.timeout_ms {
        config.timeout_ms = timeout_ms;
    }
    debug!(?config, "Configuration loaded");

    if let Command::CheckConfig = args.command {
        return cmd_check_config(&config);
    }

    let client = AsyncGammaClient::with_config(config)?;
    let result = run(&client, args.command).await;
    client.close();
    result
}

async fn run(client: &AsyncGammaClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Status => match client.status().await? {
            Payload::Text(text) => println!("{text}"),
            json => print_json(&json)?,
        },
        Command::Search { q, params } => {
            print_json(&client.search(&q, &Query::from_iter(params)).await?)?
        }
        Command::PublicSearch {
            q,
            all,
            inclusive,
            params,
        } => {
            let query = Query::from_iter(params);
            let response = if all {
                let bound = if inclusive {
                    PageBound::Inclusive
                } else {
                    PageBound::Exclusive
                };
                client.public_search_all_with(&q, &query, bound).await?
            } else {
                client.public_search(&q, &query).await?
            };
            info!(events = response.events.len(), "Public search finished");
            print_json(&response)?
        }
        Command::Market { id, slug } => match (id, slug) {
            (_, Some(slug)) => print_json(&client.markets().get_by_slug(&slug).await?)?,
            (Some(id), None) => print_json(&client.markets().get_by_id(&id).await?)?,
            (None, None) => anyhow::bail!("either an id or --slug is required"),
        },
        Command::Event { id, slug } => match (id, slug) {
            (_, Some(slug)) => print_json(&client.events().get_by_slug(&slug).await?)?,
            (Some(id), None) => print_json(&client.events().get_by_id(&id).await?)?,
            (None, None) => anyhow::bail!("either an id or --slug is required"),
        },
        Command::Markets { params } => {
            print_json(&client.markets().list(&Query::from_iter(params)).await?)?
        }
        Command::Events { params } => {
            print_json(&client.events().list(&Query::from_iter(params)).await?)?
        }
        Command::Tags { params } => {
            print_json(&client.tags().list(&Query::from_iter(params)).await?)?
        }
        Command::Resolve { url } => print_json(&client.resolve_url(&url).await?)?,
        Command::CheckConfig => cmd_check_config(client.config())?,
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Check configuration validity.
fn cmd_check_config(config: &ClientConfig) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("GAMMA CLIENT - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Base URL: {}", config.base_url);
    println!("  Timeout: {}ms", config.timeout_ms);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}
