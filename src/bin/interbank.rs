use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use interbank::config::{load_config, ClientConfig};
use interbank::utils::logging::{self, LogLevel};
use interbank::Client;
use serde::Serialize;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML config; credentials come from INTERBANK_* variables when omitted.
    #[arg(short, long, env = "INTERBANK_CONFIG")]
    config: Option<String>,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch an access token and print it.
    Token,
    /// Account balance.
    Saldo {
        /// Balance date, `YYYY-MM-DD`.
        #[arg(long)]
        data: Option<String>,
    },
    /// Account statement for a period.
    Extrato {
        /// `YYYY-MM-DD`
        #[arg(long)]
        inicio: String,
        /// `YYYY-MM-DD`
        #[arg(long)]
        fim: String,
    },
    /// Fetch a token, then print the client metrics.
    Metrics,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // -------------------------------
    // 1. Load config and start logging
    // -------------------------------

    let config: Option<ClientConfig> = args.config.as_deref().map(load_config).transpose()?;
    let logging_config =
        logging::resolve(config.as_ref().and_then(|c| c.settings.logging.as_ref()), args.log_level);
    logging::init_logging(&logging_config);

    // -------------------------------
    // 2. Build the client
    // -------------------------------

    let client = match &config {
        Some(config) => Client::from_config(config),
        None => Client::from_env(),
    }
    .context("failed to build client")?;
    info!("using {}", client.base_url());

    // -------------------------------
    // 3. Run the command
    // -------------------------------

    match args.command {
        Command::Token => print_json(&client.token().await?),
        Command::Saldo { data } => print_json(&client.banking().consultar_saldo(data.as_deref()).await?),
        Command::Extrato { inicio, fim } => print_json(&client.banking().consultar_extrato(&inicio, &fim).await?),
        Command::Metrics => {
            client.token().await?;
            print!("{}", client.metrics().render());
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
