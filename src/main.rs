// src/main.rs
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fmt;
use std::path::PathBuf;
use tracing::{error, info};

use vxrail_health::{
    app::build_client,
    client::SYSTEM_PATH,
    config::{self, Config},
    health::HealthChecker,
    inventory::collect_inventory,
    models::SystemInfo,
    report,
};

#[derive(Parser)]
#[command(name = "vxrail-health", version, about = "Health check for VxRail Manager")]
struct Cli {
    /// YAML or JSON config file; flags and environment override it
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// VxRail Manager IP, hostname or URL
    #[arg(long, env = "VXRAIL_HOST", global = true)]
    host: Option<String>,

    #[arg(short, long, env = "VXRAIL_USERNAME", global = true)]
    username: Option<String>,

    #[arg(short, long, env = "VXRAIL_PASSWORD", hide_env_values = true, global = true)]
    password: Option<String>,

    /// Minimum supported system version
    #[arg(long, env = "VXRAIL_MIN_VERSION", global = true)]
    min_version: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long, global = true)]
    insecure: bool,

    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cluster, host and disk health with an overall verdict
    Check {
        /// Also save the report as JSON (default name when no path is given)
        #[arg(long, num_args = 0..=1)]
        report: Option<Option<PathBuf>>,

        /// Also query the support account status
        #[arg(long)]
        support: bool,
    },
    /// Print system information
    Info {
        /// Print only the raw JSON response
        #[arg(long)]
        raw: bool,
    },
    /// Collect hosts, chassis and disks and save them as JSON
    Inventory {
        /// Output file (default vxrail_inventory_<timestamp>.json)
        #[arg(short, long, conflicts_with = "no_save")]
        output: Option<PathBuf>,

        /// Print the summary only
        #[arg(long)]
        no_save: bool,
    },
}

impl fmt::Debug for Cli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cli")
            .field("config", &self.config)
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("min_version", &self.min_version)
            .field("insecure", &self.insecure)
            .field("timeout_secs", &self.timeout_secs)
            .field("verbose", &self.verbose)
            .field("command", &self.command)
            .finish()
    }
}

impl Cli {
    async fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                info!("Loading configuration from: {}", path.display());
                config::load_config(path).await?
            }
            None => Config::default(),
        };

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(username) = &self.username {
            config.username = Some(username.clone());
        }
        if let Some(password) = &self.password {
            config.password = Some(password.clone());
        }
        if let Some(min_version) = &self.min_version {
            config.min_version = min_version.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
        config.accept_invalid_certs |= self.insecure;

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the report
    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("vxrail_health={}", level).parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    let config = cli.config().await?;
    let client = build_client(&config)?;

    let command = cli.command.unwrap_or(Command::Check {
        report: None,
        support: false,
    });

    match command {
        Command::Check {
            report: save,
            support,
        } => {
            let checker =
                HealthChecker::new(client, config.min_version()?).with_support_status(support);
            let result = checker.run().await;

            report::render_health_report(&result, std::io::stdout().lock())?;

            if let Some(path) = save {
                let path = path.unwrap_or_else(|| report::default_report_path(result.generated_at));
                if let Err(e) = report::write_json_report(&result, &path).await {
                    error!("{:#}", e);
                }
            }
        }
        Command::Info { raw } => {
            let value = client.get_value(SYSTEM_PATH).await?;
            if raw {
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                let system: SystemInfo = serde_json::from_value(value.clone())?;
                report::render_system_info(&system, &value, std::io::stdout().lock())?;
            }
        }
        Command::Inventory { output, no_save } => {
            let inventory = collect_inventory(&client).await;
            report::render_inventory(&inventory, std::io::stdout().lock())?;

            if !no_save {
                let path =
                    output.unwrap_or_else(|| report::default_inventory_path(inventory.collected_at));
                if let Err(e) = report::write_json(&inventory, &path).await {
                    error!("{:#}", e);
                }
            }
        }
    }

    Ok(())
}
