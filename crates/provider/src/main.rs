//! Command line entrypoint for the Rook data sources

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rook_provider::{Provider, ProviderConfig, telemetry};
use serde_json::Value;
use tracing::instrument;

#[derive(Parser)]
#[command(name = "rook-provider")]
#[command(version)]
#[command(about = "Read Rook Ceph resources and render their manifests", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    config: ProviderConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every data source type name
    List,

    /// Print the schema of a data source as JSON
    Schema {
        /// Data source type name
        type_name: String,
    },

    /// Read a data source and print its state as JSON
    Read {
        /// Data source type name
        type_name: String,

        /// YAML or JSON configuration, stdin when omitted
        #[arg(short = 'f', long = "file")]
        file: Option<PathBuf>,
    },

    /// Render a manifest data source and print only the YAML
    Render {
        /// Manifest data source type name
        type_name: String,

        /// YAML or JSON configuration, stdin when omitted
        #[arg(short = 'f', long = "file")]
        file: Option<PathBuf>,
    },
}

fn load_config(file: Option<&PathBuf>) -> anyhow::Result<Value> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    // YAML is a superset of JSON
    serde_yaml::from_str(&raw).context("parsing configuration")
}

#[instrument(skip(provider, file))]
async fn read(
    provider: &Provider,
    type_name: &str,
    file: Option<&PathBuf>,
    yaml_only: bool,
) -> anyhow::Result<ExitCode> {
    let config = load_config(file)?;
    let response = provider.read_data_source(type_name, config).await;

    for diagnostic in &response.diagnostics {
        eprintln!("{diagnostic}");
    }

    if let Some(state) = &response.state {
        if yaml_only {
            let yaml = state["yaml"]
                .as_str()
                .with_context(|| format!("{type_name} does not render a manifest"))?;
            print!("{yaml}");
        } else {
            println!("{}", serde_json::to_string_pretty(state)?);
        }
    }

    Ok(if response.diagnostics.has_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let _guard = telemetry::init()?;
    let cli = Cli::parse();
    let provider = Provider::new(cli.config);

    match cli.command {
        Commands::List => {
            for name in provider.data_source_names() {
                println!("{name}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Schema { type_name } => {
            let schema = provider.schema(&type_name)?;
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Read { type_name, file } => {
            read(&provider, &type_name, file.as_ref(), false).await
        }
        Commands::Render { type_name, file } => {
            read(&provider, &type_name, file.as_ref(), true).await
        }
    }
}
