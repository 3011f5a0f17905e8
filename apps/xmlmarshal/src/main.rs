//! xmlmarshal - convert JSON documents to XML and back.
//!
//! The XML side follows the marshaler conventions: `@`-prefixed fields are
//! attributes, lists are repeated elements, and decoded documents carry a
//! `type` field naming their root element.
//!
//! # Usage
//!
//! ```text
//! xmlmarshal encode --root chatEntry entry.json
//! xmlmarshal decode entries.xml --output entries.json
//! cat entry.json | xmlmarshal encode --root chatEntry
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `XMLMARSHAL_MAX_DEPTH` | `256` | Nesting limit for encode and decode |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod convert;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use xmlmarshal_core::MarshalConfig;
use xmlmarshal_xml::Marshaller;

/// Convert JSON documents to XML and back.
#[derive(Debug, Parser)]
#[command(name = "xmlmarshal", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Write the result to this file instead of stdout.
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Maximum nesting depth (overrides `XMLMARSHAL_MAX_DEPTH`).
    #[arg(long, global = true)]
    max_depth: Option<usize>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encode a JSON object or scalar as an XML document.
    Encode {
        /// Name of the document element.
        #[arg(short, long)]
        root: String,
        /// JSON input file; stdin when omitted.
        input: Option<PathBuf>,
    },
    /// Decode an XML document into JSON.
    Decode {
        /// XML input file; stdin when omitted.
        input: Option<PathBuf>,
    },
}

/// Read log level from the `LOG_LEVEL` environment variable.
fn log_level() -> String {
    std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_owned())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&log_level())?;

    let marshaller = if let Some(depth) = cli.max_depth {
        Marshaller::new(MarshalConfig::with_max_depth(depth))
    } else {
        Marshaller::from_env()
    };
    let config = marshaller.config();
    debug!(max_depth = config.max_depth, "marshaller ready");

    let output = match &cli.command {
        Command::Encode { root, input } => {
            let text = convert::read_input(input.as_deref())?;
            convert::json_to_xml(marshaller, &text, root)?
        }
        Command::Decode { input } => {
            let text = convert::read_input(input.as_deref())?;
            convert::xml_to_json(marshaller, &text)?
        }
    };

    convert::write_output(cli.output.as_deref(), &output)
}
