// SPDX-License-Identifier: PMPL-1.0-or-later

//! codementor: explain common programming errors in English or Hindi.
//!
//! Without a subcommand it runs the offline demo.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codementor::report::{ExplanationFormatter, OutputFormat};
use codementor::{ErrorCatalog, ExplainRequest, Lang};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "codementor")]
#[command(version)]
#[command(about = "Offline bilingual explanations for common programming errors")]
#[command(long_about = None)]
struct Cli {
    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in demonstration
    Demo,

    /// Explain an error message
    Explain {
        /// Error message, e.g. "NameError: name 'x' is not defined"
        #[arg(value_name = "ERROR")]
        error: String,

        /// Explanation language (en or hi)
        #[arg(short, long, default_value = "en")]
        lang: String,

        /// Programming language the error came from
        #[arg(long, default_value = "Python")]
        language: String,

        /// Source snippet that produced the error
        #[arg(long, default_value = "")]
        code: String,

        /// Alternate catalog file (JSON or YAML)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List the error types a catalog knows about
    List {
        /// Alternate catalog file (JSON or YAML)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Validate a catalog file
    Check {
        /// Catalog file (JSON or YAML)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}

fn load_catalog(path: Option<&Path>) -> Result<ErrorCatalog> {
    match path {
        Some(path) => ErrorCatalog::from_file(path)
            .with_context(|| format!("loading catalog {}", path.display())),
        None => Ok(ErrorCatalog::builtin()
            .context("loading built-in catalog")?
            .clone()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let formatter = ExplanationFormatter::new();

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            let transcript = formatter
                .demo_transcript()
                .context("loading built-in catalog")?;
            print!("{}", transcript);
        }

        Commands::Explain {
            error,
            lang,
            language,
            code,
            catalog,
            format,
        } => {
            let lang: Lang = lang.parse()?;
            let catalog = load_catalog(catalog.as_deref())?;
            let request = ExplainRequest::new(language, code, error);
            let result = catalog.explain(&request, lang);
            println!("{}", format.render(&result)?);
        }

        Commands::List { catalog } => {
            let catalog = load_catalog(catalog.as_deref())?;
            print!("{}", formatter.catalog_listing(&catalog));
        }

        Commands::Check { file } => {
            let catalog = ErrorCatalog::from_file(&file)
                .with_context(|| format!("checking catalog {}", file.display()))?;
            println!("{}", formatter.check_summary(&file, &catalog));
        }
    }

    Ok(())
}
