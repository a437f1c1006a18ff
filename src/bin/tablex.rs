//! Table lexicalization CLI
//!
//! Reads `input.json` (the annotated table) and `inputData.json` (the
//! background/interest parameters) from the plugin directory, asks the
//! text-generation backend for a description and writes `output.html`.
//!
//! Usage:
//!   tablex --dir /path/to/plugin
//!   tablex --input table.json --params params.json --output out.html
//!   tablex --dir fixtures --dry-run          # print the prompt only
//!
//! Failures to configure or reach the backend still exit successfully: the
//! error is reported through the written fragment.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tablex::{BackendConfig, RunPaths};
use tablex_core::{TableSelector, WidePolicy};

/// Lexicalize a semantically annotated table
#[derive(Parser, Debug)]
#[command(name = "tablex")]
#[command(about = "Describe an annotated table in natural language")]
struct Args {
    /// Directory holding input.json, inputData.json and output.html
    /// (default: the directory of this executable)
    #[arg(long, short = 'd', env = "TABLEX_DIR")]
    dir: Option<PathBuf>,

    /// Table document (overrides <dir>/input.json)
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// Parameters document (overrides <dir>/inputData.json)
    #[arg(long, short = 'p')]
    params: Option<PathBuf>,

    /// Output fragment (overrides <dir>/output.html)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Column policy for wide tables when background is set: keep-all, anchored-tail
    #[arg(long, env = "TABLEX_WIDE_POLICY", default_value = "keep-all")]
    wide_policy: WidePolicy,

    /// Print the assembled prompt and exit without calling the backend
    #[arg(long, short = 'n')]
    dry_run: bool,
}

impl Args {
    fn paths(&self) -> Result<RunPaths> {
        let dir = match &self.dir {
            Some(dir) => dir.clone(),
            None => std::env::current_exe()
                .context("locating executable")?
                .parent()
                .map(PathBuf::from)
                .unwrap_or_default(),
        };

        let mut paths = RunPaths::in_dir(dir);
        if let Some(input) = &self.input {
            paths.table = input.clone();
        }
        if let Some(params) = &self.params {
            paths.params = params.clone();
        }
        if let Some(output) = &self.output {
            paths.output = output.clone();
        }
        Ok(paths)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let paths = args.paths()?;
    let selector = TableSelector::new(args.wide_policy);

    if args.dry_run {
        let lexicalization = tablex::prepare(&paths, selector)?;
        println!("{}", lexicalization.prompt);
        return Ok(());
    }

    let backend = BackendConfig::from_env();
    let fragment = match tablex::run(backend, &paths, selector).await {
        Ok(fragment) => fragment,
        Err(fragment) => fragment,
    };

    fragment
        .write_to(&paths.output)
        .with_context(|| format!("writing {}", paths.output.display()))?;
    Ok(())
}
