//! undoc CLI - generate schema declarations from symbol documentation.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use undoc::{ConvertOptions, HttpFetch};

#[derive(Parser)]
#[command(name = "undoc")]
#[command(version)]
#[command(
    about = "Generate schema declarations from symbol documentation",
    long_about = None
)]
struct Cli {
    /// Root document URI, e.g. "/documentation/walletpasses/pass"
    #[arg(value_name = "ROOT")]
    root: String,

    /// Base URL documents are fetched relative to
    #[arg(long, value_name = "URL", env = "UNDOC_BASE_URL")]
    base_url: String,

    /// URI prefix stripped from internal cross-references
    #[arg(long, value_name = "URI", env = "UNDOC_BASE_URI")]
    base_uri: String,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Maximum number of concurrent document fetches
    #[arg(long, default_value_t = 2)]
    fetch_concurrency: usize,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> undoc::Result<()> {
    let options = ConvertOptions::new(&cli.base_url, cli.base_uri)?
        .with_fetch_concurrency(cli.fetch_concurrency);

    log::info!("converting document graph rooted at {}", cli.root);
    let schema = undoc::convert_schema(&cli.root, &options, HttpFetch::new()).await?;

    match cli.output {
        Some(path) => {
            fs::write(&path, &schema)?;
            println!("{} {}", "Wrote".green().bold(), path.display());
        }
        None => println!("{schema}"),
    }
    Ok(())
}
