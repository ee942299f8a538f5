use std::path::PathBuf;

use tracing::warn;
use tracing_subscriber::EnvFilter;

mod config;
mod extractor;
mod fetcher;
mod input;
mod output;
mod runner;

use config::{load_config, Config};
use runner::CrawlRunner;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

const USAGE: &str = "\
Usage: contact-crawler [OPTIONS] [URL]...

Options:
  -i, --input <FILE>    File with URLs, one per line
  -o, --output <FILE>   Write the JSON report to a file instead of stdout
  -h, --help            Show this message";

#[derive(Debug, Default)]
struct CliArgs {
    urls: Vec<String>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn parse_args(argv: impl Iterator<Item = String>) -> Result<CliArgs> {
    let mut args = CliArgs::default();
    let mut argv = argv;

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "-i" | "--input" => {
                let value = argv.next().ok_or("--input requires a file path")?;
                args.input = Some(PathBuf::from(value));
            }
            "-o" | "--output" => {
                let value = argv.next().ok_or("--output requires a file path")?;
                args.output = Some(PathBuf::from(value));
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option: {flag}").into());
            }
            _ => args.urls.push(arg),
        }
    }

    Ok(args)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("contact_crawler=info".parse()?),
        )
        .init();

    let args = parse_args(std::env::args().skip(1))?;

    let config = match load_config("config.yml").await {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config.yml: {}. Using defaults.", e);
            Config::default()
        }
    };

    let mut urls = Vec::new();
    if let Some(path) = &args.input {
        urls.extend(input::load_urls(path).await?);
    }
    urls.extend(args.urls.iter().cloned());

    if urls.is_empty() {
        eprintln!("{USAGE}");
        return Err("no URLs provided".into());
    }

    let runner = CrawlRunner::new(&config)?;
    let results = runner.run(&urls).await;

    output::write_results(&results, args.output.as_deref(), config.output.pretty_json).await?;

    Ok(())
}
