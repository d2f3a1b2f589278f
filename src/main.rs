//! rsoptions 命令行入口

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use rsoptions::{
    ConfigManager, DetectionReport, OptionsDetector, ResultReporter, RuleCompiler, RuleLoader,
    builtin_catalog, utils::validate_target_url,
};

/// Detect Shopify product options apps
#[derive(Debug, Parser)]
#[command(name = "rsoptions", version, about)]
struct Cli {
    /// Shopify store URL or product page URL
    url: String,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// Override the User-Agent header
    #[arg(long)]
    user_agent: Option<String>,

    /// Analyze a saved HTML page instead of fetching the URL
    #[arg(long, value_name = "PAGE.html")]
    file: Option<PathBuf>,

    /// Extra vendor rules (JSON) appended to the built-in catalog
    #[arg(long, value_name = "RULES.json")]
    catalog: Option<PathBuf>,

    /// Include a timestamp in the report
    #[arg(long)]
    timestamp: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let url = validate_target_url(&cli.url)?;

    let config = ConfigManager::custom().http_timeout(Duration::from_secs(cli.timeout));
    let config = match &cli.user_agent {
        Some(ua) => config.user_agent(ua.as_str()),
        None => config,
    }
    .build();

    let catalog = match &cli.catalog {
        Some(path) => {
            let rule_lib = RuleLoader::load_with_extension(path).await?;
            Arc::new(RuleCompiler::compile(&rule_lib)?)
        }
        None => builtin_catalog(),
    };
    let detector = OptionsDetector::with_catalog(config, catalog)?;

    let run = match &cli.file {
        Some(path) => {
            let html = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read {}", path.display()))?;
            detector.analyze_html(&url, &html)
        }
        None => match detector.run(&url).await {
            Ok(run) => run,
            Err(e) => {
                warn!("Detection failed for {}: {}", url, e);
                eprintln!("Detection failed: could not analyze the page");
                std::process::exit(1);
            }
        },
    };

    let mut report: DetectionReport = run.report();
    if cli.timestamp {
        report = report.with_timestamp(chrono::Utc::now().to_rfc3339());
    }

    if cli.json {
        println!("{}", ResultReporter::to_json_pretty(&report)?);
    } else {
        print!("{}", ResultReporter::render_text(&report));
    }

    Ok(())
}
