use clap::Parser;
use rusty_robots::config::{AppConfig, LogLevel};
use rusty_robots::logging::init_logging;
use rusty_robots::robots::{RobotsTxtParser, RobotsTxtSource, TracingParseReporter};
use std::path::PathBuf;
use std::process;

const EXIT_ALLOWED: i32 = 0;
const EXIT_DISALLOWED: i32 = 1;
const EXIT_EXECUTION_ERROR: i32 = 2;
const EXIT_INVALID_INPUT: i32 = 3;

/// Parses a robots.txt file and decides whether any of the given agents may
/// fetch the given URL.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CommandLineArgs {
    /// robots.txt file to parse; standard input is read when omitted
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// User agent to match; repeat to check several agents at once
    #[arg(short, long = "agent", value_name = "AGENT", required = true)]
    agents: Vec<String>,

    /// Target URL to match
    #[arg(short, long, value_name = "URL")]
    url: String,

    /// Never fall back to the rules for `User-agent: *`
    #[arg(long)]
    ignore_global: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<LogLevel>,

    /// Maximum length of a directive value in bytes
    #[arg(long, value_name = "BYTES")]
    max_value_length: Option<usize>,
}

fn build_config(args: &CommandLineArgs) -> anyhow::Result<AppConfig> {
    let config = AppConfig::from_env()?;
    let config = config
        .apply_overrides(args.log_level, args.max_value_length)
        .validate()?;
    Ok(config)
}

async fn main_impl(args: &CommandLineArgs, config: &AppConfig) -> anyhow::Result<bool> {
    let source = match &args.file {
        Some(path) => RobotsTxtSource::load_from_path(path).await?,
        None => RobotsTxtSource::load_from_stdin().await?,
    };

    let reporter = TracingParseReporter::new(source.origin());
    let parser = RobotsTxtParser::with_reporter(config.parser_config(), reporter);
    let matcher = source.matcher(&parser);

    let allowed = if args.ignore_global {
        matcher.ignore_global_allowed_by_robots(&args.agents, &args.url)
    } else {
        matcher.allowed_by_robots(&args.agents, &args.url)
    };
    tracing::debug!(agents = ?args.agents, url = %args.url, allowed, "Computed verdict");

    Ok(allowed)
}

#[tokio::main]
async fn main() {
    let args = match CommandLineArgs::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            process::exit(EXIT_INVALID_INPUT);
        }
        Err(e) => e.exit(),
    };

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(EXIT_EXECUTION_ERROR);
        }
    };
    init_logging(&config);

    match main_impl(&args, &config).await {
        Ok(true) => {
            println!("ALLOWED");
            process::exit(EXIT_ALLOWED);
        }
        Ok(false) => {
            println!("DISALLOWED");
            process::exit(EXIT_DISALLOWED);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(EXIT_EXECUTION_ERROR);
        }
    }
}
