use anyhow::Context;
use clap::{Parser, Subcommand};
use rankx_engine::{Engine, EngineConfig, RecommendationRequest, SimilarPostsRequest};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Rank blog posts for a reader or find posts similar to a post
#[derive(Parser, Debug)]
#[command(name = "rankx")]
#[command(about = "Content recommendation engine", long_about = None)]
struct Args {
    /// Engine configuration file (JSON); defaults apply when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    /// Pretty-print the JSON response
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Personalized recommendations from a RecommendationRequest
    Recommend {
        /// Request file; reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Similar posts from a SimilarPostsRequest
    Similar {
        /// Request file; reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    // stdout carries the JSON response
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &args.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("failed to load config from {:?}", path))?,
        None => EngineConfig::default(),
    };
    let engine = Engine::new(config)?;
    info!("rankx v{} ready", env!("CARGO_PKG_VERSION"));

    match &args.command {
        Command::Recommend { input } => {
            let request = RecommendationRequest::from_json(&read_request(input.as_deref())?)
                .context("malformed request")?;
            info!(
                user_id = request.user_profile.user_id,
                candidates = request.available_posts.len(),
                "recommend"
            );
            let response = request
                .handle(&engine)
                .context("recommendation generation failed")?;
            write_response(&response, args.pretty)
        }
        Command::Similar { input } => {
            let request = SimilarPostsRequest::from_json(&read_request(input.as_deref())?)
                .context("malformed request")?;
            info!(
                post_id = request.post_id,
                candidates = request.similar_posts.len(),
                "similar"
            );
            let response = request.handle(&engine).context("similarity analysis failed")?;
            write_response(&response, args.pretty)
        }
    }
}

fn read_request(input: Option<&Path>) -> anyhow::Result<String> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read request from {:?}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read request from stdin")?;
            buf
        }
    };
    Ok(raw)
}

fn write_response<T: Serialize>(response: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(response)?
    } else {
        serde_json::to_string(response)?
    };
    println!("{}", out);
    Ok(())
}
