//! devwisdom MCP Server
//!
//! Trusted advisors for development workflows, over stdio.
//!
//! Run with: cargo run
//! Or via MCP: point your client at the `devwisdom` binary

use anyhow::Result;
use devwisdom::{mcp, Config, WisdomEngine, WisdomServer};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
devwisdom - trusted advisors for development workflows

USAGE:
    devwisdom              Serve tool calls on stdin/stdout
    devwisdom --tools      Print tool definitions as JSON
    devwisdom --sources    Print wisdom sources as JSON
    devwisdom --config     Print the resolved configuration
    devwisdom --help       Show this message

Logging goes to stderr; set RUST_LOG to adjust (default: info).";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // stdout carries the protocol, so logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;

    if let Some(flag) = args.get(1) {
        match flag.as_str() {
            "--tools" => {
                println!("{}", serde_json::to_string_pretty(&mcp::get_tools())?);
                return Ok(());
            }
            "--sources" => {
                let engine = WisdomEngine::new(config);
                engine.initialize()?;
                println!("{}", serde_json::to_string_pretty(&engine.list_sources()?)?);
                return Ok(());
            }
            "--config" => {
                println!("{}", serde_json::to_string_pretty(&config)?);
                return Ok(());
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument: {other}\n\n{USAGE}");
                std::process::exit(2);
            }
        }
    }

    if config.disabled {
        tracing::info!("Wisdom disabled; tools will answer with {{\"disabled\": true}}");
    }

    let engine = Arc::new(WisdomEngine::new(config));
    engine.initialize()?;

    WisdomServer::new(engine).serve_stdio().await
}
