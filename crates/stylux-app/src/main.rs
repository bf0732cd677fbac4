//! Stylux application binary - composition root.
//!
//! 1. Parse CLI flags and load configuration from TOML
//! 2. Initialize tracing
//! 3. Either serve the recommendation endpoint or run a terminal chat
//!    against the configured reply resolver

mod cli;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use stylux_api::routes::start_server;
use stylux_api::state::AppState;
use stylux_chat::{build_resolver, ChatSession};
use stylux_core::config::StyluxConfig;
use stylux_core::types::Message;

use cli::{ChatCommand, CliArgs};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config. Load errors are reported once tracing is up.
    let config_path = args.resolve_config_path();
    let (mut config, load_error) = match StyluxConfig::load(&config_path) {
        Ok(config) => (config, None),
        Err(e) => (StyluxConfig::default(), Some(e)),
    };
    config.server.port = args.resolve_port(config.server.port);

    // Tracing.
    let level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting Stylux v{}", env!("CARGO_PKG_VERSION"));
    match load_error {
        None => tracing::info!(path = %config_path.display(), "Configuration loaded"),
        Some(e) => tracing::warn!(
            path = %config_path.display(),
            error = %e,
            "Failed to load config. Using defaults."
        ),
    }

    if args.chat {
        run_chat(&config).await
    } else {
        let state = AppState::with_rule_table(config.clone());
        start_server(&config, state).await?;
        Ok(())
    }
}

/// Interactive chat on stdin/stdout.
async fn run_chat(config: &StyluxConfig) -> Result<(), Box<dyn std::error::Error>> {
    let session = ChatSession::new(build_resolver(config)?);
    tracing::info!(session = %session.id(), "Chat session started");

    println!("STYLUX - type a message. Commands: /recent, /use <n>, /reset, /quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match ChatCommand::parse(&line) {
            ChatCommand::Quit => break,
            ChatCommand::Recent => {
                for label in session.snapshot().recent_query_labels() {
                    println!("  - {}", label);
                }
            }
            ChatCommand::Reset => {
                session.reset();
                println!("(conversation cleared)");
            }
            ChatCommand::Use(index) => {
                let picked = index
                    .and_then(|i| session.snapshot().recent_queries().nth(i).map(str::to_string));
                match picked {
                    Some(query) => {
                        session.update(|s| s.select_recent_query(&query));
                        println!("> {}", query);
                        if let Some(reply) = session.submit_pending().await {
                            print_bot(&reply);
                        }
                    }
                    None => println!("(no such recent query)"),
                }
            }
            ChatCommand::Message(text) => {
                session.update(|s| s.set_pending_input(text));
                if let Some(reply) = session.submit_pending().await {
                    print_bot(&reply);
                }
            }
        }
    }

    tracing::info!(session = %session.id(), "Chat session ended");
    Ok(())
}

fn print_bot(message: &Message) {
    println!("[{}] STYLUX: {}", message.timestamp(), message.text());
}
