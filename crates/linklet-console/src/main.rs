mod cli;

use crate::cli::{Cli, ReplCommand};
use clap::Parser;
use linklet_core::{ManagerError, ResultCode, UrlManager, UrlRecord};
use linklet_manager::{ManagerConfig, MemoryUrlStore, RandomGenerator, ShortUrlManager};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let options = Cli::try_parse()?;

    let config = ManagerConfig::builder()
        .min_id_length(options.min_id_length)
        .max_id_length(options.max_id_length)
        .max_creation_attempts(options.max_creation_attempts)
        .build();

    info!(
        min_id_length = config.min_id_length,
        max_id_length = config.max_id_length,
        max_creation_attempts = config.max_creation_attempts,
        "starting linklet console"
    );

    let manager = ShortUrlManager::new(MemoryUrlStore::new(), RandomGenerator::new(), config)?;

    println!("==============================");
    println!(" linklet short-url manager");
    println!("==============================");
    println!();
    println!("Type 'create', 'get' or 'delete' to get started. Type '--help' to list commands.");
    println!();

    run_repl(&manager).await
}

/// Reads commands line by line from stdin until EOF, dispatching each to
/// the manager and printing the outcome.
async fn run_repl(manager: &impl UrlManager) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match ReplCommand::try_parse_from(line.split_whitespace()) {
            Ok(command) => command,
            Err(err) => {
                // clap renders both parse errors and `--help` output here.
                println!("{err}");
                continue;
            }
        };

        match command {
            ReplCommand::Create {
                target_url,
                desired_id,
            } => report(manager.create(&target_url, desired_id.as_deref()).await),
            ReplCommand::Get { short_id } => report(manager.get(&short_id).await),
            ReplCommand::Delete { short_id } => match manager.delete(&short_id).await {
                Ok(()) => {
                    println!("{}", ResultCode::Success);
                    println!();
                }
                Err(err) => report_error(err),
            },
        }
    }

    Ok(())
}

fn report(result: Result<Arc<UrlRecord>, ManagerError>) {
    match result {
        Ok(record) => {
            println!("{}", ResultCode::Success);
            println!("\t{record}");
            println!();
        }
        Err(err) => report_error(err),
    }
}

fn report_error(err: ManagerError) {
    match err.result_code() {
        Some(code) => println!("{code}"),
        None => eprintln!("error: {err}"),
    }
    println!();
}
