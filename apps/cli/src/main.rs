//! Miner CLI
//!
//! Interactive client for the transaction coordinator: query the table,
//! mine the current challenge locally and submit the result. Transport
//! faults are printed and the menu loop continues.

mod api;

use anyhow::{Context, Result};
use api::ApiClient;
use clap::Parser;
use coordinator::presentation::dto::{SubmitRequest, codes};
use miner::MinerConfig;
use platform::crypto::sha1_hex;
use std::io::{self, Write};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(about = "Interactive proof-of-work mining client")]
struct Args {
    /// Coordinator base URL
    #[arg(long, default_value = "http://localhost:8080")]
    server: String,

    /// Client id used in candidates and submissions
    #[arg(long, default_value_t = 1)]
    client_id: i64,

    /// Mining worker threads (0 = available parallelism)
    #[arg(long, default_value_t = 0)]
    workers: usize,

    /// Give up mining after this many seconds
    #[arg(long, default_value_t = 3600)]
    deadline_secs: u64,
}

fn print_menu() {
    println!("\n=== Miner CLI ===");
    println!("1 - current transaction id");
    println!("2 - challenge difficulty");
    println!("3 - transaction status");
    println!("4 - winner");
    println!("5 - solution");
    println!("6 - mine and submit");
    println!("0 - exit");
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_txid() -> Result<i64> {
    prompt("TransactionID: ")?
        .parse()
        .context("not a valid transaction id")
}

fn status_label(status: i32) -> &'static str {
    match status {
        codes::STATUS_RESOLVED => "RESOLVED",
        codes::STATUS_PENDING => "PENDING",
        codes::UNKNOWN_TRANSACTION => "UNKNOWN ID",
        _ => "UNRECOGNIZED",
    }
}

async fn mine_and_submit(client: &ApiClient, client_id: i64, config: &MinerConfig) -> Result<()> {
    let txid = client.current_transaction().await?;
    // Fetch the challenge right before mining; the table may have rolled
    let difficulty = client.challenge(txid).await?;
    if difficulty < 0 {
        println!("Transaction {txid} is gone, try again.");
        return Ok(());
    }

    println!("Mining tx={txid} at difficulty {difficulty} ...");

    let mining_config = config.clone();
    let solution = tokio::task::spawn_blocking(move || {
        miner::mine(txid, client_id, i64::from(difficulty), &mining_config)
    })
    .await
    .context("mining task panicked")?;

    let Some(solution) = solution else {
        println!("No solution found before the deadline.");
        return Ok(());
    };

    println!("Local solution '{}' sha1={}", solution, sha1_hex(solution.as_bytes()));

    let code = client
        .submit(&SubmitRequest {
            transaction_id: txid,
            client_id,
            solution,
        })
        .await?;

    let meaning = match code {
        codes::SUBMIT_ACCEPTED => "ACCEPTED",
        codes::SUBMIT_REJECTED => "REJECTED",
        codes::SUBMIT_ALREADY_SOLVED => "ALREADY SOLVED",
        codes::UNKNOWN_TRANSACTION => "UNKNOWN ID",
        _ => "UNRECOGNIZED",
    };
    println!("Server verdict: {meaning}");

    Ok(())
}

async fn run_choice(choice: &str, client: &ApiClient, args: &Args, config: &MinerConfig) -> Result<()> {
    match choice {
        "1" => {
            let txid = client.current_transaction().await?;
            println!("Current TransactionID: {txid}");
        }
        "2" => {
            let txid = prompt_txid()?;
            let difficulty = client.challenge(txid).await?;
            if difficulty < 0 {
                println!("Unknown transaction id.");
            } else {
                println!("Challenge difficulty: {difficulty}");
            }
        }
        "3" => {
            let txid = prompt_txid()?;
            let status = client.status(txid).await?;
            println!("Status: {}", status_label(status));
        }
        "4" => {
            let txid = prompt_txid()?;
            match client.winner(txid).await? {
                codes::WINNER_UNKNOWN => println!("Unknown transaction id."),
                codes::WINNER_NONE => println!("No winner yet."),
                winner => println!("Winner (ClientID): {winner}"),
            }
        }
        "5" => {
            let txid = prompt_txid()?;
            let view = client.solution(txid).await?;
            println!(
                "Status: {} | Difficulty: {} | Solution: '{}'",
                status_label(view.status),
                view.difficulty,
                view.solution
            );
        }
        "6" => mine_and_submit(client, args.client_id, config).await?,
        _ => println!("Unrecognized option."),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "miner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let client = ApiClient::new(&args.server)?;
    let config = MinerConfig {
        workers: args.workers,
        deadline: Duration::from_secs(args.deadline_secs),
    };

    println!("=== Client {} on {} ===", args.client_id, args.server);

    loop {
        print_menu();
        let choice = prompt(&format!("Client {} - choice: ", args.client_id))?;

        if choice == "0" {
            println!("Client {} - bye.", args.client_id);
            break;
        }

        if let Err(error) = run_choice(&choice, &client, &args, &config).await {
            println!("Error: {error:#} (continuing)");
        }
    }

    Ok(())
}
