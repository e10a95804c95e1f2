use anyhow::Context;
use cep_racer::logging;
use cep_racer::racer::{CepRacer, Endpoint, FetchResult, RaceOutcome, RacerConfig};
use clap::Parser;
use std::io::Write;
use std::process;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CommandLineArgs {
    /// Postal code (CEP) to look up; prompts on stdin when omitted
    #[arg(value_name = "CEP")]
    cep: Option<String>,
}

async fn main_impl(args: &CommandLineArgs) -> anyhow::Result<()> {
    let cep = match &args.cep {
        Some(cep) => cep.clone(),
        None => ask_for_cep()?,
    };

    println!("CEP: {}", cep);

    // Set up a shutdown signal handler
    let shutdown_notify = Arc::new(tokio::sync::Notify::new());
    {
        let shutdown_notify = Arc::clone(&shutdown_notify);
        ctrlc::set_handler(move || {
            println!("Received Ctrl+C, shutting down...");
            shutdown_notify.notify_waiters();
        })?;
    }

    let racer = CepRacer::new(
        shutdown_notify,
        Endpoint::via_cep(),
        Endpoint::brasil_api(),
        RacerConfig::default(),
    );
    let outcome = racer.race(&cep).await;
    print_outcome(&outcome);

    println!("Done!");

    Ok(())
}

fn print_outcome(outcome: &RaceOutcome) {
    match outcome {
        RaceOutcome::Finished(result) => print_result(result),
        RaceOutcome::TimedOut => println!("Timeout: the response took too long to arrive."),
        RaceOutcome::Interrupted => {}
    }
}

fn print_result(result: &FetchResult) {
    if result.is_empty() {
        println!("Nothing to show.");
    } else {
        println!("API: {}", result.origin());
        println!("Response: {}", result.body().unwrap_or_default());
    }
}

fn ask_for_cep() -> anyhow::Result<String> {
    print!("Enter a CEP: ");
    std::io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("failed to read the CEP from stdin")?;

    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() {
    let args = CommandLineArgs::parse();

    logging::initialize();

    if let Err(e) = main_impl(&args).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
