use clap::Parser;

use strat::cli::{Cli, run};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    if let Err(e) = strat::log::init_logging() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let answer = run(cli).await?;
    println!("{}", serde_json::to_string_pretty(&answer)?);
    Ok(())
}
