//! Argo CLI - Command line tool for searching Argo float telemetry.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "argo-cli",
    version,
    about = "Argo float telemetry toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: argo_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    argo_cmd::run(cli.command).await
}
