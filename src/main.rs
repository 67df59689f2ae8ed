use clap::Parser;

use gym_onboarding_lib::bootstrap::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    bootstrap::start(cli).await
}
