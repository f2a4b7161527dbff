//! flyorgs - Main entry point

use clap::Parser;
use log::{debug, info};

use flyorgs::{
    run_orgs_command, Cli, Command, CommandContext, FlyClient, Result, TerminalPrompter,
    TokenResolver,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting flyorgs v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli).await {
        debug!("Command failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let Command::Orgs { command } = &cli.command;

    debug!(
        "CLI args: command={}, api_url={}, output={}, batch={}",
        command.name(),
        cli.api_url,
        cli.output_format(),
        cli.batch
    );

    // Member management commands never reach the API
    let token = if command.requires_session() {
        TokenResolver::new().resolve(cli.access_token.as_deref())?
    } else {
        cli.access_token.clone().unwrap_or_default()
    };

    let client = FlyClient::new(token, cli.api_url.clone());
    let prompter = TerminalPrompter::new(cli.batch);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut ctx = CommandContext::new(
        &client,
        cli.output_format(),
        cli.batch,
        &prompter,
        &mut out,
    );

    run_orgs_command(&mut ctx, command).await?;

    info!("Completed successfully");
    Ok(())
}
