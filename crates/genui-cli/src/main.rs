use anyhow::Context;
use clap::Parser;
use genui_cli::{execute, init_tracing, load_config, Cli, Command, Session};
use genui_core::Orchestrator;
use genui_llm::GeminiClient;
use std::sync::Arc;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = load_config(cli.config.as_deref()).context("loading configuration")?;
    let client =
        GeminiClient::new(config.completion.clone()).context("building completion client")?;
    tracing::debug!(
        model = %client.config().model,
        endpoint = %client.config().endpoint,
        max_depth = config.validation.max_depth,
        "configuration ready"
    );
    let mut orchestrator = Orchestrator::from_config(Arc::new(client), &config);

    match cli.command {
        Command::Run { flow, prompt } => {
            let result = execute(&mut orchestrator, &flow, prompt.as_deref()).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
            if !result.success {
                std::process::exit(1);
            }
        }
        Command::Session => {
            let mut session = Session::new(orchestrator);
            session
                .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
                .await?;
        }
    }

    Ok(())
}
