//! GenUI CLI
//!
//! Argument parsing, request guarding and the interactive session loop. The
//! binary in `main.rs` only wires these to stdin/stdout and a real client.

#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use genui_core::{FlowType, GenUiConfig, Orchestrator, OrchestratorResult};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Message returned when `new` or `modify` is given no prompt
pub const PROMPT_REQUIRED: &str = "Prompt is required";

#[derive(Debug, Parser)]
#[command(name = "genui")]
#[command(about = "Turn natural-language UI requests into validated, versioned UI code")]
#[command(version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a single flow and print the result
    Run {
        /// Flow to run: new, modify or rollback
        #[arg(short, long, default_value = "new")]
        flow: String,

        /// UI request (not needed for rollback)
        prompt: Option<String>,
    },
    /// Read commands from stdin, one per line, against one history
    Session,
}

/// Load configuration from `path` (or defaults) and apply env overrides
pub fn load_config(path: Option<&Path>) -> anyhow::Result<GenUiConfig> {
    let config = match path {
        Some(path) => GenUiConfig::load(path)?,
        None => GenUiConfig::default(),
    };
    Ok(config.with_env_overrides())
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins; otherwise `info`. Stdout is left for results.
pub fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

/// Guard and run one flow by name
///
/// Empty prompts are refused for flows that call agents; the orchestrator is
/// not touched in that case.
pub async fn execute(
    orchestrator: &mut Orchestrator,
    flow_name: &str,
    prompt: Option<&str>,
) -> OrchestratorResult {
    let prompt = prompt.unwrap_or_default();
    let needs_prompt = flow_name
        .parse::<FlowType>()
        .is_ok_and(|flow| flow.uses_agents());

    if needs_prompt && prompt.trim().is_empty() {
        return OrchestratorResult::failure(PROMPT_REQUIRED);
    }

    orchestrator.dispatch(prompt, flow_name).await
}

/// Session command errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// First word is not a known command
    #[error("Unknown command: {0}")]
    Unknown(String),

    /// `show` argument is not a version number
    #[error("Invalid version number: {0}")]
    InvalidVersion(String),
}

/// One line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Run a flow (`new <prompt>`, `modify <prompt>`, `rollback`)
    Flow { flow: FlowType, prompt: String },
    /// Print the latest version
    Current,
    /// Print every version
    History,
    /// Print version `n`
    Show(u32),
    /// Drop history
    Clear,
    /// End the session
    Quit,
}

impl SessionCommand {
    /// Parse a non-blank input line
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        if let Ok(flow) = word.parse::<FlowType>() {
            return Ok(Self::Flow {
                flow,
                prompt: rest.to_string(),
            });
        }

        match word {
            "current" => Ok(Self::Current),
            "history" => Ok(Self::History),
            "show" => rest
                .parse()
                .map(Self::Show)
                .map_err(|_| CommandError::InvalidVersion(rest.to_string())),
            "clear" => Ok(Self::Clear),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Interactive session over a single orchestrator
#[derive(Debug)]
pub struct Session {
    orchestrator: Orchestrator,
}

impl Session {
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self { orchestrator }
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    /// Handle one line; `None` ends the session
    pub async fn handle_line(&mut self, line: &str) -> Option<Value> {
        let command = match SessionCommand::parse(line) {
            Ok(command) => command,
            Err(err) => return Some(json!({ "error": err.to_string() })),
        };

        let reply = match command {
            SessionCommand::Flow { flow, prompt } => {
                let result = execute(&mut self.orchestrator, flow.as_str(), Some(&prompt)).await;
                to_value(&result)
            }
            SessionCommand::Current => to_value(&self.orchestrator.current_ui()),
            SessionCommand::History => to_value(&self.orchestrator.version_history()),
            SessionCommand::Show(n) => match self.orchestrator.version(n) {
                Some(version) => to_value(version),
                None => json!({ "error": format!("Version {n} not found") }),
            },
            SessionCommand::Clear => {
                self.orchestrator.clear_history();
                json!({ "success": true })
            }
            SessionCommand::Quit => return None,
        };

        Some(reply)
    }

    /// Read lines until EOF or `quit`, writing one JSON reply per command
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let Some(reply) = self.handle_line(&line).await else {
                break;
            };
            writer.write_all(serde_json::to_string(&reply)?.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
        Ok(())
    }
}

fn to_value<T: serde::Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|err| json!({ "error": err.to_string() }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_session_commands() {
        assert_eq!(
            SessionCommand::parse("new  add a login form ").unwrap(),
            SessionCommand::Flow {
                flow: FlowType::New,
                prompt: "add a login form".to_string(),
            }
        );
        assert_eq!(
            SessionCommand::parse("rollback").unwrap(),
            SessionCommand::Flow {
                flow: FlowType::Rollback,
                prompt: String::new(),
            }
        );
        assert_eq!(SessionCommand::parse("show 3").unwrap(), SessionCommand::Show(3));
        assert_eq!(SessionCommand::parse("exit").unwrap(), SessionCommand::Quit);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            SessionCommand::parse("publish now").unwrap_err(),
            CommandError::Unknown("publish".to_string())
        );
        assert_eq!(
            SessionCommand::parse("show latest").unwrap_err().to_string(),
            "Invalid version number: latest"
        );
    }

    #[test]
    fn cli_parses_run() {
        let cli = Cli::parse_from(["genui", "run", "--flow", "modify", "darker header"]);
        match cli.command {
            Command::Run { flow, prompt } => {
                assert_eq!(flow, "modify");
                assert_eq!(prompt.as_deref(), Some("darker header"));
            }
            Command::Session => panic!("expected run"),
        }
        assert!(cli.config.is_none());
    }

    #[test]
    fn cli_parses_global_config() {
        let cli = Cli::parse_from(["genui", "session", "--config", "genui.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("genui.toml")));
        assert!(matches!(cli.command, Command::Session));
    }
}
