mod http;
mod terminal;

use std::io;

use chatwidget::config::parse_timeout_secs;
use chatwidget::{ChatWidget, ConfigError, DEFAULT_ENDPOINT, SendError, SubmitOutcome, WidgetConfig};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use http::ReqwestTransport;
use terminal::{TerminalSurface, run_repl};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("http client setup failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("nothing to send")]
    EmptyMessage,
    #[error("send failed: {0}")]
    SendFailed(SendError),
}

#[derive(Parser, Debug)]
#[command(name = "chat-cli", about = "Terminal client for the chat endpoint")]
struct Cli {
    #[arg(long, env = "CHAT_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Abort a round-trip after this many seconds. Unset waits indefinitely.
    #[arg(long, env = "CHAT_REQUEST_TIMEOUT_SECS")]
    timeout_secs: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive session; `exit` or `quit` ends it.
    Repl,
    /// Send one message and print the exchange.
    Send {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = WidgetConfig::new(&cli.endpoint)?
        .with_request_timeout(parse_timeout_secs(cli.timeout_secs.as_deref())?);
    let transport = ReqwestTransport::new(&config)?;
    tracing::debug!(endpoint = transport.endpoint(), "chat transport ready");

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => run_interactive(transport).await,
        Command::Send { text } => run_send(transport, &text.join(" ")).await,
    }
}

async fn run_interactive(transport: ReqwestTransport) -> Result<(), CliError> {
    let widget = ChatWidget::new(TerminalSurface::new(io::stdout()), transport);
    widget
        .surface()
        .notice("Type a message and press Enter. `exit` or `quit` to leave.")?;
    run_repl(io::stdin().lock(), &widget).await?;
    Ok(())
}

async fn run_send(transport: ReqwestTransport, text: &str) -> Result<(), CliError> {
    let widget = ChatWidget::new(TerminalSurface::new(io::stdout()), transport);
    widget.surface().set_input(text);
    match widget.submit().await {
        SubmitOutcome::Replied => Ok(()),
        SubmitOutcome::Failed(e) => Err(CliError::SendFailed(e)),
        SubmitOutcome::Empty | SubmitOutcome::Busy => Err(CliError::EmptyMessage),
    }
}
