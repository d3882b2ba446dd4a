//! `school-cli`: the admin workflow from a terminal.
//!
//! The session token lives in a JSON file (`--session-file`), so a `login`
//! carries over to later invocations the way `localStorage` does in the
//! browser.

mod commands;
mod error;
mod kind;
mod store;
mod transport;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use workflow::config::{API_BASE_URL_ENV, DEFAULT_API_BASE_URL};
use workflow::{ApiClient, ApiConfig, SessionStore};

use crate::commands::is_yes;
use crate::error::CliError;
use crate::kind::Kind;
use crate::store::FileStore;
use crate::transport::ReqwestTransport;

#[derive(Parser, Debug)]
#[command(name = "school-cli", about = "School administration API client", version)]
struct Cli {
    #[arg(long, env = API_BASE_URL_ENV, default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    #[arg(long, env = "SCHOOL_SESSION_FILE", default_value = ".school-session.json")]
    session_file: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the session token.
    Login {
        #[arg(long)]
        username: String,
        /// Read from the terminal when omitted.
        #[arg(long, env = "SCHOOL_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Forget the stored session.
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// List a collection, optionally filtered.
    List {
        kind: Kind,
        #[arg(long)]
        filter: Option<String>,
    },
    /// Show one record as JSON.
    Show { kind: Kind, id: i64 },
    /// Create a record from `--set field=value` pairs.
    Create {
        kind: Kind,
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        sets: Vec<String>,
    },
    /// Change fields on an existing record.
    Update {
        kind: Kind,
        id: i64,
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        sets: Vec<String>,
        /// Skip the confirmation prompt when the change moves the record to
        /// another owner.
        #[arg(long)]
        yes: bool,
    },
    /// Delete a record after confirmation.
    Delete {
        kind: Kind,
        id: i64,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

fn read_line(prompt: &str) -> io::Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{prompt}")?;
    stderr.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

fn confirm_unless(yes: bool, prompt: &str) -> io::Result<bool> {
    if yes { Ok(true) } else { read_line(prompt).map(|answer| is_yes(&answer)) }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = ApiConfig::new(&cli.base_url)?;
    let session = SessionStore::new(FileStore::new(&cli.session_file));
    let api = ApiClient::new(config, ReqwestTransport::new()?, session);
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Login { username, password } => {
            let password = match password {
                Some(password) => password,
                None => read_line("Password: ")?,
            };
            commands::login(&api, &username, &password, &mut out).await
        }
        Command::Logout => commands::logout(&api, &mut out),
        Command::Whoami => commands::whoami(&api, &mut out),
        Command::List { kind, filter } => {
            crate::with_kind!(kind, |R, D| commands::list::<R, _, _>(&api, filter.as_deref(), &mut out).await)
        }
        Command::Show { kind: Kind::Classrooms, id } => commands::show_classroom(&api, id, &mut out).await,
        Command::Show { kind, id } => crate::with_kind!(kind, |R, D| commands::show::<R, _, _>(&api, id, &mut out).await),
        Command::Create { kind, sets } => {
            crate::with_kind!(kind, |R, D| commands::create::<D, _, _>(&api, &sets, &mut out).await)
        }
        Command::Update { kind, id, sets, yes } => {
            let confirm = |prompt: &str| confirm_unless(yes, prompt);
            crate::with_kind!(kind, |R, D| commands::update::<D, _, _>(&api, id, &sets, confirm, &mut out).await.map(|_| ()))
        }
        Command::Delete { kind, id, yes } => {
            let confirm = |prompt: &str| confirm_unless(yes, prompt);
            crate::with_kind!(kind, |R, D| commands::delete::<R, _, _>(&api, id, confirm, &mut out).await.map(|_| ()))
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(?error, "command failed");
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}
