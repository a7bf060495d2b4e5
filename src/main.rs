use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use campus_users::{
    config::AppConfig,
    parse, telemetry,
    users::{ChangePassword, Token, User, UserCreate, UserEdit, UserInDB, UserSerialized},
    SchemaError, Validate,
};

/// Validates user account documents against the college account rules.
#[derive(Parser)]
#[command(name = "campus-users")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate one JSON document
    Check {
        kind: Kind,
        /// Reads stdin when omitted
        file: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    User,
    UserInDb,
    UserCreate,
    UserEdit,
    ChangePassword,
    Token,
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();
    telemetry::init(&config.log);

    let cli = Cli::parse();
    match cli.command {
        Command::Check { kind, file } => {
            let input = read_input(file.as_ref())?;
            let outcome = match kind {
                Kind::User => parse::<User>(&input).and_then(|u| serialized(&u)),
                Kind::UserInDb => parse::<UserInDB>(&input).and_then(|u| serialized(&u.user)),
                Kind::UserCreate => accepted::<UserCreate>(&input),
                Kind::UserEdit => accepted::<UserEdit>(&input),
                Kind::ChangePassword => accepted::<ChangePassword>(&input),
                Kind::Token => accepted::<Token>(&input),
            };

            match outcome {
                Ok(out) => {
                    info!(?kind, "document accepted");
                    println!("{out}");
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    warn!(?kind, error = %e, "document rejected");
                    println!("{}", e.detail());
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

fn read_input(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            Ok(buf)
        }
    }
}

fn accepted<T: DeserializeOwned + Validate>(input: &str) -> Result<String, SchemaError> {
    parse::<T>(input).map(|_| "ok".to_string())
}

fn serialized(user: &User) -> Result<String, SchemaError> {
    let out = UserSerialized::from_user(user)?;
    serde_json::to_string_pretty(&out).map_err(SchemaError::from)
}
