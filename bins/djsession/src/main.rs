//! djsession: verify and decode Django session cookies offline.

mod logging;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use djsession_cli::output::{ellipsize, Status};
use djsession_cli::{render_session, OutputFormat};
use djsession_core::prelude::*;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "djsession")]
#[command(about = "Verify and decode signed Django session cookies")]
#[command(version)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify a cookie and print the session data
    Decode {
        #[command(flatten)]
        key: KeyArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },

    /// Verify a cookie's signature without decoding it
    Verify {
        #[command(flatten)]
        key: KeyArgs,
    },
}

#[derive(Args)]
struct KeyArgs {
    /// Cookie value, or `-` to read it from stdin
    token: String,

    /// Django SECRET_KEY (falls back to the config file, then DJANGO_SECRET_KEY)
    #[arg(short, long)]
    secret: Option<String>,

    /// Signing salt
    #[arg(long)]
    salt: Option<String>,

    /// TOML file with `secret_key` and `salt`
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl KeyArgs {
    fn token(&self) -> anyhow::Result<String> {
        if self.token != "-" {
            return Ok(self.token.clone());
        }

        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read token from stdin")?;
        Ok(buf.trim().to_string())
    }

    fn resolve(&self) -> Result<ResolvedConfig> {
        let from_file = SessionOptions::load(self.config.as_deref())?;
        let explicit = SessionOptions {
            secret_key: self.secret.clone(),
            salt: self.salt.clone(),
        };
        explicit.or(from_file).resolve()
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        Status::warning(&e.to_string());
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<SessionError>() {
            Some(session_err) => {
                Status::session_error(session_err);
                exit_code(session_err.exit_code())
            }
            None => {
                Status::error(&format!("{err:#}"));
                exit_code(exit_codes::FAILURE)
            }
        },
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Decode { key, format } => {
            let token = key.token()?;
            let config = key.resolve()?;
            let session = decode_session_with_config(&token, &config)?;
            println!("{}", render_session(&session, format)?);
        }

        Commands::Verify { key } => {
            let token = key.token()?;
            let config = key.resolve()?;
            let signed = verify_session(&token, &config)?;

            Status::success("Signature valid");
            Status::field("salt", config.salt());
            Status::field("data", &ellipsize(signed.data_segment(), 60));
            Status::field("compressed", if signed.is_compressed() { "yes" } else { "no" });
            Status::field("timestamp", signed.timestamp_segment().unwrap_or("-"));
        }
    }

    Ok(())
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
