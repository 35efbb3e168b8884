//! origin-gate
//!
//! Serves a single-page app over HTTPS behind an origin/referer check.
//!
//! ```text
//! Client ─▶ request id ─▶ trace ─▶ timeout / body limit ─▶ security headers
//!        ─▶ origin guard ─┬─ 403 ─▶ client
//!                         ├─▶ /api/...
//!                         └─▶ static roots ─▶ index.html
//! ```
//!
//! Configuration comes from an optional TOML file, with `PORT` and
//! `APP_ENV` overriding the bind port and environment.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use origin_gate::config;
use origin_gate::lifecycle::startup;

#[derive(Parser, Debug)]
#[command(name = "origin-gate", version, about = "HTTPS SPA server with origin/referer validation")]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging is not up yet; report config errors on stderr.
    let config = match config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("origin-gate: {e}");
            return ExitCode::FAILURE;
        }
    };

    match startup::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server failed");
            ExitCode::FAILURE
        }
    }
}
