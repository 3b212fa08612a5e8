use anyhow::{Context, Result};
use app_jwt::tracing_config::{init_tracing, TracingConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "app-jwt")]
#[command(about = "Generate a 10-minute RS256 JWT for GitHub App authentication", long_about = None)]
struct Args {
    /// Application identifier, used as the `iss` claim
    app_id: String,

    /// Path to the PEM-encoded RSA private key
    key_path: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(&TracingConfig::default());
    debug!(app_id = %args.app_id, key_path = %args.key_path.display(), "Generating JWT");

    let token = app_jwt::issue_token(&args.app_id, &args.key_path)
        .with_context(|| format!("Failed to generate JWT for app {}", args.app_id))?;

    println!("JWT={token}");
    Ok(())
}
