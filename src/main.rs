use anyhow::{Context, Result};
use scribehook::config::Config;
use scribehook::event::HookContext;
use scribehook::hook;
use tokio::io::AsyncReadExt;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Diagnostics go to stderr; stdout stays clean for the host runtime.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    config.warn_on_missing_collaborators();

    let mut raw = String::new();
    tokio::io::stdin()
        .read_to_string(&mut raw)
        .await
        .context("Failed to read hook context from stdin")?;

    let ctx: HookContext =
        serde_json::from_str(&raw).context("Failed to parse hook context")?;

    // Fire-and-forget: the host runtime never sees individual step failures.
    if let Err(err) = hook::handle_event(&config, &ctx).await {
        error!("Hook invocation failed: {:#}", err);
    }

    Ok(())
}
