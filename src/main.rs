use std::io;
use std::process;

use sssp_adapter::{protocol, Config, Sssp};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = Config::from_args(std::env::args_os());

    // stdout carries protocol frames, so logs go to stderr.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!(max_message_bytes = config.max_message_bytes, "sssp adapter started");

    let mut reader = io::stdin().lock();
    let mut writer = io::stdout().lock();

    if let Err(e) = protocol::serve(&mut reader, &mut writer, &Sssp, &config) {
        tracing::error!(error = %e, "session aborted");
        process::exit(1);
    }
    Ok(())
}
