use std::sync::Arc;
use tokio::sync::Notify;

use devserve::config::{AppState, Config};
use devserve::{logger, server};

fn main() {
    if let Err(e) = run() {
        logger::log_fatal(&e.to_string());
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;

    let state = Arc::new(AppState::new(cfg).map_err(|e| format!("Cannot serve directory: {e}"))?);

    // Port already in use is fatal: no retry, no fallback port
    let listener = server::create_listener(addr).map_err(|e| format!("Failed to bind {addr}: {e}"))?;

    logger::log_server_start(&listener.local_addr()?);

    let shutdown = Arc::new(Notify::new());
    server::signal::start_signal_handler(Arc::clone(&shutdown));

    server::start_server_loop(listener, state, shutdown).await?;
    Ok(())
}
