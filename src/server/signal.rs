// Signal handling module (nginx-style)
//
// Supported signals:
// - SIGTERM: Graceful shutdown
// - SIGINT:  Graceful shutdown (Ctrl+C)
// - SIGUSR1: Reopen log files

use std::sync::Arc;
use tokio::sync::Notify;

use crate::logger;

/// Start signal handlers (Unix only)
///
/// | Signal  | Action           | Nginx Equivalent  |
/// |---------|------------------|-------------------|
/// | SIGTERM | Graceful stop    | `nginx -s stop`   |
/// | SIGINT  | Graceful stop    | Ctrl+C            |
/// | SIGUSR1 | Reopen log files | `nginx -s reopen` |
#[cfg(unix)]
pub fn start_signal_handler(shutdown: Arc<Notify>) -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigusr1 = signal(SignalKind::user_defined1())?;

    logger::write_info(&format!(
        "[Signal] Handlers registered (TERM/INT stop, USR1 reopen logs), pid {}",
        std::process::id()
    ));

    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = sigterm.recv() => {
                    logger::write_info("[Signal] SIGTERM received");
                    shutdown.notify_one();
                    break;
                }
                _ = sigint.recv() => {
                    logger::write_info("[Signal] SIGINT received");
                    shutdown.notify_one();
                    break;
                }
                _ = sigusr1.recv() => {
                    if let Some(writer) = logger::writer::get() {
                        match writer.reopen() {
                            Ok(()) => logger::log_logs_reopened(),
                            Err(e) => {
                                logger::log_error(&format!("Failed to reopen log files: {e}"));
                            }
                        }
                    }
                }
            }
        }
    });

    Ok(())
}

/// Non-Unix fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(shutdown: Arc<Notify>) -> std::io::Result<()> {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            logger::write_info("[Signal] Ctrl+C received");
            shutdown.notify_one();
        }
    });
    Ok(())
}
