use std::sync::Arc;

use tokio::sync::Notify;

use gated_site::config::{AppState, Config, DEFAULT_CONFIG_PATH};
use gated_site::logger;
use gated_site::server::{create_reusable_listener, signal, start_server_loop};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load_from(DEFAULT_CONFIG_PATH)?;

    // Worker count follows `server.workers`, CPU cores otherwise
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
        println!("[CONFIG] Using {workers} worker threads");
    } else {
        println!("[CONFIG] Using default worker threads (CPU cores)");
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    logger::init(&cfg)?;

    let addr = cfg.get_socket_addr()?;
    let listener = create_reusable_listener(addr)?;
    let state = Arc::new(AppState::new(&cfg));

    logger::log_server_start(&addr, &cfg);
    println!("[CONFIG] Loaded configuration:");
    println!("  - Server: {}:{}", cfg.server.host, cfg.server.port);
    println!("  - Max body size: {} bytes", cfg.http.max_body_size);
    println!("  - Max connections: {:?}", cfg.performance.max_connections);
    println!(
        "  - Endpoint header checks: {}\n",
        cfg.gate.check_endpoint_headers
    );

    let shutdown = Arc::new(Notify::new());
    signal::start_signal_handler(Arc::clone(&shutdown))?;

    start_server_loop(listener, state, shutdown).await?;
    Ok(())
}
