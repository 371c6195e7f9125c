use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{info, warn};

use mergington::config::AppConfig;
use mergington::database::activity_registry::ActivityRegistry;
use mergington::web;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    let registry = Arc::new(ActivityRegistry::seeded(config.capacity_policy));
    info!(
        activities = registry.len(),
        capacity_policy = ?config.capacity_policy,
        version = env!("CARGO_PKG_VERSION"),
        "activity registry seeded"
    );

    let app = web::build_router(registry, &config.static_dir);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("cannot parse HOST/PORT into a socket address");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback_port = config.port.saturating_add(1);
            warn!(
                "could not bind {}: {}; trying fallback {}:{}",
                addr, e, config.host, fallback_port
            );
            let fallback: SocketAddr = format!("{}:{}", config.host, fallback_port)
                .parse()
                .expect("cannot parse fallback address");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("cannot bind fallback port")
        }
    };

    match listener.local_addr() {
        Ok(bound) => info!("serving on http://{}/static/index.html", bound),
        Err(e) => warn!("listener has no local address: {}", e),
    }

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("server error: {}", e);
        std::process::exit(1);
    }
}
