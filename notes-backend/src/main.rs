//! Notes backend server.
//!
//! Default: http://0.0.0.0:8000/api/notes

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;
use std::time::Instant;

use notes_backend::config::Config;
use notes_backend::db::NoteStore;
use notes_backend::{controllers, middleware, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    log::info!("Notes backend v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();
    let bind_addr = (config.bind_address.clone(), config.port);

    log::info!(
        "Opening note store at {} (pool size {})",
        config.database_url,
        config.db_pool_size
    );
    let store = match NoteStore::open_with_pool_size(&config.database_url, config.db_pool_size) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            log::error!("Failed to open note store: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    // Clone needed for shutdown (before HttpServer moves the store)
    let shutdown_store = Arc::clone(&store);
    let started_at = Instant::now();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState {
                store: Arc::clone(&store),
                config: config.clone(),
                started_at,
            }))
            .wrap(Logger::default())
            .wrap(middleware::cors_headers())
            .wrap(middleware::cors())
            .configure(controllers::health::config_routes)
            .configure(controllers::notes::config)
    })
    .disable_signals()
    .bind(bind_addr.clone())?
    .run();

    log::info!("Listening on http://{}:{}", bind_addr.0, bind_addr.1);

    // Get server handle for graceful shutdown
    let server_handle = server.handle();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        log::info!("Received Ctrl+C, shutting down...");
        server_handle.stop(true).await;
    });

    let result = server.await;

    log::info!("Closing note store");
    shutdown_store.close();
    log::info!("Shutdown complete");

    result
}
