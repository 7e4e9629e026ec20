use std::sync::Arc;

use tokio::net::TcpListener;

use folio::logger::Logger;
use folio::{AppState, Config, FileStore, WikiError, app_router};

#[tokio::main]
async fn main() -> Result<(), WikiError> {
    if Logger::init().is_err() {
        eprintln!("logger already initialized");
    }

    let config = Config::from_env();
    std::fs::create_dir_all(&config.entries_dir)?;

    let store = Arc::new(FileStore::new(config.entries_dir.clone()));
    let state = AppState { store };
    let app = app_router(state);

    let addr = config.socket_addr();
    log::info!("Wiki listening on http://{}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await.map_err(WikiError::from)
}
