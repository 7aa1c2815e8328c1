use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use todo_core::{TodoDraft, TodoStore};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;

    let store = Arc::new(TodoStore::new());
    // Seed the list so a fresh instance has something to show.
    for content in ["do this", "do that"] {
        store.create(&TodoDraft::new(content));
    }

    tracing::info!("listening on {addr}");
    todo_server::run(listener, store).await
}
