use std::process::ExitCode;
use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vocab_notebook::{config::Settings, content, db, handlers, paths, state::AppState};

#[tokio::main]
async fn main() -> ExitCode {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vocab_notebook=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let settings = Settings::load();

  let vocabulary = match content::load_vocabulary(&settings.vocabulary_path) {
    Ok(vocabulary) => vocabulary,
    Err(e) => {
      tracing::error!("{} ({})", e.user_message(), e);
      return ExitCode::FAILURE;
    }
  };
  tracing::info!(
    "Loaded {} sections from {}",
    vocabulary.sections.len(),
    settings.vocabulary_path.display()
  );

  let pool = match db::init_db(&settings.database_path) {
    Ok(pool) => pool,
    Err(e) => {
      tracing::error!("Failed to initialize database {}: {}", settings.database_path.display(), e);
      return ExitCode::FAILURE;
    }
  };

  let state = match AppState::load(vocabulary, pool, settings.session_id.clone()) {
    Ok(state) => state,
    Err(e) => {
      tracing::error!("Failed to load study progress: {}", e);
      return ExitCode::FAILURE;
    }
  };

  let app = handlers::router(state).fallback_service(ServeDir::new(paths::STATIC_DIR));

  let bind_addr = settings.bind_addr();
  let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
    Ok(listener) => listener,
    Err(e) => {
      tracing::error!("Failed to bind to {}: {}", bind_addr, e);
      return ExitCode::FAILURE;
    }
  };

  tracing::info!("Server running on http://localhost:{}", settings.server_port);

  if let Err(e) = axum::serve(listener, app).await {
    tracing::error!("Server error: {}", e);
    return ExitCode::FAILURE;
  }
  ExitCode::SUCCESS
}
