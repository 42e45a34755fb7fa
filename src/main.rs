use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use cv_ranker::config::Settings;
use cv_ranker::core::Matcher;
use cv_ranker::routes::{self, AppState};
use cv_ranker::services::SnapshotStore;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting CV ranker service...");

    let sources = settings.data.sources();
    info!(
        "Employers: {}, candidates: {}",
        sources.employers.display(),
        sources.candidates.display()
    );

    let matcher = Matcher::new(sources, settings.matching.duplicate_ids);

    let app_state = if settings.data.snapshot {
        let store = SnapshotStore::load(matcher).map_err(|e| {
            error!("Failed to load initial snapshot: {}", e);
            std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
        })?;
        info!("Serving from in-memory snapshot");
        AppState::with_snapshot(Arc::new(store))
    } else {
        info!("Reloading source documents on every request");
        AppState::new(matcher)
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
