use company_master::server::{
    config::Config, error::Error, model::app::AppState, router, startup,
};
use dioxus_logger::tracing;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let session = startup::connect_to_session(&config).await?;
    let db = startup::connect_to_database(&config).await?;

    let app = router::routes().with_state(AppState { db }).layer(session);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Starting server on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
