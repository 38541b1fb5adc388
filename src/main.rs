mod model;
mod server;

use crate::server::{
    allocator::IdAllocator, config::Config, error::AppError, router, startup, state::AppState,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    if let Err(e) = run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let allocator = IdAllocator::new(config.id_allocation);

    tracing::info!(
        "Allocating ids with the {} policy",
        allocator.policy().as_str()
    );

    let app = router::router(AppState::new(db, allocator), config.request_timeout);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}
