use axum_helpers::server::{create_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres;
use domain_products::{handlers, PgProductRepository, ProductService};
use migration::Migrator;
use tracing::info;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre before any fallible operations
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    postgres::run_migrations::<Migrator>(&db, "catalog-api")
        .await
        .map_err(|e| eyre::eyre!("Migration failed: {}", e))?;

    let repository = PgProductRepository::new(db.clone());
    let service = ProductService::new(repository);

    let router = create_router::<handlers::ApiDoc>(handlers::router(service));

    info!("Catalog API listening on {}", config.server.address());
    create_app(router, &config.server).await?;

    // Server has shut down gracefully; release the pool
    db.close().await.ok();

    Ok(())
}
