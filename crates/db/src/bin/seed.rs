//! Reset the catalog to a built-in dataset.
//!
//! ```text
//! DATABASE_URL=postgres://... SEED_DATASET=development setlist-seed
//! ```

use anyhow::{bail, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "setlist_db=debug,setlist_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let dataset = std::env::var("SEED_DATASET").unwrap_or_else(|_| "development".into());

    let data = match dataset.as_str() {
        "development" => setlist_db::seed::development_data(),
        "test" => setlist_db::seed::test_data(),
        other => bail!("Unknown SEED_DATASET '{other}'. Must be one of: development, test"),
    };

    let pool = setlist_db::create_pool(&database_url, 1)
        .await
        .context("Failed to connect to database")?;

    setlist_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    let summary = setlist_db::seed::run(&pool, &data)
        .await
        .context("Failed to seed database")?;
    tracing::info!(
        dataset = %dataset,
        genres = summary.genres,
        artists = summary.artists,
        songs = summary.songs,
        playlists = summary.playlists,
        "Seed complete"
    );

    pool.close().await;
    Ok(())
}
