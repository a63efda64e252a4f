use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use board::config::AppConfig;
use board::database::init_schema;
use board::routes::create_router;
use board::state::AppState;
use common::database;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting board service");

    // Initialize database connection pool
    let db_config = database::DatabaseConfig::from_env()?;
    let pool = database::init_pool(&db_config).await?;

    // Check database connectivity
    if database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    // Make sure the schema exists before serving requests
    init_schema(&pool).await?;

    let config = AppConfig::from_env()?;
    let state = AppState::new(pool, config.clone());

    // Seed or promote the bootstrap admin account
    if let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password) {
        let admin = state.users.ensure_admin(username, password).await?;
        info!("Admin account ready: {}", admin.username);
    }

    info!("Board service initialized successfully");

    // Start the web server
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Board service listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
