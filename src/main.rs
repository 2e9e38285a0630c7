use clap::Parser;
use recipes::{
    api::{handlers::AppState, routes},
    cli::{commands, Cli, Commands},
    config::Settings,
    db, Error, RecipeService, Result, SearchCriteria, SqliteRecipeStore,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,recipes=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let settings = Settings::from_env()?;
    settings.validate()?;

    match cli.command {
        Commands::Serve { port, host } => {
            serve(settings, port, host).await?;
        }
        Commands::Migrate => {
            migrate(settings).await?;
        }
        Commands::List => {
            commands::list(&settings.server_url()).await?;
        }
        Commands::Show { id } => {
            commands::show(&settings.server_url(), id).await?;
        }
        Commands::Search {
            vegetarian,
            servings,
            include,
            exclude,
            text,
        } => {
            let criteria = SearchCriteria {
                vegetarian,
                servings,
                include_ingredients: include,
                exclude_ingredients: exclude,
                instruction_text: text,
            };
            commands::search(&settings.server_url(), &criteria).await?;
        }
        Commands::Delete { id } => {
            commands::delete(&settings.server_url(), id).await?;
        }
    }

    Ok(())
}

async fn serve(mut settings: Settings, port: Option<u16>, host: Option<String>) -> Result<()> {
    if let Some(port) = port {
        settings.server.port = port;
    }
    if let Some(host) = host {
        settings.server.host = host;
    }

    info!("Starting recipe server");
    info!("Database: {}", settings.database.url);

    let pool = db::init_pool_with_config(&settings.database).await?;
    info!(
        "Database connection established (max_connections: {}, min_connections: {})",
        settings.database.max_connections, settings.database.min_connections
    );

    db::run_migrations(&pool).await?;
    info!("Database migrations completed");

    let store = Arc::new(SqliteRecipeStore::new(pool.clone()));
    let state = AppState {
        pool,
        service: RecipeService::new(store),
    };

    let app = routes::create_router(state, &settings);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn migrate(settings: Settings) -> Result<()> {
    info!("Running database migrations");

    let pool = db::init_pool(&settings.database.url).await?;
    db::run_migrations(&pool).await?;

    println!("✓ Database migrations completed successfully");
    Ok(())
}
